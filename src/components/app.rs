use super::cutter_view::CutterView;
use crate::config::CutterConfig;
use crate::util::set_debug_logging;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(CutterConfig::load);
    let draft = use_state(|| config.image_url.clone().unwrap_or_default());
    let error = use_state(|| None::<String>);
    // bumped on every Load press so the same URL can be loaded again
    let load_seq = use_state(|| 0u32);

    // Persist config changes
    {
        let config = config.clone();
        use_effect_with((*config).clone(), move |cfg| {
            set_debug_logging(cfg.debug_log);
            cfg.save();
            || ()
        });
    }

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(input.value());
            }
        })
    };
    let on_load = {
        let draft = draft.clone();
        let config = config.clone();
        let error = error.clone();
        let load_seq = load_seq.clone();
        Callback::from(move |_| {
            let url = draft.trim().to_string();
            if url.is_empty() {
                return;
            }
            error.set(None);
            load_seq.set(load_seq.wrapping_add(1));
            config.set(CutterConfig {
                image_url: Some(url),
                ..(*config).clone()
            });
        })
    };
    let on_error = {
        let error = error.clone();
        Callback::from(move |msg: String| error.set(Some(msg)))
    };

    let source = config.image_url.clone().map(AttrValue::from);
    let export_type = AttrValue::from(config.export_type.clone());
    let load_seq = *load_seq;

    html! {
        <div id="root" style="display:flex; flex-direction:column; width:100vw; height:100vh; background:#0e1116; color:#c9d1d9;">
            <div id="top-bar" style="display:flex; gap:8px; padding:8px; align-items:center;">
                <input type="text" placeholder="Image URL or data URL" value={(*draft).clone()} oninput={on_input} style="flex:1;" />
                <button onclick={on_load}>{"Load"}</button>
            </div>
            { if let Some(msg) = &*error { html!{ <div style="font-size:12px; color:#f85149; padding:0 8px 6px 8px;">{ msg.clone() }</div> } } else { html!{} } }
            <div style="flex:1; min-height:0;">
                <CutterView {source} {load_seq} {export_type} {on_error} />
            </div>
        </div>
    }
}
