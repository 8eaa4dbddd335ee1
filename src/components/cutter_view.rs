use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::{cutter_controls::CutterControls, preview_panel::PreviewPanel};
use crate::cutter::{Container, PictureCutter};
use crate::util::cwarn;

#[derive(Properties, PartialEq, Clone)]
pub struct CutterViewProps {
    pub source: Option<AttrValue>,
    /// Changes whenever the host asks for `source` to be (re)loaded.
    #[prop_or_default]
    pub load_seq: u32,
    pub export_type: AttrValue,
    pub on_error: Callback<String>,
}

#[function_component(CutterView)]
pub fn cutter_view(props: &CutterViewProps) -> Html {
    let container_ref = use_node_ref();
    let cutter = use_mut_ref(|| None::<PictureCutter>);
    let loaded = use_state(|| false);
    let exported = use_state(|| None::<AttrValue>);

    // Mount: create the widget inside the container, follow window resizes.
    {
        let container_ref = container_ref.clone();
        let cutter = cutter.clone();
        let loaded = loaded.clone();
        let on_error = props.on_error.clone();
        use_effect_with((), move |_| {
            if let Some(el) = container_ref.cast::<HtmlElement>() {
                match PictureCutter::new(Some(Container::Element(el))) {
                    Ok(c) => {
                        {
                            let loaded = loaded.clone();
                            let on_error = on_error.clone();
                            c.set_on_error(move |err| {
                                loaded.set(false);
                                on_error.emit(err.to_string());
                            });
                        }
                        c.set_on_loaded(move |_| loaded.set(true));
                        *cutter.borrow_mut() = Some(c);
                    }
                    Err(err) => {
                        cwarn(&err.to_string());
                        on_error.emit(err.to_string());
                    }
                }
            }
            let window = web_sys::window();
            let resize_cb = {
                let cutter = cutter.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    if let Some(c) = &*cutter.borrow() {
                        c.resize();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(win) = &window {
                let _ = win
                    .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
                if let Some(mut c) = cutter.borrow_mut().take() {
                    c.destroy();
                }
                let _keep_alive = &resize_cb;
            }
        });
    }

    {
        let cutter = cutter.clone();
        let loaded = loaded.clone();
        use_effect_with((props.source.clone(), props.load_seq), move |(source, _)| {
            if let (Some(c), Some(src)) = (&*cutter.borrow(), source) {
                loaded.set(false);
                c.set_image_data(src);
            }
            || ()
        });
    }

    {
        let cutter = cutter.clone();
        use_effect_with(props.export_type.clone(), move |mime| {
            if let Some(c) = &*cutter.borrow() {
                c.set_export_type(mime.to_string());
            }
            || ()
        });
    }

    let on_reset = {
        let cutter = cutter.clone();
        Callback::from(move |()| {
            if let Some(c) = &*cutter.borrow() {
                c.reset();
            }
        })
    };
    let on_clear = {
        let cutter = cutter.clone();
        let loaded = loaded.clone();
        let exported = exported.clone();
        Callback::from(move |()| {
            if let Some(c) = &*cutter.borrow() {
                c.clear();
            }
            loaded.set(false);
            exported.set(None);
        })
    };
    let on_export = {
        let cutter = cutter.clone();
        let exported = exported.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |()| {
            let data = cutter.borrow().as_ref().and_then(PictureCutter::get_image_data);
            match data {
                Some(d) => exported.set(Some(d.into())),
                None => on_error.emit("nothing to export yet".to_string()),
            }
        })
    };
    let on_close_preview = {
        let exported = exported.clone();
        Callback::from(move |()| exported.set(None))
    };

    html! {
        <div style="position:relative; width:100%; height:100%;">
            <div ref={container_ref} style="width:100%; height:100%; overflow:hidden; touch-action:none; background:#0e1116;"></div>
            <CutterControls ready={*loaded} {on_reset} {on_clear} {on_export} />
            <PreviewPanel data={(*exported).clone()} on_close={on_close_preview} />
        </div>
    }
}
