use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PreviewPanelProps {
    /// Data URL of the last export.
    pub data: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn PreviewPanel(props: &PreviewPanelProps) -> Html {
    let Some(data) = props.data.clone() else {
        return html! {};
    };
    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px; max-width:40%; display:flex; flex-direction:column; gap:8px;">
            <div style="font-size:12px; opacity:0.7;">{ format!("Cropped image ({} KB)", data.len() / 1024) }</div>
            <img src={data.clone()} style="max-width:100%; border:1px solid #30363d;" />
            <div style="display:flex; gap:8px; justify-content:flex-end;">
                <a href={data} download="cropped.png">{"Download"}</a>
                <button onclick={close}>{"Close"}</button>
            </div>
        </div>
    }
}
