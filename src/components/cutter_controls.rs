use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CutterControlsProps {
    pub ready: bool,
    pub on_reset: Callback<()>,
    pub on_clear: Callback<()>,
    pub on_export: Callback<()>,
}

#[function_component(CutterControls)]
pub fn cutter_controls(props: &CutterControlsProps) -> Html {
    let reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let clear = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let export = {
        let cb = props.on_export.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button onclick={reset} disabled={!props.ready}> {"Reset"} </button>
        <button onclick={clear} disabled={!props.ready}> {"Clear"} </button>
        <span style="width:8px;"></span>
        <button onclick={export} disabled={!props.ready}> {"Export"} </button>
    </div>}
}
