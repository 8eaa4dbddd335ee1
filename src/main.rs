use picture_cutter::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
