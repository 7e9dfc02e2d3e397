use launchlink::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("LaunchLink frontend starting");
    yew::Renderer::<App>::new().render();
}
