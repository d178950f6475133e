mod app;
mod body;
mod icon;
mod navbar;
mod route;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<app::App>::new().render();
}
