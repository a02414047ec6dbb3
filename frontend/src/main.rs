use vpn_frontend::config;
use vpn_frontend::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
