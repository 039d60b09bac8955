mod app;
pub mod utils;

fn main() {
    console_error_panic_hook::set_once();
    app::start();
}
