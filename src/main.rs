//! GlucoVision Dashboard
//!
//! Browser entry point. Build with `trunk serve` (or `trunk build --release`)
//! from the repository root; `index.html` pulls in Chart.js and the styles.

use leptos::*;

use glucovision_ui::app::App;
use glucovision_ui::config::UiConfig;
use glucovision_ui::logging;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = UiConfig::load();
    logging::init(&config.log_filter);

    tracing::info!("GlucoVision v{}", env!("CARGO_PKG_VERSION"));

    mount_to_body(move || view! { <App config=config.clone() /> });
}
