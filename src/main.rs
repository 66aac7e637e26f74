//! Pizza List Frontend Entry Point

mod app;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        dump_recent_log();
    }));
    if let Err(e) = ring_logger::init_logger("PizzaList", ring_logger::LoggerConfig::default()) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}

/// Print the buffered log lines together with the panic report
fn dump_recent_log() {
    let lines = ring_logger::recent_lines();
    if lines.is_empty() {
        return;
    }
    let text = lines.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n");
    web_sys::console::error_1(&format!("[APP] Last {} log lines before panic:\n{}", lines.len(), text).into());
}
