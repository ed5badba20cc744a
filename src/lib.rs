// ============================================================================
// FITCARE - FRONTEND PWA (RUST + YEW)
// ============================================================================
// - Models: Estructuras compartidas con el backend
// - State: SessionStore (persona + plan) con Rc<RefCell> + subscribers
// - Services: Comunicación API + flujos que actualizan la sesión
// - Hooks/Components: Vistas Yew que leen el SessionStore por contexto
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use wasm_bindgen::prelude::*;

use crate::components::App;
use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 FitCare - Rust + Yew (entorno: {}, backend: {})",
        CONFIG.environment,
        CONFIG.backend_url()
    );

    yew::Renderer::<App>::new().render();
    Ok(())
}
