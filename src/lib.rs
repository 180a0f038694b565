// ============================================================================
// PROFILE PWA - Account screen over a Supabase project (pure Rust + MVVM)
// ============================================================================
// - Views: DOM rendering only
// - ViewModels: screen state + logic
// - Services: backend HTTP, session storage, alert seam
// - State: Rc<RefCell> with change subscribers
// - Models: wire and form types
// ============================================================================

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Profile PWA starting ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Full re-render of the mounted app
pub fn rerender_app() {
    APP.with(|app_cell| match app_cell.borrow_mut().as_mut() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App not initialized"),
    });
}

/// Callable from JavaScript, e.g. after the auth provider stored a new session
#[wasm_bindgen]
pub fn refresh_session() {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => app.state().restore_session(),
        None => log::warn!("⚠️ [SESSION] App not initialized"),
    });
}
