// ============================================================================
// APP - Shell that owns the session and mounts the profile screen
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::app_state::AppState;
use crate::utils::constants::APP_ROOT_ID;
use crate::views::{render_app, ProfileScreenViewModel};

pub struct App {
    state: AppState,
    root: Element,
    screen: Option<ProfileScreenViewModel>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        state.restore_session();

        // Session changes (sign out) re-render the whole app
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self {
            state,
            root,
            screen: None,
        })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        // The old screen may still have requests in flight
        if let Some(previous) = self.screen.take() {
            previous.unmount();
        }

        set_inner_html(&self.root, "");

        let rendered = render_app(&self.state)?;
        append_child(&self.root, &rendered.root)?;
        self.screen = rendered.screen;

        log::info!("✅ [APP] Rendered ({})", if self.screen.is_some() { "profile" } else { "signed out" });
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
