// ============================================================================
// APP VIEW - Picks the screen for the current session
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::app_state::AppState;
use crate::viewmodels::ProfileViewModel;
use crate::views::alert_dialog::DomNotifier;
use crate::views::profile_screen::{render_profile_screen, ProfileScreenViewModel};

/// Rendered root plus the mounted profile screen, if any
pub struct RenderedApp {
    pub root: Element,
    pub screen: Option<ProfileScreenViewModel>,
}

pub fn render_app(state: &AppState) -> Result<RenderedApp, JsValue> {
    let Some(session) = state.session.get_session() else {
        log::info!("🔓 [APP] No session, rendering signed-out view");
        return Ok(RenderedApp {
            root: render_signed_out()?,
            screen: None,
        });
    };

    let vm = ProfileViewModel::new(state.api.clone(), DomNotifier::new());

    let on_signed_out: Rc<dyn Fn()> = {
        let state = state.clone();
        Rc::new(move || state.end_session())
    };
    let root = render_profile_screen(&vm, on_signed_out)?;

    // Session injection triggers the initial load
    {
        let vm = vm.clone();
        spawn_local(async move {
            vm.set_session(Some(session)).await;
        });
    }

    Ok(RenderedApp {
        root,
        screen: Some(vm),
    })
}

pub fn render_signed_out() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("signed-out")
        .child(ElementBuilder::new("h1")?.class("title").text("Signed out").build())?
        .child(
            ElementBuilder::new("p")?
                .class("subtitle")
                .text("Sign in again to edit your profile.")
                .build(),
        )?
        .build())
}
