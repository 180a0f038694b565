// ============================================================================
// PROFILE SCREEN VIEW - Account form (pure Rust DOM)
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::incremental::{update_profile_screen, EDITABLE_FIELDS, SIGN_OUT_BUTTON_ID, SUBMIT_BUTTON_ID};
use crate::dom::{append_child, create_element, on_click, on_input_value, set_attribute, ElementBuilder};
use crate::models::ProfileField;
use crate::services::ApiClient;
use crate::utils::constants::SIGN_OUT_BUTTON_LABEL;
use crate::viewmodels::ProfileViewModel;
use crate::views::alert_dialog::DomNotifier;

pub type ProfileScreenViewModel = ProfileViewModel<ApiClient, DomNotifier>;

/// Renders the screen for `vm`. `on_signed_out` runs after the backend sign-out.
pub fn render_profile_screen(
    vm: &ProfileScreenViewModel,
    on_signed_out: Rc<dyn Fn()>,
) -> Result<Element, JsValue> {
    log::info!("🎬 [PROFILE] render_profile_screen()");

    let screen = ElementBuilder::new("div")?
        .class("profile-screen")
        .build();

    let title_container = ElementBuilder::new("div")?
        .class("title-container")
        .child(ElementBuilder::new("h1")?.class("title").text("Welcome to My App").build())?
        .child(ElementBuilder::new("p")?.class("subtitle").text("Update your profile info").build())?
        .build();

    let form_container = ElementBuilder::new("div")?
        .class("form-container")
        .build();

    append_child(&form_container, &create_email_group(&vm.email())?)?;
    for field in EDITABLE_FIELDS {
        append_child(&form_container, &create_field_group(vm, field)?)?;
    }

    let state = vm.state();

    let submit_btn = ElementBuilder::new("button")?
        .id(SUBMIT_BUTTON_ID)?
        .attr("type", "button")?
        .class("btn-update")
        .text(state.submit_label())
        .flag("disabled", state.is_loading())?
        .build();
    {
        let vm = vm.clone();
        on_click(&submit_btn, move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                let outcome = vm.save().await;
                log::debug!("💾 [PROFILE] Save finished: {:?}", outcome);
            });
        })?;
    }

    let sign_out_btn = ElementBuilder::new("button")?
        .id(SIGN_OUT_BUTTON_ID)?
        .attr("type", "button")?
        .class("btn-sign-out")
        .text(SIGN_OUT_BUTTON_LABEL)
        .flag("disabled", state.is_loading())?
        .build();
    {
        let vm = vm.clone();
        on_click(&sign_out_btn, move |_| {
            let vm = vm.clone();
            let on_signed_out = on_signed_out.clone();
            spawn_local(async move {
                vm.sign_out().await;
                on_signed_out();
            });
        })?;
    }

    let submit_row = ElementBuilder::new("div")?.class("button-row").child(submit_btn)?.build();
    let sign_out_row = ElementBuilder::new("div")?.class("button-row").child(sign_out_btn)?.build();

    append_child(&screen, &title_container)?;
    append_child(&screen, &form_container)?;
    append_child(&screen, &submit_row)?;
    append_child(&screen, &sign_out_row)?;

    // Patch inputs and buttons in place on every state change
    state.watch(update_profile_screen);

    Ok(screen)
}

fn create_input(id: &str, value: &str) -> Result<Element, JsValue> {
    let input = create_element("input")?;
    set_attribute(&input, "type", "text")?;
    set_attribute(&input, "id", id)?;
    set_attribute(&input, "name", id)?;
    input.set_class_name("form-input");
    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
        html_input.set_value(value);
    }
    Ok(input)
}

fn create_group(id: &str, label_text: &str, input: Element) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(label)?
        .child(input)?
        .build())
}

/// Read-only email from the session
fn create_email_group(email: &str) -> Result<Element, JsValue> {
    let input = create_input("profile-email", email)?;
    set_attribute(&input, "disabled", "")?;
    create_group("profile-email", "Email", input)
}

fn create_field_group(vm: &ProfileScreenViewModel, field: ProfileField) -> Result<Element, JsValue> {
    let input = create_input(field.input_id(), &vm.state().field(field))?;
    {
        let vm = vm.clone();
        on_input_value(&input, move |value| vm.update_field(field, value))?;
    }
    create_group(field.input_id(), field.label(), input)
}
