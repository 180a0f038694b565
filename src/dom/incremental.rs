// ============================================================================
// INCREMENTAL DOM UPDATES - Patch the mounted profile screen in place
// ============================================================================
// A full re-render would drop focus from the input being typed in, so form
// and loading changes only touch the affected elements.
// ============================================================================

use crate::dom::{button_by_id, input_by_id, sync_input_value};
use crate::models::ProfileField;
use crate::state::ProfileState;

pub const SUBMIT_BUTTON_ID: &str = "profile-submit";
pub const SIGN_OUT_BUTTON_ID: &str = "profile-sign-out";

pub const EDITABLE_FIELDS: [ProfileField; 3] = [
    ProfileField::Username,
    ProfileField::Name,
    ProfileField::LastName,
];

/// Copies form values into the inputs that differ
pub fn update_profile_inputs(state: &ProfileState) {
    let form = state.form();
    for field in EDITABLE_FIELDS {
        match input_by_id(field.input_id()) {
            Some(input) => sync_input_value(&input, form.get(field)),
            None => log::debug!("⚠️ [DOM] #{} not mounted", field.input_id()),
        }
    }
}

/// Submit label and disabled state of both buttons
pub fn update_profile_buttons(state: &ProfileState) {
    let loading = state.is_loading();

    if let Some(submit) = button_by_id(SUBMIT_BUTTON_ID) {
        submit.set_disabled(loading);
        submit.set_text_content(Some(state.submit_label()));
    }
    if let Some(sign_out) = button_by_id(SIGN_OUT_BUTTON_ID) {
        sign_out.set_disabled(loading);
    }
}

pub fn update_profile_screen(state: &ProfileState) {
    update_profile_inputs(state);
    update_profile_buttons(state);
}
