/// Shown when load or save runs without an authenticated user
pub const NO_USER_MESSAGE: &str = "No user on the session!";

pub const SAVE_CONFIRMATION_TITLE: &str = "Success";
pub const SAVE_CONFIRMATION_MESSAGE: &str = "Profile updated!";

pub const UPDATE_BUTTON_LABEL: &str = "Update";
pub const LOADING_BUTTON_LABEL: &str = "Loading ...";
pub const SIGN_OUT_BUTTON_LABEL: &str = "Sign Out";

/// PostgREST media type for single-object responses (406 when no row matches)
pub const PGRST_OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";
pub const PGRST_NO_ROWS_STATUS: u16 = 406;

/// Root element the app mounts into
pub const APP_ROOT_ID: &str = "app";
