pub mod app;
pub mod alert_dialog;
pub mod profile_screen;

pub use app::{render_app, render_signed_out, RenderedApp};
pub use alert_dialog::{render_alert_dialog, DomNotifier};
pub use profile_screen::{render_profile_screen, ProfileScreenViewModel};
