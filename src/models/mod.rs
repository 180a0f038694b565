pub mod session;
pub mod profile;
pub mod notice;

pub use session::{Session, SessionUser};
pub use profile::{ProfileField, ProfileForm, ProfileRow, ProfileUpdate};
pub use notice::Notice;
