pub mod profile_viewmodel;

pub use profile_viewmodel::{Operation, ProfileViewModel, SaveOutcome};
