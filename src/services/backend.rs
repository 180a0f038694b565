// ============================================================================
// PROFILE BACKEND - Data-access seam used by the profile viewmodel
// ============================================================================

use async_trait::async_trait;

use crate::errors::ProfileError;
use crate::models::{ProfileRow, ProfileUpdate};

/// Remote store for profile rows plus the auth provider's sign-out.
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait ProfileBackend {
    /// `Ok(None)` when no row matches `user_id`
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<ProfileRow>, ProfileError>;

    /// Inserts the row or updates the one with the same `id`
    async fn upsert_profile(&self, update: &ProfileUpdate) -> Result<(), ProfileError>;

    async fn sign_out(&self) -> Result<(), ProfileError>;
}
