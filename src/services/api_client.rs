// ============================================================================
// API CLIENT - HTTP only (Supabase PostgREST + GoTrue)
// ============================================================================
// No screen logic here: requests, status mapping and error descriptions.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;

use crate::config::{AppConfig, CONFIG};
use crate::errors::ProfileError;
use crate::models::{ProfileRow, ProfileUpdate};
use crate::services::backend::ProfileBackend;
use crate::utils::constants::{PGRST_NO_ROWS_STATUS, PGRST_OBJECT_MEDIA_TYPE};

/// Error body shapes returned by PostgREST (`message`) and GoTrue (`msg`,
/// `error_description`).
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Supabase client - stateless apart from the current access token
#[derive(Clone)]
pub struct ApiClient {
    rest_url: String,
    auth_url: String,
    table: String,
    anon_key: String,
    access_token: Rc<RefCell<Option<String>>>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::from_config(&CONFIG)
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            rest_url: config.rest_url(),
            auth_url: config.auth_url(),
            table: config.profiles_table.clone(),
            anon_key: config.supabase_anon_key.clone(),
            access_token: Rc::new(RefCell::new(None)),
        }
    }

    /// Token sent as `Authorization: Bearer`; `None` falls back to the anon key
    pub fn set_access_token(&self, token: Option<String>) {
        *self.access_token.borrow_mut() = token;
    }

    pub fn access_token(&self) -> Option<String> {
        self.access_token.borrow().clone()
    }

    fn bearer(&self) -> String {
        let token = self.access_token.borrow();
        format!("Bearer {}", token.as_deref().unwrap_or(&self.anon_key))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .header("Authorization", &self.bearer())
    }

    fn profile_select_url(&self, user_id: &str) -> String {
        format!(
            "{}/{}?select={}&id=eq.{}",
            self.rest_url,
            self.table,
            ProfileRow::COLUMNS,
            urlencoding::encode(user_id)
        )
    }

    fn profile_upsert_url(&self) -> String {
        format!("{}/{}", self.rest_url, self.table)
    }

    fn logout_url(&self) -> String {
        format!("{}/logout", self.auth_url)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Description shown to the user for a failed response
fn error_description(status: u16, status_text: &str, body: &str) -> String {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .message
        .or(parsed.msg)
        .or(parsed.error_description)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            if status_text.is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, status_text)
            }
        })
}

async fn api_error(response: Response) -> ProfileError {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    ProfileError::Api {
        status,
        message: error_description(status, &status_text, &body),
    }
}

#[async_trait(?Send)]
impl ProfileBackend for ApiClient {
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<ProfileRow>, ProfileError> {
        let url = self.profile_select_url(user_id);
        log::debug!("📋 [SUPABASE] GET {}", url);

        let response = self
            .authorized(Request::get(&url))
            .header("Accept", PGRST_OBJECT_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| ProfileError::Network(e.to_string()))?;

        if response.status() == PGRST_NO_ROWS_STATUS {
            log::info!("⚠️ [SUPABASE] No profile row for user {}", user_id);
            return Ok(None);
        }

        if !response.ok() {
            return Err(api_error(response).await);
        }

        let row = response
            .json::<ProfileRow>()
            .await
            .map_err(|e| ProfileError::Parse(e.to_string()))?;

        log::info!("✅ [SUPABASE] Profile row loaded for user {}", user_id);
        Ok(Some(row))
    }

    async fn upsert_profile(&self, update: &ProfileUpdate) -> Result<(), ProfileError> {
        let url = self.profile_upsert_url();
        log::debug!("💾 [SUPABASE] POST {} (upsert id={})", url, update.id);

        let response = self
            .authorized(Request::post(&url))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(update)
            .map_err(|e| ProfileError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ProfileError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(api_error(response).await);
        }

        log::info!("✅ [SUPABASE] Profile {} upserted", update.id);
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), ProfileError> {
        let response = self
            .authorized(Request::post(&self.logout_url()))
            .send()
            .await
            .map_err(|e| ProfileError::Network(e.to_string()))?;

        // The server-side session may already be gone
        if !response.ok() && response.status() != 401 && response.status() != 404 {
            return Err(api_error(response).await);
        }

        self.set_access_token(None);
        log::info!("👋 [SUPABASE] Signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::from_config(&AppConfig {
            supabase_url: "https://abcd.supabase.co".to_string(),
            supabase_anon_key: "anon".to_string(),
            ..AppConfig::default()
        })
    }

    #[test]
    fn builds_single_row_select_url() {
        assert_eq!(
            client().profile_select_url("u1"),
            "https://abcd.supabase.co/rest/v1/profiles?select=username,name,last_name,avatar_url&id=eq.u1"
        );
    }

    #[test]
    fn select_url_encodes_user_id() {
        assert_eq!(
            client().profile_select_url("u1&id=neq.x,y"),
            "https://abcd.supabase.co/rest/v1/profiles?select=username,name,last_name,avatar_url&id=eq.u1%26id%3Dneq.x%2Cy"
        );
    }

    #[test]
    fn builds_upsert_and_logout_urls() {
        let client = client();
        assert_eq!(client.profile_upsert_url(), "https://abcd.supabase.co/rest/v1/profiles");
        assert_eq!(client.logout_url(), "https://abcd.supabase.co/auth/v1/logout");
    }

    #[test]
    fn bearer_prefers_access_token_over_anon_key() {
        let client = client();
        assert_eq!(client.bearer(), "Bearer anon");

        client.set_access_token(Some("jwt".to_string()));
        assert_eq!(client.bearer(), "Bearer jwt");

        // Clones share the token
        let clone = client.clone();
        clone.set_access_token(None);
        assert_eq!(client.bearer(), "Bearer anon");
    }

    #[test]
    fn error_description_prefers_backend_message() {
        let postgrest = r#"{"code":"42501","details":null,"hint":null,"message":"permission denied for table profiles"}"#;
        assert_eq!(
            error_description(403, "Forbidden", postgrest),
            "permission denied for table profiles"
        );

        let gotrue = r#"{"code":403,"msg":"invalid JWT"}"#;
        assert_eq!(error_description(403, "Forbidden", gotrue), "invalid JWT");
    }

    #[test]
    fn error_description_falls_back_to_status() {
        assert_eq!(error_description(502, "Bad Gateway", "<html>"), "HTTP 502: Bad Gateway");
        assert_eq!(error_description(500, "", r#"{"message":"  "}"#), "HTTP 500");
    }
}
