use serde::{Deserialize, Serialize};

/// What the profile screen shows after a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SaveConfirmation {
    /// "Profile updated!" after every completed attempt, failed ones included
    #[default]
    Always,
    /// "Profile updated!" only when the upsert succeeded
    OnSuccess,
}

impl SaveConfirmation {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "on_success" | "on-success" | "success" => Self::OnSuccess,
            _ => Self::Always,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub environment: String,
    pub enable_logging: bool,
    pub profiles_table: String,
    /// localStorage key where the auth provider persists its session.
    /// Empty means "derive from the project ref" (`sb-<ref>-auth-token`).
    pub auth_storage_key: String,
    pub save_confirmation: SaveConfirmation,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
            profiles_table: "profiles".to_string(),
            auth_storage_key: String::new(),
            save_confirmation: SaveConfirmation::Always,
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            supabase_url: option_env!("SUPABASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.supabase_url),
            supabase_anon_key: option_env!("SUPABASE_ANON_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.supabase_anon_key),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            profiles_table: option_env!("PROFILES_TABLE")
                .unwrap_or("profiles").to_string(),
            auth_storage_key: option_env!("AUTH_STORAGE_KEY")
                .unwrap_or("").to_string(),
            save_confirmation: option_env!("SAVE_CONFIRMATION")
                .map(SaveConfirmation::parse)
                .unwrap_or_default(),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// PostgREST base, e.g. `https://abc.supabase.co/rest/v1`
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.supabase_url)
    }

    /// GoTrue base, e.g. `https://abc.supabase.co/auth/v1`
    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.supabase_url)
    }

    /// First host label of the project URL (`abc` for `https://abc.supabase.co`).
    pub fn project_ref(&self) -> &str {
        let without_scheme = self
            .supabase_url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.supabase_url);
        without_scheme
            .split(['.', ':', '/'])
            .next()
            .unwrap_or_default()
    }

    pub fn session_storage_key(&self) -> String {
        if self.auth_storage_key.is_empty() {
            format!("sb-{}-auth-token", self.project_ref())
        } else {
            self.auth_storage_key.clone()
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
