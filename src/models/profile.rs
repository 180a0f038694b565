use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Editable profile fields held by the screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub username: String,
    pub name: String,
    pub last_name: String,
    pub avatar_url: String,
}

/// Selects one field of [`ProfileForm`] for input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Username,
    Name,
    LastName,
    AvatarUrl,
}

impl ProfileField {
    /// DOM id of the matching input
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Username => "profile-username",
            Self::Name => "profile-name",
            Self::LastName => "profile-last-name",
            Self::AvatarUrl => "profile-avatar-url",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Name => "Name",
            Self::LastName => "Lastname",
            Self::AvatarUrl => "Avatar URL",
        }
    }
}

impl ProfileForm {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Username => &self.username,
            ProfileField::Name => &self.name,
            ProfileField::LastName => &self.last_name,
            ProfileField::AvatarUrl => &self.avatar_url,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Username => self.username = value,
            ProfileField::Name => self.name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::AvatarUrl => self.avatar_url = value,
        }
    }

    /// Overwrites every field from a fetched row; `null` columns become `""`.
    pub fn hydrate(&mut self, row: ProfileRow) {
        self.username = row.username.unwrap_or_default();
        self.name = row.name.unwrap_or_default();
        self.last_name = row.last_name.unwrap_or_default();
        self.avatar_url = row.avatar_url.unwrap_or_default();
    }
}

/// Columns selected from the `profiles` table. Every column is nullable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl ProfileRow {
    pub const COLUMNS: &'static str = "username,name,last_name,avatar_url";
}

/// Upsert payload; `id` is the primary key shared with the auth user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub id: String,
    pub username: String,
    pub name: String,
    pub last_name: String,
    pub avatar_url: String,
    pub updated_at: DateTime<Utc>,
}

impl ProfileUpdate {
    pub fn from_form(user_id: &str, form: &ProfileForm, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: user_id.to_string(),
            username: form.username.clone(),
            name: form.name.clone(),
            last_name: form.last_name.clone(),
            avatar_url: form.avatar_url.clone(),
            updated_at,
        }
    }
}
