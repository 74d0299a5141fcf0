//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default lastname applied when registration omits the field
pub const DEFAULT_LASTNAME: &str = "lastname";
/// Default location applied when registration omits the field
pub const DEFAULT_LOCATION: &str = "my city";

/// Role of a user account
///
/// Demo accounts may browse but are blocked from every mutating operation.
/// The role travels inside the token claims so the authentication gate can
/// resolve it without a store lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Standard,
    Demo,
}

impl UserRole {
    /// Check whether this role may mutate shared data
    pub fn can_mutate(&self) -> bool {
        matches!(self, Self::Standard)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Demo => "demo",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "demo" => Ok(Self::Demo),
            _ => Ok(Self::Standard),
        }
    }
}

/// User entity: identity plus credential
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique identifier
    id: Uuid,
    /// Display name
    name: String,
    /// Login email, unique across users
    email: String,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Optional profile field
    lastname: String,
    /// Optional profile field
    location: String,
    /// Account role
    role: UserRole,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new standard user with defaulted profile fields
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        lastname: Option<String>,
        location: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            lastname: lastname.unwrap_or_else(|| DEFAULT_LASTNAME.to_string()),
            location: location.unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            role: UserRole::Standard,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstruct a user from stored columns
    #[allow(clippy::too_many_arguments, reason = "storage row has this many columns")]
    pub fn from_storage(
        id: Uuid,
        name: String,
        email: String,
        password_hash: String,
        lastname: String,
        location: String,
        role: UserRole,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            lastname,
            location,
            role,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Apply a profile update (registration-time validation already done)
    pub fn update_profile(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        lastname: impl Into<String>,
        location: impl Into<String>,
    ) {
        self.name = name.into();
        self.email = email.into();
        self.lastname = lastname.into();
        self.location = location.into();
        self.touch();
    }

    /// Replace the stored password hash
    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
        self.touch();
    }

    /// Change the account role
    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
