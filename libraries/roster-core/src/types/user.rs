//! User domain type

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open set of profile attributes carried alongside the fixed user fields
pub type Profile = Map<String, Value>;

/// Keys owned by [`User`] itself; a profile may not shadow them.
const RESERVED_KEYS: [&str; 2] = ["id", "name"];

/// User account
///
/// Serializes as a flat JSON object: `id`, `name`, then every profile attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Additional attributes defined by whoever owns the store
    #[serde(flatten)]
    pub profile: Profile,
}

impl User {
    /// Create a user with an empty profile
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            profile: Profile::new(),
        }
    }

    /// Create a user with profile attributes
    ///
    /// Profile entries named `id` or `name` are discarded so the serialized
    /// object never carries duplicate keys.
    pub fn with_profile(id: i64, name: impl Into<String>, mut profile: Profile) -> Self {
        for key in RESERVED_KEYS {
            profile.remove(key);
        }

        Self {
            id,
            name: name.into(),
            profile,
        }
    }
}
