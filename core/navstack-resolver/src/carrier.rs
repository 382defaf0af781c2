//! The flag-carrier channel.
//!
//! Hosts whose navigate call only accepts `(name, params)` smuggle a
//! [`NavFlag`] inside params under a reserved key. The resolver reads the
//! key, then strips it so it never reaches a stored entry.
//!
//! The carried value may be the JSON form (`{"type": "CLEAR_TOP",
//! "activity": "B"}`) or the compact string form (`"CLEAR_TOP:B"`).

use navstack_types::{NavFlag, Params};
use serde_json::Value;

/// Params key used when no other key is configured.
pub const DEFAULT_CARRIER_KEY: &str = "__navFlag";

/// What a params payload carried under the reserved key.
#[derive(Debug, Clone, PartialEq)]
pub enum Carried {
    /// The key was not present.
    Absent,
    /// The key was present with `null`.
    Empty,
    /// The key held a recognized flag.
    Flag(NavFlag),
    /// The key held something that is not a known flag.
    Unrecognized(Value),
}

impl Carried {
    /// True when the reserved key was present, whatever it held.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// The carried flag. Unrecognized values count as no flag.
    #[must_use]
    pub fn into_flag(self) -> Option<NavFlag> {
        match self {
            Self::Flag(flag) => Some(flag),
            Self::Absent | Self::Empty | Self::Unrecognized(_) => None,
        }
    }

    /// Decodes a raw carried value.
    #[must_use]
    pub fn decode(value: Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::String(s) => match s.parse::<NavFlag>() {
                Ok(flag) => Self::Flag(flag),
                Err(_) => Self::Unrecognized(Value::String(s)),
            },
            Value::Object(_) => match NavFlag::from_json(&value) {
                Ok(flag) => Self::Flag(flag),
                Err(_) => Self::Unrecognized(value),
            },
            other => Self::Unrecognized(other),
        }
    }
}

/// Reads, strips and embeds flags under a reserved params key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagCarrier {
    key: String,
}

impl FlagCarrier {
    /// Creates a carrier for the given params key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The reserved params key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// True when `params` contains the reserved key.
    #[must_use]
    pub fn is_present(&self, params: &Params) -> bool {
        params.contains_key(&self.key)
    }

    /// Removes the reserved key from `params` and decodes what it held.
    pub fn take(&self, params: &mut Params) -> Carried {
        match params.remove(&self.key) {
            Some(value) => Carried::decode(value),
            None => Carried::Absent,
        }
    }

    /// Stores `flag` under the reserved key, in its JSON form.
    pub fn embed(&self, params: &mut Params, flag: &NavFlag) -> navstack_types::Result<()> {
        params.insert(self.key.clone(), flag.to_json()?);
        Ok(())
    }
}

impl Default for FlagCarrier {
    fn default() -> Self {
        Self::new(DEFAULT_CARRIER_KEY)
    }
}
