//! Navigation flags.
//!
//! A flag tells the resolver how a navigation request should reshape the
//! activity stack. The set of flags is closed: every policy lives in a
//! `match` over [`NavFlag`], so adding a variant is a compile error until
//! the resolver handles it.
//!
//! Flags have two textual forms:
//! - JSON, used when a flag rides inside a params payload:
//!   `{"type": "CLEAR_TOP", "activity": "B"}`
//! - A compact string, used by scenario files and the CLI: `CLEAR_TOP:B`

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A navigation flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavFlag {
    /// Re-enter the top entry in place when it already shows the target.
    SingleTop,
    /// Rewind to the first entry named `activity` and refresh it.
    ClearTop { activity: String },
    /// Push `activity`, ignoring the request's own target.
    JumpTo { activity: String },
    /// Drop everything, then push the target.
    ClearStack,
    /// `ClearTop`, falling back to `SingleTop` on the request target.
    ClearTopSingleTop { activity: String },
    /// `ClearTop`, falling back to pushing `activity`.
    JumpToClearTop { activity: String },
}

impl NavFlag {
    /// Shorthand for [`NavFlag::ClearTop`].
    pub fn clear_top(activity: impl Into<String>) -> Self {
        Self::ClearTop {
            activity: activity.into(),
        }
    }

    /// Shorthand for [`NavFlag::JumpTo`].
    pub fn jump_to(activity: impl Into<String>) -> Self {
        Self::JumpTo {
            activity: activity.into(),
        }
    }

    /// Shorthand for [`NavFlag::ClearTopSingleTop`].
    pub fn clear_top_single_top(activity: impl Into<String>) -> Self {
        Self::ClearTopSingleTop {
            activity: activity.into(),
        }
    }

    /// Shorthand for [`NavFlag::JumpToClearTop`].
    pub fn jump_to_clear_top(activity: impl Into<String>) -> Self {
        Self::JumpToClearTop {
            activity: activity.into(),
        }
    }

    /// Encodes the flag in its JSON form.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decodes a flag from its JSON form.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }

    /// Returns the payload-free kind of this flag.
    #[must_use]
    pub fn kind(&self) -> FlagKind {
        match self {
            Self::SingleTop => FlagKind::SingleTop,
            Self::ClearTop { .. } => FlagKind::ClearTop,
            Self::JumpTo { .. } => FlagKind::JumpTo,
            Self::ClearStack => FlagKind::ClearStack,
            Self::ClearTopSingleTop { .. } => FlagKind::ClearTopSingleTop,
            Self::JumpToClearTop { .. } => FlagKind::JumpToClearTop,
        }
    }

    /// Returns the activity name embedded in the flag, if the variant has one.
    #[must_use]
    pub fn activity(&self) -> Option<&str> {
        match self {
            Self::SingleTop | Self::ClearStack => None,
            Self::ClearTop { activity }
            | Self::JumpTo { activity }
            | Self::ClearTopSingleTop { activity }
            | Self::JumpToClearTop { activity } => Some(activity.as_str()),
        }
    }
}

impl fmt::Display for NavFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.activity() {
            Some(activity) => write!(f, "{}:{}", self.kind(), activity),
            None => write!(f, "{}", self.kind()),
        }
    }
}

impl FromStr for NavFlag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (tag, activity) = match s.trim().split_once(':') {
            Some((tag, activity)) => (tag.trim(), Some(activity.trim())),
            None => (s.trim(), None),
        };
        let kind: FlagKind = tag.parse()?;

        match (kind, activity) {
            (FlagKind::SingleTop, None) => Ok(Self::SingleTop),
            (FlagKind::ClearStack, None) => Ok(Self::ClearStack),
            (FlagKind::SingleTop | FlagKind::ClearStack, Some(_)) => Err(Error::InvalidFlag(
                format!("{kind} does not take an activity: {s}"),
            )),
            (_, None) | (_, Some("")) => Err(Error::InvalidFlag(format!(
                "{kind} requires an activity: {s}"
            ))),
            (FlagKind::ClearTop, Some(a)) => Ok(Self::clear_top(a)),
            (FlagKind::JumpTo, Some(a)) => Ok(Self::jump_to(a)),
            (FlagKind::ClearTopSingleTop, Some(a)) => Ok(Self::clear_top_single_top(a)),
            (FlagKind::JumpToClearTop, Some(a)) => Ok(Self::jump_to_clear_top(a)),
        }
    }
}

/// The tag of a [`NavFlag`] without its activity payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagKind {
    SingleTop,
    ClearTop,
    JumpTo,
    ClearStack,
    ClearTopSingleTop,
    JumpToClearTop,
}

impl FlagKind {
    /// The wire name of this kind (e.g. `CLEAR_TOP`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SingleTop => "SINGLE_TOP",
            Self::ClearTop => "CLEAR_TOP",
            Self::JumpTo => "JUMP_TO",
            Self::ClearStack => "CLEAR_STACK",
            Self::ClearTopSingleTop => "CLEAR_TOP_SINGLE_TOP",
            Self::JumpToClearTop => "JUMP_TO_CLEAR_TOP",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlagKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SINGLE_TOP" => Ok(Self::SingleTop),
            "CLEAR_TOP" => Ok(Self::ClearTop),
            "JUMP_TO" => Ok(Self::JumpTo),
            "CLEAR_STACK" => Ok(Self::ClearStack),
            "CLEAR_TOP_SINGLE_TOP" => Ok(Self::ClearTopSingleTop),
            "JUMP_TO_CLEAR_TOP" => Ok(Self::JumpToClearTop),
            other => Err(Error::InvalidFlag(format!("unknown flag: {other}"))),
        }
    }
}
