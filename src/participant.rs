use std::{borrow::Cow, fmt};

use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identifier of a split test participant, stable per end user.
///
/// Participants are either strings or integers. Both are keyed, hashed and sent to the server in
/// their string form, so `42` and `"42"` are the same participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, From)]
#[serde(untagged)]
pub enum ParticipantId {
    /// String identifier. Must not be empty.
    String(String),
    /// Integer identifier.
    Integer(i64),
}

impl ParticipantId {
    /// String form used for hashing, caching and URLs.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            ParticipantId::String(s) => Cow::Borrowed(s),
            ParticipantId::Integer(i) => Cow::Owned(i.to_string()),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            ParticipantId::String(s) if s.is_empty() => Err(Error::InvalidParticipant),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantId::String(s) => f.write_str(s),
            ParticipantId::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<&String> for ParticipantId {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<i32> for ParticipantId {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for ParticipantId {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}
