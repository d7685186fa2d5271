//! Identifiers issued by the identity service.
//!
//! A profile row is keyed by the id of the identity it describes, so the two
//! newtypes convert into each other freely. They stay distinct so a function
//! signature says whether it wants "whoever is signed in" or "a row in the
//! roster".

use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity currently authenticated with the identity service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(pub Uuid);

/// Primary key of a row in the `profiles` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub Uuid);

impl CallerId {
    pub fn profile_id(&self) -> ProfileId {
        ProfileId(self.0)
    }
}

impl From<CallerId> for ProfileId {
    fn from(caller: CallerId) -> Self {
        ProfileId(caller.0)
    }
}

impl From<Uuid> for ProfileId {
    fn from(id: Uuid) -> Self {
        ProfileId(id)
    }
}

impl From<Uuid> for CallerId {
    fn from(id: Uuid) -> Self {
        CallerId(id)
    }
}

impl FromStr for ProfileId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Ok(ProfileId(Uuid::parse_str(s.trim())?))
    }
}

impl FromStr for CallerId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Ok(CallerId(Uuid::parse_str(s.trim())?))
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
