//! Profile row - one managed user as stored in the `profiles` table.

use crate::{ProfileId, ProfilePatch, ProfileStatus};

use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A persisted record describing one managed user.
///
/// Field names follow the remote table columns, hence `last_sign` on the wire.
/// Null text and flag columns decode to their defaults; timestamps without an
/// offset (`timestamp` rather than `timestamptz`) are read as UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: ProfileId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "last_sign", default, deserialize_with = "optional_timestamp")]
    pub last_sign_in: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_blocked: bool,
}

impl ProfileRow {
    /// First and last name joined by a space; missing parts render empty
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    pub fn status(&self) -> ProfileStatus {
        ProfileStatus::from(self.is_blocked)
    }

    /// Apply a partial update in place, mirroring what the store did remotely
    pub fn apply(&mut self, patch: &ProfilePatch) {
        if let Some(is_blocked) = patch.is_blocked {
            self.is_blocked = is_blocked;
        }
    }
}

/// RFC 3339, or a bare `YYYY-MM-DD[T ]HH:MM:SS[.frac]` taken as UTC
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ParseError> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(|e| D::Error::custom(format!("invalid timestamp '{raw}': {e}")))
}

fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_timestamp(&raw)
                .map_err(|e| D::Error::custom(format!("invalid timestamp '{raw}': {e}")))
        })
        .transpose()
}
