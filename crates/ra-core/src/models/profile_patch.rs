use serde::{Deserialize, Serialize};

/// Partial update body for `profiles`. Unset fields are left untouched remotely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,
}

impl ProfilePatch {
    pub fn blocked(is_blocked: bool) -> Self {
        Self {
            is_blocked: Some(is_blocked),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_blocked.is_none()
    }
}
