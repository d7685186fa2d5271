use crate::{CallerId, ProfileAttributes, ProfileId};

use serde::{Deserialize, Serialize};

/// Row inserted into `profiles` right after a successful sign-up.
///
/// `created_at` and `last_sign` are filled in by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub id: ProfileId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_blocked: bool,
}

impl NewProfile {
    pub fn new(caller: CallerId, email: &str, attributes: &ProfileAttributes) -> Self {
        Self {
            id: caller.profile_id(),
            email: email.to_string(),
            first_name: attributes.first_name.clone(),
            last_name: attributes.last_name.clone(),
            is_blocked: false,
        }
    }
}
