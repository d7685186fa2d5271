use serde::{Deserialize, Serialize};

/// User metadata attached to an identity at sign-up
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileAttributes {
    pub first_name: String,
    pub last_name: String,
}
