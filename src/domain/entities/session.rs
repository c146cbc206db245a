use serde::{Deserialize, Serialize};

/// Authenticated browser state carried in the signed session cookie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    /// Display name.
    pub user: String,
    pub email: String,
}
