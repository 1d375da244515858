use serde::{Deserialize, Serialize};

/// Contact form body. `name`, `email` and `message` are required; the
/// presence check happens in the service so a missing field yields the
/// validation response instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}
