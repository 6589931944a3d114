use serde::{Deserialize, Serialize};

/// Wire representation of a user.
///
/// The identifier is empty until creation assigns one, or when the resource
/// was mapped from storage without an identifier-significant lookup; it is
/// omitted from the JSON output while empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
}
