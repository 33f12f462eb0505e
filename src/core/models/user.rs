use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Contact handle shown on the profile.
    pub email: String,
    /// Single glyph used as the user's picture.
    pub avatar: String,
}

impl User {
    pub fn new(id: &str, name: &str, email: &str, avatar: &str) -> Self {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: avatar.to_string(),
        }
    }
}
