use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Public part of a user document; the password hash is projected out on read.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Profile as embedded in comment responses.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileView {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub is_admin: bool,
}

impl From<UserProfile> for UserProfileView {
    fn from(profile: UserProfile) -> Self {
        UserProfileView {
            id: profile.id.to_hex(),
            username: profile.username,
            email: profile.email,
            is_admin: profile.is_admin,
        }
    }
}
