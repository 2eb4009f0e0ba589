//! In-memory stand-ins for MongoDB and a token signer for HTTP tests.

use async_trait::async_trait;
use jsonwebtoken::{EncodingKey, Header, encode};
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::comment::model::Comment;
use crate::comment::store::CommentStore;
use crate::middleware::auth::{Claims, jwt_secret};
use crate::user::model::UserProfile;
use crate::user::store::ProfileStore;
use crate::utils::error::CustomError;

#[derive(Default)]
pub struct InMemoryCommentStore {
    comments: RwLock<Vec<Comment>>,
}

impl InMemoryCommentStore {
    pub async fn len(&self) -> usize {
        self.comments.read().await.len()
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn insert(&self, comment: &Comment) -> Result<(), CustomError> {
        self.comments.write().await.push(comment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Comment>, CustomError> {
        let comments = self.comments.read().await;
        Ok(comments.iter().find(|c| c.id == *id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Comment>, CustomError> {
        let mut comments = self.comments.read().await.clone();
        comments.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(comments)
    }

    async fn update_text(
        &self,
        id: &ObjectId,
        text: &str,
    ) -> Result<Option<Comment>, CustomError> {
        let mut comments = self.comments.write().await;
        Ok(comments.iter_mut().find(|c| c.id == *id).map(|c| {
            c.text = text.to_string();
            c.clone()
        }))
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, CustomError> {
        let mut comments = self.comments.write().await;
        let before = comments.len();
        comments.retain(|c| c.id != *id);
        Ok(comments.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: Vec<UserProfile>,
}

impl InMemoryProfileStore {
    pub fn with(profiles: Vec<UserProfile>) -> Self {
        InMemoryProfileStore { profiles }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<UserProfile>, CustomError> {
        Ok(self.profiles.iter().find(|p| p.id == *id).cloned())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<UserProfile>, CustomError> {
        Ok(self
            .profiles
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }
}

pub fn profile(username: &str, is_admin: bool) -> UserProfile {
    UserProfile {
        id: ObjectId::new(),
        username: username.to_string(),
        email: Some(format!("{}@example.com", username)),
        is_admin,
    }
}

pub fn bearer_token(user: &UserProfile) -> String {
    let claims = Claims {
        id: user.id.to_hex(),
        is_admin: user.is_admin,
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
    .unwrap()
}
