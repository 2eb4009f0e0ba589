use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};
use mongodb::Client;
use mongodb::bson::oid::ObjectId;

use crate::comment::model::{
    Comment, CommentView, CommentWithAuthor, CreateCommentRequest, UpdateCommentRequest,
    ValidCreateComment, ValidUpdateComment,
};
use crate::comment::store::{CommentStore, MongoCommentStore};
use crate::middleware::auth::AuthUser;
use crate::user::model::UserProfile;
use crate::user::store::{MongoProfileStore, ProfileStore};
use crate::utils::error::CustomError;
use crate::utils::helpers::parse_object_id;

/// Admins may remove anyone's comment.
pub fn can_delete(caller: &AuthUser, comment: &Comment) -> bool {
    caller.is_admin || caller.id == comment.author_id
}

/// Only the author may edit, admin or not.
pub fn can_edit(caller: &AuthUser, comment: &Comment) -> bool {
    caller.id == comment.author_id
}

pub struct CommentService {
    comments: Arc<dyn CommentStore>,
    profiles: Arc<dyn ProfileStore>,
}

impl CommentService {
    pub fn new(client: &Client, database_name: &str) -> Self {
        CommentService::with_stores(
            Arc::new(MongoCommentStore::new(client, database_name)),
            Arc::new(MongoProfileStore::new(client, database_name)),
        )
    }

    pub fn with_stores(comments: Arc<dyn CommentStore>, profiles: Arc<dyn ProfileStore>) -> Self {
        CommentService { comments, profiles }
    }

    /// Create a comment authored by the caller
    pub async fn create_comment(
        &self,
        caller: &AuthUser,
        request: CreateCommentRequest,
    ) -> Result<Comment, CustomError> {
        let input = ValidCreateComment::try_from(request)?;

        let profile = self
            .profiles
            .find_by_id(&caller.id)
            .await?
            .ok_or_else(|| CustomError::NotFoundError("user profile not found".to_string()))?;

        let comment = Comment {
            id: ObjectId::new(),
            post_id: input.post_id,
            text: input.text,
            author_id: caller.id,
            author_username: profile.username,
            created_at: Utc::now(),
        };

        self.comments.insert(&comment).await?;
        info!("comment {} created on post {}", comment.id, comment.post_id);

        Ok(comment)
    }

    /// Every comment, newest first, with the author's profile attached
    pub async fn list_comments(&self) -> Result<Vec<CommentWithAuthor>, CustomError> {
        let comments = self.comments.find_all().await?;

        let mut author_ids: Vec<ObjectId> = comments.iter().map(|c| c.author_id).collect();
        author_ids.sort();
        author_ids.dedup();

        let authors: HashMap<ObjectId, UserProfile> = self
            .profiles
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|profile| (profile.id, profile))
            .collect();

        Ok(comments
            .into_iter()
            .map(|comment| {
                let author = authors.get(&comment.author_id).cloned().map(Into::into);
                CommentWithAuthor {
                    comment: CommentView::from(comment),
                    author,
                }
            })
            .collect())
    }

    /// Delete a comment (author or admin)
    pub async fn delete_comment(
        &self,
        caller: &AuthUser,
        comment_id: &str,
    ) -> Result<(), CustomError> {
        let comment = self.find_existing(comment_id).await?;
        let comment_id = &comment.id;

        if !can_delete(caller, &comment) {
            warn!("user {} denied deleting comment {}", caller.id, comment_id);
            return Err(CustomError::ForbiddenError(
                "access denied, not allowed".to_string(),
            ));
        }

        if !self.comments.delete(comment_id).await? {
            return Err(comment_not_found());
        }

        if caller.id != comment.author_id {
            info!("admin {} deleted comment {}", caller.id, comment_id);
        } else {
            info!("comment {} deleted by its author", comment_id);
        }

        Ok(())
    }

    /// Replace the text of a comment (author only)
    pub async fn update_comment(
        &self,
        caller: &AuthUser,
        comment_id: &str,
        request: UpdateCommentRequest,
    ) -> Result<Comment, CustomError> {
        let input = ValidUpdateComment::try_from(request)?;
        let comment = self.find_existing(comment_id).await?;
        let comment_id = &comment.id;

        if !can_edit(caller, &comment) {
            warn!("user {} denied editing comment {}", caller.id, comment_id);
            return Err(CustomError::ForbiddenError(
                "access denied, only user himself can edit his comment".to_string(),
            ));
        }

        self.comments
            .update_text(comment_id, &input.text)
            .await?
            .ok_or_else(comment_not_found)
    }

    /// Ids that do not parse cannot name a stored comment.
    async fn find_existing(&self, comment_id: &str) -> Result<Comment, CustomError> {
        let comment_id = parse_object_id(comment_id).ok_or_else(comment_not_found)?;

        self.comments
            .find_by_id(&comment_id)
            .await?
            .ok_or_else(comment_not_found)
    }
}

fn comment_not_found() -> CustomError {
    CustomError::NotFoundError("comment not found".to_string())
}
