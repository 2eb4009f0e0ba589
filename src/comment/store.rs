use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};

use crate::comment::model::Comment;
use crate::utils::error::CustomError;

/// Persistence for comment records. Each call is a single-document round trip.
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn insert(&self, comment: &Comment) -> Result<(), CustomError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Comment>, CustomError>;

    /// Newest first.
    async fn find_all(&self) -> Result<Vec<Comment>, CustomError>;

    /// Returns the document after the update, or `None` if it no longer exists.
    async fn update_text(&self, id: &ObjectId, text: &str)
    -> Result<Option<Comment>, CustomError>;

    /// Returns whether a document was removed.
    async fn delete(&self, id: &ObjectId) -> Result<bool, CustomError>;
}

pub struct MongoCommentStore {
    collection: Collection<Comment>,
}

impl MongoCommentStore {
    pub fn new(client: &Client, database_name: &str) -> Self {
        let collection = client
            .database(database_name)
            .collection::<Comment>("comments");
        MongoCommentStore { collection }
    }
}

#[async_trait]
impl CommentStore for MongoCommentStore {
    async fn insert(&self, comment: &Comment) -> Result<(), CustomError> {
        self.collection.insert_one(comment).await.map_err(|e| {
            CustomError::InternalServerError(format!("Failed to add comment: {}", e))
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Comment>, CustomError> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| {
                CustomError::InternalServerError(format!("Failed to fetch comment: {}", e))
            })
    }

    async fn find_all(&self) -> Result<Vec<Comment>, CustomError> {
        // ObjectIds lead with their creation second, then a process counter
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": -1 })
            .await
            .map_err(|e| {
                CustomError::InternalServerError(format!("Failed to fetch comments: {}", e))
            })?;

        let comments: Vec<Comment> = cursor.try_collect().await.map_err(|e| {
            CustomError::InternalServerError(format!("Failed to collect comments: {}", e))
        })?;

        Ok(comments)
    }

    async fn update_text(
        &self,
        id: &ObjectId,
        text: &str,
    ) -> Result<Option<Comment>, CustomError> {
        self.collection
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": { "text": text } })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                CustomError::InternalServerError(format!("Failed to update comment: {}", e))
            })
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, CustomError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| {
                CustomError::InternalServerError(format!("Failed to delete comment: {}", e))
            })?;

        Ok(result.deleted_count > 0)
    }
}
