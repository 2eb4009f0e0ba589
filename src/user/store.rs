use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::{Client, Collection};

use crate::user::model::UserProfile;
use crate::utils::error::CustomError;

/// Resolves caller ids to display profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<UserProfile>, CustomError>;

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<UserProfile>, CustomError>;
}

pub struct MongoProfileStore {
    collection: Collection<UserProfile>,
}

impl MongoProfileStore {
    pub fn new(client: &Client, database_name: &str) -> Self {
        let collection = client
            .database(database_name)
            .collection::<UserProfile>("users");
        MongoProfileStore { collection }
    }

    fn projection() -> Document {
        doc! { "_id": 1, "username": 1, "email": 1, "is_admin": 1 }
    }
}

#[async_trait]
impl ProfileStore for MongoProfileStore {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<UserProfile>, CustomError> {
        let profile = self
            .collection
            .find_one(doc! { "_id": *id })
            .projection(Self::projection())
            .await?;

        Ok(profile)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<UserProfile>, CustomError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .projection(Self::projection())
            .await?;

        let profiles: Vec<UserProfile> = cursor.try_collect().await?;
        Ok(profiles)
    }
}
