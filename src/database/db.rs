use log::{error, info};
use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};
use std::error::Error;

use crate::config::AppConfig;

/// Build a client for the configured cluster and fail fast if it does not answer a ping.
pub async fn connect_to_mongo(config: &AppConfig) -> Result<Client, Box<dyn Error>> {
    let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;
    client_options.app_name = Some(config.app_name.clone());

    let client = Client::with_options(client_options)?;

    if let Err(e) = client.database("admin").run_command(doc! { "ping": 1 }).await {
        error!("MongoDB at {} did not answer ping: {}", config.mongodb_uri, e);
        return Err(e.into());
    }

    info!("Connected to MongoDB database {}", config.database_name);

    Ok(client)
}
