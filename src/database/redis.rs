use log::info;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};

/// Redis connection wrapper
pub struct RedisClient {
    connection: MultiplexedConnection,
}

impl RedisClient {
    pub async fn init(redis_url: &str) -> Result<Self, String> {
        let client =
            Client::open(redis_url).map_err(|e| format!("Failed to create Redis client: {}", e))?;

        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| format!("Failed to connect to Redis: {}", e))?;

        info!("Connected successfully to Redis");

        Ok(Self { connection })
    }

    pub fn get_connection(&self) -> MultiplexedConnection {
        self.connection.clone()
    }
}

/// Session lookups against the token store written by the auth service.
#[derive(Clone)]
pub struct RedisService {
    connection: MultiplexedConnection,
}

impl RedisService {
    pub fn new(client: &RedisClient) -> Self {
        Self {
            connection: client.get_connection(),
        }
    }

    /// Returns the user id the token was issued to, if the session is still live.
    pub async fn validate_session(&self, token: &str) -> Result<Option<String>, String> {
        let mut conn = self.connection.clone();
        let token_key = format!("token:{}", token);

        let user_id: Option<String> = conn
            .get(&token_key)
            .await
            .map_err(|e| format!("Failed to validate session: {}", e))?;

        Ok(user_id)
    }
}
