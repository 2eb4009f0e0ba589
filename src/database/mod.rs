pub mod db;
pub mod redis;

pub use self::db::connect_to_mongo;
pub use self::redis::{RedisClient, RedisService};
