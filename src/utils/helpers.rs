use mongodb::bson::oid::ObjectId;

/// Name echoed back in every response envelope.
pub fn service_name() -> String {
    std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string())
}

/// Parse a path id, treating anything that is not an ObjectId as absent.
pub fn parse_object_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw.trim()).ok()
}
