use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::user::model::UserProfileView;
use crate::utils::error::CustomError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub post_id: ObjectId,
    pub text: String,
    pub author_id: ObjectId,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(alias = "post_id")]
    #[validate(
        required(message = "postId is required"),
        length(min = 1, message = "postId is not allowed to be empty")
    )]
    pub post_id: Option<String>,

    #[validate(
        required(message = "text is required"),
        length(
            min = 1,
            max = 1000,
            message = "text must be between 1 and 1000 characters"
        )
    )]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(
        required(message = "text is required"),
        length(
            min = 1,
            max = 1000,
            message = "text must be between 1 and 1000 characters"
        )
    )]
    pub text: Option<String>,
}

/// A create payload that passed the schema, with the post reference resolved.
#[derive(Debug, Clone)]
pub struct ValidCreateComment {
    pub post_id: ObjectId,
    pub text: String,
}

impl TryFrom<CreateCommentRequest> for ValidCreateComment {
    type Error = CustomError;

    fn try_from(value: CreateCommentRequest) -> Result<Self, Self::Error> {
        // Bounds apply to the trimmed text; the comment keeps what the user sent
        let request = CreateCommentRequest {
            post_id: value.post_id.map(|id| id.trim().to_string()),
            text: value.text.as_deref().map(|text| text.trim().to_string()),
        };
        request.validate()?;

        let (Some(post_id), Some(text)) = (request.post_id, value.text) else {
            return Err(CustomError::ValidationError(
                "postId and text are required".to_string(),
            ));
        };

        let post_id = ObjectId::parse_str(&post_id)
            .map_err(|_| CustomError::ValidationError("postId must be a valid id".to_string()))?;

        Ok(ValidCreateComment { post_id, text })
    }
}

#[derive(Debug, Clone)]
pub struct ValidUpdateComment {
    pub text: String,
}

impl TryFrom<UpdateCommentRequest> for ValidUpdateComment {
    type Error = CustomError;

    fn try_from(value: UpdateCommentRequest) -> Result<Self, Self::Error> {
        let request = UpdateCommentRequest {
            text: value.text.as_deref().map(|text| text.trim().to_string()),
        };
        request.validate()?;

        let text = value
            .text
            .ok_or_else(|| CustomError::ValidationError("text is required".to_string()))?;

        Ok(ValidUpdateComment { text })
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: String,
    pub post_id: String,
    pub text: String,
    pub author_user_id: String,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        CommentView {
            id: comment.id.to_hex(),
            post_id: comment.post_id.to_hex(),
            text: comment.text,
            author_user_id: comment.author_id.to_hex(),
            author_username: comment.author_username,
            created_at: comment.created_at,
        }
    }
}

/// List entry: the record plus its author's current profile (null once the user is gone).
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: CommentView,
    pub author: Option<UserProfileView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(post_id: Option<&str>, text: Option<&str>) -> CreateCommentRequest {
        CreateCommentRequest {
            post_id: post_id.map(str::to_string),
            text: text.map(str::to_string),
        }
    }

    #[test]
    fn create_requires_post_id_and_text() {
        let post = ObjectId::new().to_hex();

        let err = ValidCreateComment::try_from(create(None, Some("hi"))).unwrap_err();
        assert!(matches!(err, CustomError::ValidationError(ref m) if m == "postId is required"));

        let err = ValidCreateComment::try_from(create(Some(&post), None)).unwrap_err();
        assert!(matches!(err, CustomError::ValidationError(ref m) if m == "text is required"));

        let err = ValidCreateComment::try_from(create(Some(&post), Some("   "))).unwrap_err();
        assert!(matches!(err, CustomError::ValidationError(_)));
    }

    #[test]
    fn create_rejects_malformed_post_id() {
        let err = ValidCreateComment::try_from(create(Some("p1"), Some("hi"))).unwrap_err();
        assert!(matches!(err, CustomError::ValidationError(ref m) if m == "postId must be a valid id"));
    }

    #[test]
    fn text_is_bounded_after_trimming_but_kept_as_sent() {
        let post = ObjectId::new();
        let valid =
            ValidCreateComment::try_from(create(Some(&post.to_hex()), Some("  hi\n"))).unwrap();
        assert_eq!(valid.post_id, post);
        assert_eq!(valid.text, "  hi\n");

        let edit = ValidUpdateComment::try_from(UpdateCommentRequest {
            text: Some(" edited ".to_string()),
        })
        .unwrap();
        assert_eq!(edit.text, " edited ");

        let padded = format!("  {}  ", "a".repeat(1000));
        assert!(ValidUpdateComment::try_from(UpdateCommentRequest { text: Some(padded) }).is_ok());

        let at_limit = "a".repeat(1000);
        assert!(ValidUpdateComment::try_from(UpdateCommentRequest { text: Some(at_limit) }).is_ok());

        let too_long = "a".repeat(1001);
        assert!(
            ValidUpdateComment::try_from(UpdateCommentRequest { text: Some(too_long) }).is_err()
        );
    }

    #[test]
    fn accepts_camel_and_snake_case_post_id() {
        let camel: CreateCommentRequest =
            serde_json::from_str(r#"{"postId":"x","text":"t"}"#).unwrap();
        let snake: CreateCommentRequest =
            serde_json::from_str(r#"{"post_id":"x","text":"t"}"#).unwrap();
        assert_eq!(camel.post_id.as_deref(), Some("x"));
        assert_eq!(snake.post_id.as_deref(), Some("x"));
    }

    #[test]
    fn view_uses_hex_ids_and_camel_case() {
        let comment = Comment {
            id: ObjectId::new(),
            post_id: ObjectId::new(),
            text: "hi".to_string(),
            author_id: ObjectId::new(),
            author_username: "alice".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(CommentView::from(comment.clone())).unwrap();

        assert_eq!(json["id"], comment.id.to_hex());
        assert_eq!(json["postId"], comment.post_id.to_hex());
        assert_eq!(json["authorUserId"], comment.author_id.to_hex());
        assert_eq!(json["authorUsername"], "alice");
    }
}
