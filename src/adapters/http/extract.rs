//! Request extractors that report failures in the API error format.

use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json, Request};

use crate::domain::foundation::DomainError;

use super::error::ApiError;

/// Drop-in replacement for `axum::Json` in handler arguments.
///
/// A missing content type, unparseable JSON or a body of the wrong shape is
/// answered with 400 and a `{code, message, details}` body instead of
/// axum's plain-text rejection.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(reject_body(rejection)),
        }
    }
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    let reason = rejection.body_text();
    let field = serde_field(&reason).unwrap_or("body");
    tracing::debug!(field, %reason, "rejected request body");
    ApiError::BadRequest(DomainError::validation(
        field,
        format!("Invalid request body: {}", reason),
    ))
}

/// Field named by serde's "missing field `x`" or "unknown field `x`".
fn serde_field(message: &str) -> Option<&str> {
    ["missing field `", "unknown field `"]
        .iter()
        .find_map(|marker| {
            let start = message.find(marker)? + marker.len();
            let rest = &message[start..];
            rest.find('`').map(|end| &rest[..end])
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn finds_missing_field_name() {
        let message = "Failed to deserialize the JSON body into the target type: \
                       missing field `question` at line 1 column 2";
        assert_eq!(serde_field(message), Some("question"));
    }

    #[test]
    fn finds_unknown_field_name() {
        assert_eq!(
            serde_field("unknown field `colour`, expected `kind`"),
            Some("colour")
        );
    }

    #[test]
    fn other_messages_have_no_field() {
        assert_eq!(serde_field("expected value at line 1 column 1"), None);
        assert_eq!(serde_field("missing field `unterminated"), None);
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request_with_code() {
        let request = axum::http::Request::builder()
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{\"question\":"))
            .unwrap();

        let Err(err) = ApiJson::<serde_json::Value>::from_request(request, &()).await else {
            panic!("expected rejection");
        };

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let ApiError::BadRequest(domain) = err else {
            panic!("expected bad request");
        };
        assert_eq!(domain.code.to_string(), "VALIDATION_FAILED");
        assert_eq!(domain.details["field"], "body");
    }
}
