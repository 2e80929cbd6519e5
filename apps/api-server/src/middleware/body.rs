//! Post body extractor.

use std::future::Future;
use std::pin::Pin;

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web::Bytes};
use serde_json::{Map, Value};

use postboard_core::domain::PostFields;
use postboard_shared::ErrorResponse;
use postboard_shared::dto::PostPayload;

use super::error::{AppError, AppResult};

/// Request body of a create or update, parsed but not yet interpreted.
///
/// A request without a JSON content type, or with an empty body, reads as
/// `{}`. Only JSON that fails to parse is an error, and it surfaces from
/// [`PostBody::into_fields`] so handlers decide when to look at the body.
#[derive(Debug)]
pub struct PostBody(Result<Value, String>);

impl PostBody {
    pub fn parse(is_json: bool, bytes: &[u8]) -> Self {
        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Self(Ok(Value::Object(Map::new())));
        }
        Self(serde_json::from_slice(bytes).map_err(|e| e.to_string()))
    }

    pub fn into_fields(self) -> AppResult<PostFields> {
        let body = self.0.map_err(|reason| {
            tracing::warn!(%reason, "Rejected request body");
            AppError::BadRequest(ErrorResponse::invalid_body().error)
        })?;

        let payload = PostPayload::from_json(&body);
        Ok(PostFields {
            author: payload.author,
            age: payload.age,
            content: payload.content,
            picture: payload.picture,
        })
    }
}

impl FromRequest for PostBody {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let is_json = req.content_type().eq_ignore_ascii_case("application/json");
        let bytes = Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = bytes.await?;
            Ok(PostBody::parse(is_json, &bytes))
        })
    }
}
