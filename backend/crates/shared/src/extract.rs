//! Request extractors
//!
//! JSON ボディの取り出しに失敗した場合も、他の入力検証エラーと同じ
//! 400 Problem Details で返すための抽出器です。

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;
use crate::error::field::FieldError;

/// Field name used when the failure cannot be pinned to one field
const BODY_FIELD: &str = "body";

/// `axum::Json` のラッパー
///
/// 拒否理由（Content-Type 不足、構文エラー、型の不一致）はすべて
/// `VALIDATION_FAILED` の [`AppError`] になります。
///
/// ## Examples
/// ```rust,ignore
/// async fn create(JsonBody(req): JsonBody<CreateRequest>) -> impl IntoResponse { .. }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let error = match &rejection {
            JsonRejection::JsonDataError(e) => data_error(&e.body_text()),
            JsonRejection::JsonSyntaxError(_) => {
                FieldError::new(BODY_FIELD, "Request body is not valid JSON")
            }
            JsonRejection::MissingJsonContentType(_) => FieldError::new(
                BODY_FIELD,
                "Expected request with Content-Type: application/json",
            ),
            other => FieldError::new(BODY_FIELD, other.body_text()),
        };
        AppError::validation(vec![error])
    }
}

/// Split `"<prefix>: <path>: <reason>"` into a field error on `<path>`
fn data_error(text: &str) -> FieldError {
    let detail = text
        .split_once(": ")
        .map(|(_, rest)| rest)
        .unwrap_or(text);

    match detail.split_once(": ") {
        Some((path, reason)) if is_field_path(path) => {
            FieldError::new(path.to_string(), reason.to_string())
        }
        _ => FieldError::new(BODY_FIELD, detail.to_string()),
    }
}

fn is_field_path(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'))
}
