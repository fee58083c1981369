//! Field Error - 入力検証エラーの詳細
//!
//! 400 レスポンスの `errors` 配列に載る `{field, message}` を定義します。

use std::borrow::Cow;

use serde::Serialize;

use super::app_error::AppResult;

/// 単一フィールドの検証エラー
///
/// ## Examples
/// ```rust
/// use kernel::error::field::FieldError;
///
/// let err = FieldError::new("email", "Please include a valid email");
/// assert_eq!(err.field(), "email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    field: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl FieldError {
    pub fn new(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 検証エラーを集めるためのコレクタ
///
/// 最初のエラーで止めず、すべてのフィールドを検査してからまとめて返します。
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) {
        self.0.push(FieldError::new(field, message));
    }

    /// `AppResult` のエラーメッセージを記録し、成功値だけを返す
    pub fn check<T>(&mut self, field: &'static str, result: AppResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.push(field, e.message().to_string());
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}
