use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derive_more::Display;

use crate::model::field::EditableField;

/// Everything that can go wrong operating the register. None of these are
/// fatal: the in-memory register stays valid and fully recomputed whether
/// an operation succeeds or fails.
///
/// Two conditions are deliberately NOT here: malformed numeric input is
/// silently coerced to zero by the field parser, and "nothing to undo" is
/// an informational reply, not an error.
#[derive(Debug, Display)]
pub enum RegisterError {
    #[display(fmt = "record {} not found", _0)]
    NotFound(u64),

    #[display(fmt = "{} is write-once and cannot be changed", _0)]
    ImmutableField(EditableField),

    /// Batch persistence failure; the transaction was rolled back and no
    /// partial write is observable.
    #[display(fmt = "database error: {}", _0)]
    Persistence(sqlx::Error),

    #[display(fmt = "export failed: {}", _0)]
    Export(String),
}

impl From<sqlx::Error> for RegisterError {
    fn from(err: sqlx::Error) -> Self {
        RegisterError::Persistence(err)
    }
}

impl ResponseError for RegisterError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegisterError::NotFound(_) => StatusCode::NOT_FOUND,
            RegisterError::ImmutableField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegisterError::Persistence(_) => StatusCode::SERVICE_UNAVAILABLE,
            RegisterError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "message": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        assert_eq!(
            RegisterError::NotFound(42).to_string(),
            "record 42 not found"
        );
        assert_eq!(
            RegisterError::ImmutableField(EditableField::PaymentDate).to_string(),
            "payment_date is write-once and cannot be changed"
        );
    }

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            RegisterError::NotFound(1).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RegisterError::ImmutableField(EditableField::PaymentDate).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            RegisterError::Export("disk full".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
