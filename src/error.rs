use derive_more::Display;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Display)]
pub struct UnknownError(BoxedError);

impl std::error::Error for UnknownError {}

impl UnknownError {
    pub fn new(err: BoxedError) -> Self {
        Self(err)
    }

    pub fn inner(self) -> BoxedError {
        self.0
    }
}

impl From<BoxedError> for UnknownError {
    fn from(err: BoxedError) -> Self {
        Self::new(err)
    }
}

#[derive(Debug, Display)]
struct StrError(pub Box<str>);

impl std::error::Error for StrError {}

impl<'a> From<&'a str> for UnknownError {
    fn from(err: &'a str) -> Self {
        UnknownError(Box::new(StrError(Box::from(err))))
    }
}

impl From<sqlx::error::Error> for UnknownError {
    fn from(err: sqlx::error::Error) -> Self {
        Self::new(err.into())
    }
}

pub mod config {
    use derive_more::Display;

    #[derive(Debug, Display)]
    pub enum ConfigError {
        /// Mandatory environment variables not set, reported together.
        #[display(fmt = "mandatory configs missing from environment: {_0:?}")]
        MissingVars(Vec<&'static str>),
        #[display(fmt = "invalid port: {_0}")]
        InvalidPort(std::num::ParseIntError),
        #[display(fmt = "invalid log level: {_0:?}")]
        InvalidLogLevel(String),
        #[display(fmt = "invalid database url: {_0}")]
        InvalidDatabaseUrl(url::ParseError),
    }

    impl std::error::Error for ConfigError {}

    impl From<url::ParseError> for ConfigError {
        fn from(err: url::ParseError) -> Self {
            Self::InvalidDatabaseUrl(err)
        }
    }
}

pub mod persistence {
    use std::io;

    use derive_more::Display;

    use super::UnknownError;

    pub type SqlState = String;

    #[derive(Debug, Display)]
    pub enum PersistenceError {
        #[display(fmt = "database persistence error: SQLSTATE {_0:?}")]
        Database(Option<SqlState>),
        #[display(fmt = "persistence layer connection error: {_0}")]
        Connection(io::Error),
        #[display(fmt = "PersistenceError data not found")]
        NotFound,
        #[display(fmt = "PersistenceError decoding data")]
        DecodeData,
        #[display(fmt = "unknown persistence error: {_0}")]
        Unknown(UnknownError),
    }

    impl std::error::Error for PersistenceError {}

    type SqlxError = sqlx::error::Error;

    impl From<SqlxError> for PersistenceError {
        fn from(err: SqlxError) -> Self {
            match err {
                SqlxError::Configuration(_) => {
                    Self::Connection(io::ErrorKind::InvalidInput.into())
                }
                SqlxError::Database(db) => Self::Database(db.code().map(|code| code.into())),
                SqlxError::Io(io) => Self::Connection(io),
                SqlxError::Tls(_) => Self::Connection(io::ErrorKind::ConnectionRefused.into()),
                SqlxError::Protocol(msg) => {
                    Self::Connection(io::Error::new(io::ErrorKind::InvalidData, msg))
                }
                SqlxError::RowNotFound | SqlxError::ColumnNotFound(_) => Self::NotFound,
                SqlxError::TypeNotFound { .. }
                | SqlxError::ColumnIndexOutOfBounds { .. }
                | SqlxError::ColumnDecode { .. }
                | SqlxError::Decode(_) => Self::DecodeData,
                SqlxError::PoolTimedOut => Self::Connection(io::ErrorKind::TimedOut.into()),
                SqlxError::PoolClosed => Self::Connection(io::ErrorKind::NotConnected.into()),
                _ => Self::Unknown(err.into()),
            }
        }
    }
}

pub mod resource {
    use derive_more::Display;
    use serde::{Deserialize, Serialize};

    /// Prefix addressing resource fields in client-facing validation errors.
    pub const JSON_FIELD_PREFIX: &str = "$.";

    #[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ValidationErrorKind {
        /// A mandatory field was left empty.
        MandatoryElementMissing,
        /// Field length outside its allowed bounds.
        InvalidLength,
        /// Field contains characters the name pattern rejects.
        InvalidCharacters,
        /// Field does not match the expected format.
        InvalidFormat,
        /// Field is not a two-letter uppercase country code.
        InvalidCountryCode,
    }

    impl std::error::Error for ValidationErrorKind {}

    /// Violated bounds reported alongside `InvalidLength`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct LengthParams {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub min_chars: Option<u32>,
        pub max_chars: u32,
    }

    impl LengthParams {
        pub fn range(min_chars: u32, max_chars: u32) -> Self {
            Self {
                min_chars: Some(min_chars),
                max_chars,
            }
        }

        pub fn max(max_chars: u32) -> Self {
            Self {
                min_chars: None,
                max_chars,
            }
        }
    }

    #[derive(Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[display(fmt = "{field}: {error}")]
    pub struct ValidationError {
        /// Resource field path with the invalid value, e.g. `$.first_name`.
        pub field: String,
        /// Kind of validation error.
        pub error: ValidationErrorKind,
        /// Violated bounds, present only for length errors.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub params: Option<LengthParams>,
    }

    impl ValidationError {
        pub fn new(field: impl Into<String>, error: ValidationErrorKind) -> Self {
            Self {
                field: field.into(),
                error,
                params: None,
            }
        }

        pub fn with_params(
            field: impl Into<String>,
            error: ValidationErrorKind,
            params: LengthParams,
        ) -> Self {
            Self {
                field: field.into(),
                error,
                params: Some(params),
            }
        }
    }

    impl std::error::Error for ValidationError {}
}

pub mod service {
    use derive_more::Display;

    use super::persistence::PersistenceError;
    use super::UnknownError;

    /// Failure producing a new globally-unique identifier.
    #[derive(Debug, Display)]
    #[display(fmt = "identifier generation error: {_0}")]
    pub struct IdentifierError(pub UnknownError);

    impl std::error::Error for IdentifierError {}

    /// Backend failure surfaced by a service operation.
    ///
    /// Opaque to clients; the boundary layer logs the detail.
    #[derive(Debug, Display)]
    pub enum ServiceError {
        #[display(fmt = "persistence failure: {_0}")]
        Persistence(PersistenceError),
        #[display(fmt = "identifier generation failure: {_0}")]
        IdentifierGeneration(IdentifierError),
    }

    impl std::error::Error for ServiceError {}

    impl From<PersistenceError> for ServiceError {
        fn from(err: PersistenceError) -> Self {
            Self::Persistence(err)
        }
    }

    impl From<IdentifierError> for ServiceError {
        fn from(err: IdentifierError) -> Self {
            Self::IdentifierGeneration(err)
        }
    }
}

pub mod http {
    use derive_more::{Display, Error};
    use salvo::{http::ParseError, prelude::StatusError, writer::Json, Piece, Response};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Display, Clone, Error, Serialize, Deserialize)]
    pub enum BadRequest {
        InvalidContent,
    }

    #[derive(Debug, Display, Clone, Error, Serialize, Deserialize)]
    #[display(fmt = "Response error: {title}, {message}")]
    pub struct ErrorResponse<T> {
        pub title: String,
        pub message: String,
        pub error: T,
    }

    impl<T> ErrorResponse<T> {
        pub fn from_status_error(status: &StatusError, err: T) -> Self {
            Self {
                title: status.name.clone(),
                message: status
                    .summary
                    .clone()
                    .unwrap_or_else(|| status.name.clone()),
                error: err,
            }
        }
    }

    impl From<ParseError> for BadRequest {
        fn from(_: ParseError) -> Self {
            BadRequest::InvalidContent
        }
    }

    impl Piece for BadRequest {
        fn render(self, res: &mut Response) {
            let status = StatusError::bad_request();
            res.render(Json(ErrorResponse::from_status_error(&status, self)));
            res.set_status_error(status);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::resource::{LengthParams, ValidationError, ValidationErrorKind};

    #[test]
    fn validation_error_wire_format() {
        let error = ValidationError::with_params(
            "$.first_name",
            ValidationErrorKind::InvalidLength,
            LengthParams::range(2, 30),
        );

        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "$.first_name",
                "error": "invalid_length",
                "params": { "min_chars": 2, "max_chars": 30 },
            })
        );
    }

    #[test]
    fn validation_error_omits_absent_params() {
        let error = ValidationError::new("$.country", ValidationErrorKind::InvalidCountryCode);

        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "$.country",
                "error": "invalid_country_code",
            })
        );
    }

    #[test]
    fn length_params_omit_absent_minimum() {
        let json = serde_json::to_value(LengthParams::max(120)).unwrap();
        assert_eq!(json, serde_json::json!({ "max_chars": 120 }));
    }
}
