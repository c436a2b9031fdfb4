//! Conversions from external infrastructure errors into domain errors.

use clientdesk_domain::ClientDeskError;
use reqwest::{Error as HttpError, StatusCode};

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ClientDeskError);

impl From<InfraError> for ClientDeskError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ClientDeskError> for InfraError {
    fn from(value: ClientDeskError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDomainError {
    fn into_domain(self) -> ClientDeskError;
}

/// Map a non-success HTTP status onto the domain taxonomy.
pub fn status_error(status: StatusCode) -> ClientDeskError {
    let code = status.as_u16();
    let message = format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

    match code {
        401 | 403 => ClientDeskError::Auth(message),
        404 => ClientDeskError::NotFound(message),
        429 => ClientDeskError::Network(message),
        400..=499 => ClientDeskError::InvalidInput(message),
        _ => ClientDeskError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ClientDeskError */
/* -------------------------------------------------------------------------- */

impl IntoDomainError for HttpError {
    fn into_domain(self) -> ClientDeskError {
        if self.is_timeout() {
            return ClientDeskError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return ClientDeskError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return ClientDeskError::Serialization(format!("invalid response body: {self}"));
        }

        if let Some(status) = self.status() {
            return status_error(status);
        }

        ClientDeskError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_domain())
    }
}

/* -------------------------------------------------------------------------- */
/* config file errors → ClientDeskError */
/* -------------------------------------------------------------------------- */

impl IntoDomainError for toml::de::Error {
    fn into_domain(self) -> ClientDeskError {
        ClientDeskError::Config(format!("invalid TOML config: {}", self.message()))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(value.into_domain())
    }
}

impl IntoDomainError for std::io::Error {
    fn into_domain(self) -> ClientDeskError {
        ClientDeskError::Config(format!("failed to read config file: {self}"))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_domain())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
