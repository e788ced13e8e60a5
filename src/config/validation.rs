use super::models::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("read_timeout_secs must be positive")]
    InvalidReadTimeout,

    #[error("max_payload_bytes must be positive")]
    InvalidMaxPayload,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    if config.server.read_timeout_secs == 0 {
        return Err(ValidationError::InvalidReadTimeout);
    }

    if config.api.max_payload_bytes == 0 {
        return Err(ValidationError::InvalidMaxPayload);
    }

    Ok(())
}
