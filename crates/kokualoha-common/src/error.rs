use thiserror::Error;

#[derive(Debug, Error)]
pub enum KokualohaError {
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, KokualohaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = KokualohaError::Config("missing key".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing key");
    }
}
