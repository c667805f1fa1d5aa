//! Weather-specific error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

impl WeatherError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Unable to connect. Check your internet connection.".to_string(),
            Self::Timeout => "The request timed out. Please try again.".to_string(),
            Self::Upstream { status, .. } if *status >= 500 => {
                "The weather service is experiencing issues. Please try again later.".to_string()
            }
            Self::Upstream { message, .. } => format!("Weather service error: {}", message),
            Self::MalformedPayload(_) => {
                "Received an unexpected response from the weather service.".to_string()
            }
            Self::InsufficientData(_) => "Not enough forecast data available.".to_string(),
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            WeatherError::Timeout
        } else if e.is_decode() {
            WeatherError::MalformedPayload(e.to_string())
        } else {
            WeatherError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_get_a_generic_message() {
        let err = WeatherError::Upstream {
            status: 503,
            message: "internal".into(),
        };
        assert!(err.user_message().contains("experiencing issues"));
    }

    #[test]
    fn client_errors_carry_the_provider_message() {
        let err = WeatherError::Upstream {
            status: 404,
            message: "city not found".into(),
        };
        assert!(err.user_message().contains("city not found"));
    }

    #[test]
    fn all_user_messages_are_non_empty() {
        let errors = [
            WeatherError::Network("reset".into()),
            WeatherError::Timeout,
            WeatherError::MalformedPayload("missing field".into()),
            WeatherError::InsufficientData("empty base".into()),
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
