use thiserror::Error;

/// Failure of a single provider lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The provider answered with an `error` object.
    #[error("City not found")]
    CityNotFound,

    /// The request did not complete, or the body was not the expected JSON.
    #[error("Failed to fetch")]
    TransportFailure,
}

/// Message shown on the screen after a failed submit.
///
/// The `Display` text of each variant is exactly what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScreenError {
    #[error("Enter a city")]
    EmptyInput,

    #[error("City not found")]
    CityNotFound,

    #[error("Failed to fetch")]
    TransportFailure,
}

impl From<FetchError> for ScreenError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::CityNotFound => ScreenError::CityNotFound,
            FetchError::TransportFailure => ScreenError::TransportFailure,
        }
    }
}
