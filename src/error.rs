use thiserror::Error;

/// Everything that can go wrong between a user trigger and a rendered result.
///
/// The validation variants fire before any network call is made; the
/// transport variants abort the render and surface their message at the
/// boundary of the triggering action. Rendering itself never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("No text or URL provided.")]
    EmptyInput,

    #[error("Not a valid absolute URL.")]
    InvalidUrl,

    #[error("Text must be at least 100 characters to analyze.")]
    InputTooShort,

    #[error("No text selected. Please highlight some text.")]
    NoSelection,

    #[error("Failed to reach the analysis service. Try again.")]
    NetworkError,

    #[error("{0}")]
    ServerError(String),

    #[error("The analysis service returned an unreadable response.")]
    MalformedResponse,
}

impl AnalysisError {
    /// True for errors raised before any request is dispatched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AnalysisError::EmptyInput
                | AnalysisError::InvalidUrl
                | AnalysisError::InputTooShort
                | AnalysisError::NoSelection
        )
    }
}
