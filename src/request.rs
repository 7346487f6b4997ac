use url::Url;

use crate::error::AnalysisError;
use crate::input::{InputSource, ResolvedInput};

/// Free text below this length is rejected before any network call.
pub const MIN_TEXT_LEN: usize = 100;

/// A validated unit of work for the analyze endpoint. Exactly one kind is
/// ever populated; construction goes through [`build`].
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequest {
    Text(String),
    Url(String),
}

impl AnalysisRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisRequest::Text(_) => "text",
            AnalysisRequest::Url(_) => "url",
        }
    }
}

/// Companion publish-date lookup dispatched alongside a URL-mode analysis.
/// Independent and allowed to fail without aborting the primary request.
#[derive(Debug, Clone, PartialEq)]
pub struct DateLookup {
    pub url: String,
}

/// What one successful validation produces: the primary request plus the
/// optional best-effort date lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub request: AnalysisRequest,
    pub date_lookup: Option<DateLookup>,
}

/// Syntactic URL validation shared by the builder and the source-check flow.
pub fn validate_url(raw: &str) -> Result<String, AnalysisError> {
    let candidate = raw.trim();
    if candidate.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    Url::parse(candidate).map_err(|_| AnalysisError::InvalidUrl)?;
    Ok(candidate.to_string())
}

/// Validate a resolved input and construct exactly one request.
///
/// Rules, first failure wins: something must be supplied (`EmptyInput`);
/// URL-box input must parse as an absolute URL (`InvalidUrl`); free text must
/// reach [`MIN_TEXT_LEN`] characters (`InputTooShort`). The calling context's
/// declared source decides the mode — text and URL are never mixed.
pub fn build(input: &ResolvedInput) -> Result<PreparedRequest, AnalysisError> {
    let candidate = input.text.trim();
    if candidate.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    match input.source {
        InputSource::UrlBox => {
            let url = validate_url(candidate)?;
            Ok(PreparedRequest {
                request: AnalysisRequest::Url(url.clone()),
                date_lookup: Some(DateLookup { url }),
            })
        }
        InputSource::TextBox | InputSource::PageSelection => {
            if candidate.chars().count() < MIN_TEXT_LEN {
                return Err(AnalysisError::InputTooShort);
            }
            Ok(PreparedRequest {
                request: AnalysisRequest::Text(candidate.to_string()),
                date_lookup: None,
            })
        }
    }
}
