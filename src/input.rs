use crate::error::AnalysisError;

/// Where a candidate input string came from. The builder applies different
/// validation depending on the declared source, never by sniffing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    TextBox,
    UrlBox,
    PageSelection,
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::TextBox => write!(f, "text-box"),
            InputSource::UrlBox => write!(f, "url-box"),
            InputSource::PageSelection => write!(f, "page-selection"),
        }
    }
}

/// A trimmed input candidate plus its declared origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInput {
    pub text: String,
    pub source: InputSource,
}

/// A user-visible trigger delivered by one of the front-end surfaces.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    AnalyzeText(String),
    AnalyzeUrl(String),
    /// Selection handed over by the host page (toolbar icon or the
    /// "Analyze Bias in News" context-menu entry). `None` means the host
    /// could not read the selection at all.
    PageSelection(Option<String>),
}

/// Produce one trimmed candidate from a trigger. Page selections that are
/// missing or whitespace-only stop here with `NoSelection`; empty box input
/// is left for the request builder to reject as `EmptyInput`.
pub fn resolve(trigger: &Trigger) -> Result<ResolvedInput, AnalysisError> {
    match trigger {
        Trigger::AnalyzeText(text) => Ok(ResolvedInput {
            text: text.trim().to_string(),
            source: InputSource::TextBox,
        }),
        Trigger::AnalyzeUrl(url) => Ok(ResolvedInput {
            text: url.trim().to_string(),
            source: InputSource::UrlBox,
        }),
        Trigger::PageSelection(None) => Err(AnalysisError::NoSelection),
        Trigger::PageSelection(Some(selection)) => {
            let trimmed = selection.trim();
            if trimmed.is_empty() {
                Err(AnalysisError::NoSelection)
            } else {
                Ok(ResolvedInput {
                    text: trimmed.to_string(),
                    source: InputSource::PageSelection,
                })
            }
        }
    }
}
