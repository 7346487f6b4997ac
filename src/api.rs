use serde::{Deserialize, Serialize};

// -- Request bodies ---------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AnalyzeTextBody {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeUrlBody {
    pub url: String,
}

/// Secondary publish-date lookup, sent to the analyze endpoint with
/// `action: "get_date"`.
#[derive(Debug, Serialize)]
pub struct DateLookupBody {
    pub url: String,
    pub action: String,
}

impl DateLookupBody {
    pub fn new(url: &str) -> Self {
        DateLookupBody {
            url: url.to_string(),
            action: "get_date".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SourceCheckBody {
    pub url: String,
}

// -- Response bodies --------------------------------------------------------

/// Biased words and their suggested neutral alternatives, as the service
/// returns them. The two lists are NOT guaranteed equal length.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RedlineBody {
    #[serde(default)]
    pub biased_words: Vec<String>,
    #[serde(default)]
    pub neutral_alternatives: Vec<String>,
}

/// Analysis result. Every field may be absent; the renderer degrades per
/// field instead of failing the whole render.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub bias_score: Option<f64>,
    #[serde(default)]
    pub original_article: Option<String>,
    #[serde(default)]
    pub rewritten: Option<String>,
    #[serde(default)]
    pub redlined_text: Option<RedlineBody>,
    #[serde(default)]
    pub published_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DateResponse {
    #[serde(default)]
    pub published_date: Option<String>,
}

/// Source credibility judgment plus the domain the service actually rated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SourceCheckResponse {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub credibility: Option<String>,
}

/// Shape of a non-2xx body; the `error` field is optional by contract.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
