use crate::api::{AnalyzeResponse, RedlineBody, SourceCheckResponse};

// ---------------------------------------------------------------------------
// Fallback text
// ---------------------------------------------------------------------------

pub const SCORE_UNAVAILABLE: &str = "Not Available";
pub const NO_BIASED_TERMS: &str = "No biased terms found.";
pub const NO_ALTERNATIVE: &str = "no alternative";
pub const NO_REWRITE: &str = "No rewritten text available.";
pub const NO_PUBLISH_TIME: &str = "Publish time not available";
pub const UNKNOWN_CREDIBILITY: &str = "Unknown";

/// Values the service itself sends when it has no publish time.
const DATE_SENTINELS: [&str; 2] = ["Unknown", "Original publish time not available"];

// ---------------------------------------------------------------------------
// Display model
// ---------------------------------------------------------------------------

/// One biased-word → neutral-alternative pairing, in service order.
#[derive(Debug, Clone, PartialEq)]
pub struct RedlinePair {
    pub biased: String,
    pub alternative: String,
}

/// Lines of one paragraph; single newlines inside a paragraph become
/// separate lines, blank lines separate paragraphs.
pub type Paragraph = Vec<String>;

/// Fully resolved, render-ready view of one analysis response. Every field
/// is display text; building one can never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    /// "42.35"-style score or [`SCORE_UNAVAILABLE`].
    pub bias_score: String,
    /// Empty means [`NO_BIASED_TERMS`] at display time.
    pub redline: Vec<RedlinePair>,
    pub original: Vec<Paragraph>,
    pub rewritten: Vec<Paragraph>,
    /// "Published: …" or [`NO_PUBLISH_TIME`].
    pub published: String,
}

// ---------------------------------------------------------------------------
// Per-field mapping
// ---------------------------------------------------------------------------

/// Missing or non-finite scores render as [`SCORE_UNAVAILABLE`]; everything
/// else is formatted to exactly two decimal places.
pub fn format_bias_score(score: Option<f64>) -> String {
    match score {
        Some(value) if value.is_finite() => format!("{:.2}", value),
        _ => SCORE_UNAVAILABLE.to_string(),
    }
}

/// Pair each biased word with the alternative at the same index. Indices
/// beyond the shorter list fall back to [`NO_ALTERNATIVE`] instead of
/// failing; order is preserved.
pub fn build_redline(redline: Option<&RedlineBody>) -> Vec<RedlinePair> {
    let Some(redline) = redline else {
        return Vec::new();
    };
    redline
        .biased_words
        .iter()
        .enumerate()
        .map(|(i, word)| RedlinePair {
            biased: word.clone(),
            alternative: redline
                .neutral_alternatives
                .get(i)
                .cloned()
                .unwrap_or_else(|| NO_ALTERNATIVE.to_string()),
        })
        .collect()
}

/// Redline pairs as display text, one pair per line; empty input yields the
/// [`NO_BIASED_TERMS`] sentinel.
pub fn format_redline(pairs: &[RedlinePair]) -> String {
    if pairs.is_empty() {
        return NO_BIASED_TERMS.to_string();
    }
    pairs
        .iter()
        .map(|pair| format!("{} -> {}", pair.biased, pair.alternative))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reformat a service timestamp for display: the first `T` separator becomes
/// a space, fractional seconds are dropped, a trailing `Z` marker is dropped.
/// An embedded offset like `-05:00` is left exactly as sent — the original
/// timezone is never converted.
pub fn format_published_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return NO_PUBLISH_TIME.to_string();
    };
    let raw = raw.trim();
    if raw.is_empty() || DATE_SENTINELS.contains(&raw) {
        return NO_PUBLISH_TIME.to_string();
    }

    let separated = raw.replacen('T', " ", 1);
    let mut cleaned = String::with_capacity(separated.len());
    let mut seen_colon = false;
    let mut chars = separated.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' {
            seen_colon = true;
        }
        // Fractional seconds only ever follow the time part.
        if c == '.' && seen_colon && chars.peek().is_some_and(|n| n.is_ascii_digit()) {
            while chars.peek().is_some_and(|n| n.is_ascii_digit()) {
                chars.next();
            }
            continue;
        }
        cleaned.push(c);
    }
    let cleaned = cleaned.strip_suffix('Z').unwrap_or(&cleaned);

    format!("Published: {}", cleaned)
}

/// Split body text on blank-line boundaries. Each paragraph keeps its
/// internal lines separate so single newlines become line breaks.
pub fn split_paragraphs(text: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current: Paragraph = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.to_string());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

/// "Credibility: <label>" with absent labels treated as the literal
/// [`UNKNOWN_CREDIBILITY`] category.
pub fn render_credibility(response: &SourceCheckResponse) -> String {
    format!(
        "Credibility: {}",
        response.credibility.as_deref().unwrap_or(UNKNOWN_CREDIBILITY)
    )
}

// ---------------------------------------------------------------------------
// Whole-response mapping
// ---------------------------------------------------------------------------

/// Map one (possibly partial) analysis response onto the display model.
///
/// `submitted_text` is the text the user originally sent, shown as the
/// original panel when the service echoes nothing back (text-mode flows).
/// Total: every input combination produces a renderable model.
pub fn render_analysis(response: &AnalyzeResponse, submitted_text: Option<&str>) -> DisplayModel {
    let original = response
        .original_article
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .or(submitted_text)
        .map(split_paragraphs)
        .unwrap_or_default();

    let rewritten = split_paragraphs(
        response
            .rewritten
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(NO_REWRITE),
    );

    DisplayModel {
        bias_score: format_bias_score(response.bias_score),
        redline: build_redline(response.redlined_text.as_ref()),
        original,
        rewritten,
        published: format_published_date(response.published_date.as_deref()),
    }
}
