use clap::Parser;
use std::path::Path;

use crate::config::{ServiceConfig, Variant};
use crate::input::Trigger;

#[derive(Parser)]
#[command(name = "bias-lens")]
#[command(version = "0.3.1")]
#[command(about = "Submit news text or a URL to the bias analysis service and render the result")]
pub struct Args {
    /// Free text to analyze (text-box flow)
    #[arg(long, conflicts_with_all = ["url", "selection"])]
    pub text: Option<String>,

    /// Article URL to analyze (URL-box flow; also fetches the publish date)
    #[arg(long, conflicts_with = "selection")]
    pub url: Option<String>,

    /// Page selection handed over by a host surface (context menu / toolbar)
    #[arg(long)]
    pub selection: Option<String>,

    /// Check source credibility for a URL instead of (or alongside) analysis
    #[arg(long)]
    pub source_check: Option<String>,

    /// Which deployment of the service to talk to
    #[arg(long, value_enum, default_value = "hosted")]
    pub variant: Variant,

    /// Override the service base URL (beats --variant, the config file, and
    /// the environment)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a TOML config file describing the service endpoints
    #[arg(long)]
    pub config: Option<String>,

    /// Toggle to the rewritten panel after rendering
    #[arg(long)]
    pub show_rewritten: bool,

    /// Flag the article for review after rendering
    #[arg(long)]
    pub flag: bool,
}

/// Map parsed flags onto the analysis trigger, if any. Mode selection is
/// explicit: the text flag drives the text-box flow, the URL flag the
/// URL-box flow, the selection flag the host-selection flow.
pub fn resolve_trigger(args: &Args) -> Option<Trigger> {
    if let Some(text) = &args.text {
        Some(Trigger::AnalyzeText(text.clone()))
    } else if let Some(url) = &args.url {
        Some(Trigger::AnalyzeUrl(url.clone()))
    } else {
        args.selection
            .as_ref()
            .map(|selection| Trigger::PageSelection(Some(selection.clone())))
    }
}

/// Build the service config. Precedence, lowest to highest: variant default,
/// TOML file, `BIAS_LENS_BASE_URL`, `--base-url`.
pub fn resolve_config(args: &Args) -> Result<ServiceConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => ServiceConfig::from_file(Path::new(path))?,
        None => ServiceConfig::for_variant(args.variant),
    };
    config.apply_env_override();
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["bias-lens"]);
        assert!(args.text.is_none());
        assert!(args.url.is_none());
        assert!(args.selection.is_none());
        assert!(args.source_check.is_none());
        assert_eq!(args.variant, Variant::Hosted);
        assert!(!args.show_rewritten);
        assert!(!args.flag);
    }

    #[test]
    fn test_args_text_flow() {
        let args = Args::parse_from(["bias-lens", "--text", "some article text"]);
        assert_eq!(
            resolve_trigger(&args),
            Some(Trigger::AnalyzeText("some article text".to_string()))
        );
    }

    #[test]
    fn test_args_url_flow() {
        let args = Args::parse_from(["bias-lens", "--url", "https://example.com/a"]);
        assert_eq!(
            resolve_trigger(&args),
            Some(Trigger::AnalyzeUrl("https://example.com/a".to_string()))
        );
    }

    #[test]
    fn test_args_selection_flow() {
        let args = Args::parse_from(["bias-lens", "--selection", "highlighted"]);
        assert_eq!(
            resolve_trigger(&args),
            Some(Trigger::PageSelection(Some("highlighted".to_string())))
        );
    }

    #[test]
    fn test_no_input_yields_no_trigger() {
        let args = Args::parse_from(["bias-lens", "--source-check", "https://example.com"]);
        assert!(resolve_trigger(&args).is_none());
        assert_eq!(args.source_check.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_text_and_selection_conflict() {
        let result = Args::try_parse_from(["bias-lens", "--text", "a", "--selection", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_variant_local() {
        let args = Args::parse_from(["bias-lens", "--variant", "local"]);
        assert_eq!(args.variant, Variant::Local);
    }

    #[test]
    fn test_resolve_config_variant_default() {
        let args = Args::parse_from(["bias-lens", "--variant", "local"]);
        let config = resolve_config(&args).expect("config");
        assert_eq!(config.analyze_url(), "http://127.0.0.1:5000/analyze");
    }

    #[test]
    fn test_resolve_config_base_url_flag_wins() {
        let args = Args::parse_from([
            "bias-lens",
            "--variant",
            "local",
            "--base-url",
            "http://staging.example.com",
        ]);
        let config = resolve_config(&args).expect("config");
        assert_eq!(config.base_url, "http://staging.example.com");
        // Variant-selected paths survive a base URL override.
        assert_eq!(config.analyze_path, "/analyze");
    }

    #[test]
    fn test_show_rewritten_flag() {
        let args = Args::parse_from(["bias-lens", "--text", "t", "--show-rewritten"]);
        assert!(args.show_rewritten);
    }

    #[test]
    fn test_flag_flag() {
        let args = Args::parse_from(["bias-lens", "--text", "t", "--flag"]);
        assert!(args.flag);
    }
}
