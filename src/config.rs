use clap::ValueEnum;
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "BIAS_LENS_BASE_URL";

/// Which deployment of the analysis service to talk to.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Variant {
    Hosted,
    Local,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Hosted => write!(f, "hosted"),
            Variant::Local => write!(f, "local"),
        }
    }
}

fn default_analyze_path() -> String {
    "/api/analyze".to_string()
}

fn default_source_check_path() -> String {
    "/api/source-check".to_string()
}

/// Endpoint layout for one deployment of the analysis service.
///
/// The hosted deployment serves the newer `/api/*` routes; the local
/// development server still answers on the older flat routes. Everything
/// downstream of this struct is identical across deployments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    #[serde(default = "default_analyze_path")]
    pub analyze_path: String,
    #[serde(default = "default_source_check_path")]
    pub source_check_path: String,
}

impl ServiceConfig {
    pub fn hosted() -> Self {
        ServiceConfig {
            base_url: "https://biasbackend.onrender.com".to_string(),
            analyze_path: default_analyze_path(),
            source_check_path: default_source_check_path(),
        }
    }

    pub fn local() -> Self {
        ServiceConfig {
            base_url: "http://127.0.0.1:5000".to_string(),
            analyze_path: "/analyze".to_string(),
            source_check_path: "/source_check".to_string(),
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Hosted => Self::hosted(),
            Variant::Local => Self::local(),
        }
    }

    /// Load endpoint settings from a TOML file. Missing path fields fall
    /// back to the hosted route layout.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)?;
        let config: ServiceConfig = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Replace the base URL with `BIAS_LENS_BASE_URL` when set and non-empty.
    pub fn apply_env_override(&mut self) {
        if let Ok(value) = env::var(BASE_URL_ENV) {
            if !value.trim().is_empty() {
                self.base_url = value;
            }
        }
    }

    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.analyze_path)
    }

    pub fn source_check_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.source_check_path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_hosted_variant_uses_api_routes() {
        let config = ServiceConfig::hosted();
        assert_eq!(
            config.analyze_url(),
            "https://biasbackend.onrender.com/api/analyze"
        );
        assert_eq!(
            config.source_check_url(),
            "https://biasbackend.onrender.com/api/source-check"
        );
    }

    #[test]
    fn test_local_variant_uses_flat_routes() {
        let config = ServiceConfig::local();
        assert_eq!(config.analyze_url(), "http://127.0.0.1:5000/analyze");
        assert_eq!(
            config.source_check_url(),
            "http://127.0.0.1:5000/source_check"
        );
    }

    #[test]
    fn test_for_variant_dispatch() {
        assert_eq!(ServiceConfig::for_variant(Variant::Hosted), ServiceConfig::hosted());
        assert_eq!(ServiceConfig::for_variant(Variant::Local), ServiceConfig::local());
    }

    #[test]
    fn test_trailing_slash_on_base_url_is_tolerated() {
        let config = ServiceConfig {
            base_url: "https://example.com/".to_string(),
            analyze_path: "/api/analyze".to_string(),
            source_check_path: "/api/source-check".to_string(),
        };
        assert_eq!(config.analyze_url(), "https://example.com/api/analyze");
    }

    #[test]
    fn test_from_file_full_config() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "base_url = \"http://staging.example.com\"\nanalyze_path = \"/analyze\"\nsource_check_path = \"/source_check\""
        )
        .expect("write");
        let config = ServiceConfig::from_file(file.path()).expect("load");
        assert_eq!(config.base_url, "http://staging.example.com");
        assert_eq!(config.analyze_path, "/analyze");
        assert_eq!(config.source_check_path, "/source_check");
    }

    #[test]
    fn test_from_file_defaults_missing_paths_to_api_routes() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "base_url = \"http://staging.example.com\"").expect("write");
        let config = ServiceConfig::from_file(file.path()).expect("load");
        assert_eq!(config.analyze_path, "/api/analyze");
        assert_eq!(config.source_check_path, "/api/source-check");
    }

    #[test]
    fn test_from_file_missing_file_errors() {
        assert!(ServiceConfig::from_file(Path::new("/nonexistent/bias-lens.toml")).is_err());
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Hosted.to_string(), "hosted");
        assert_eq!(Variant::Local.to_string(), "local");
    }
}
