//! Startup configuration: reply endpoint and panel variant, validated fail-fast.

use anyhow::{bail, Context, Result};
use reqwest::Url;

pub const ENDPOINT_VAR: &str = "HELPDESK_ENDPOINT";
pub const VARIANT_VAR: &str = "HELPDESK_VARIANT";

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/reply";

/// Which rendition of the panel to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelVariant {
    /// Canonical: input hidden until latched open, button row dismissed after
    /// first use.
    Gated,
    /// Reduced configuration: input always visible, button row never
    /// dismissed.
    Classic,
}

impl PanelVariant {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "gated" | "" => Ok(PanelVariant::Gated),
            "classic" => Ok(PanelVariant::Classic),
            other => bail!("unknown {VARIANT_VAR} value {other:?} (expected \"gated\" or \"classic\")"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: Url,
    pub variant: PanelVariant,
}

impl Config {
    /// Read configuration from the environment. A malformed endpoint or an
    /// unknown variant is a startup error, not a silent send-time failure.
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.into());
        let variant = std::env::var(VARIANT_VAR).unwrap_or_default();
        Self::parse(&endpoint, &variant)
    }

    fn parse(endpoint: &str, variant: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("invalid {ENDPOINT_VAR} value {endpoint:?}"))?;
        Ok(Self {
            endpoint,
            variant: PanelVariant::parse(variant)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gated_variant() {
        let cfg = Config::parse(DEFAULT_ENDPOINT, "").unwrap();
        assert_eq!(cfg.variant, PanelVariant::Gated);
        assert_eq!(cfg.endpoint.as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn parses_classic_variant_case_insensitively() {
        let cfg = Config::parse(DEFAULT_ENDPOINT, "Classic").unwrap();
        assert_eq!(cfg.variant, PanelVariant::Classic);
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(Config::parse(DEFAULT_ENDPOINT, "compact").is_err());
    }

    #[test]
    fn rejects_malformed_endpoint() {
        assert!(Config::parse("not a url", "gated").is_err());
        assert!(Config::parse("", "gated").is_err());
    }
}
