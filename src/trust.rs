//! Registry of trusted fact-checking sources.
//!
//! The registry is loaded once from a JSON file keyed by source name and is
//! read-only afterwards:
//!
//! ```json
//! {
//!   "veridica": {
//!     "trust_level": 0.9,
//!     "base_url": "https://www.veridica.ro/stiri/romania",
//!     "fact_check_url": "https://veridica.ro/category/fact-checking/",
//!     "max_pages": 14
//!   }
//! }
//! ```
//!
//! Unknown sources are fully untrusted: [`TrustRegistry::get_trust_level`]
//! returns `0.0` for them instead of failing.

use crate::models::TrustedSource;
use std::collections::HashMap;
use std::io::ErrorKind;
use tokio::fs;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Default, Clone)]
pub struct TrustRegistry {
    sources: HashMap<String, TrustedSource>,
}

impl TrustRegistry {
    /// Build a registry from already-constructed sources, keyed by `name`.
    pub fn from_sources(sources: impl IntoIterator<Item = TrustedSource>) -> Self {
        let sources = sources
            .into_iter()
            .map(|source| (source.name.clone(), clamp_trust(source)))
            .collect();
        Self { sources }
    }

    /// Parse the registry file contents.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, TrustedSource> = serde_json::from_str(json)?;
        Ok(Self::from_sources(raw.into_iter().map(|(name, mut source)| {
            source.name = name;
            source
        })))
    }

    /// Load the registry from `path`.
    ///
    /// A missing file or malformed JSON is logged and yields an empty registry.
    #[instrument(level = "info", skip_all, fields(%path))]
    pub async fn load(path: &str) -> Self {
        let contents = match fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Trusted sources file not found; no source will be trusted");
                return Self::default();
            }
            Err(e) => {
                error!(error = %e, "Failed to read trusted sources file");
                return Self::default();
            }
        };

        match Self::from_json(&contents) {
            Ok(registry) => {
                info!(count = registry.len(), "Loaded trusted sources");
                registry
            }
            Err(e) => {
                error!(error = %e, "Invalid JSON in trusted sources file");
                Self::default()
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&TrustedSource> {
        self.sources.get(name)
    }

    /// Trust level of `name`, or `0.0` when the source is not registered.
    pub fn get_trust_level(&self, name: &str) -> f64 {
        self.sources.get(name).map_or(0.0, |s| s.trust_level)
    }

    /// Registered source names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

fn clamp_trust(mut source: TrustedSource) -> TrustedSource {
    if !(0.0..=1.0).contains(&source.trust_level) {
        let clamped = if source.trust_level.is_nan() {
            0.0
        } else {
            source.trust_level.clamp(0.0, 1.0)
        };
        warn!(
            source = %source.name,
            trust_level = source.trust_level,
            clamped,
            "Trust level outside [0, 1]; clamping"
        );
        source.trust_level = clamped;
    }
    source
}
