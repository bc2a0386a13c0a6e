//! Text preprocessing: normalization, keyword extraction and lemmatization.
//!
//! All language resources live in an [`NlpContext`] that is built once in
//! `main` and passed by reference to whatever needs it. Nothing in this
//! module holds global state except the compiled normalization regex.
//!
//! # Pipeline
//!
//! ```text
//! raw text ──normalize──▶ "lowercase words only"
//!          ──extract_keywords──▶ [stem, stem, ...]   (veracity evaluator)
//!          ──lemmatize──▶ [lemma, lemma, ...]         (TF-IDF finder)
//! ```

pub mod stopwords;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt;
use tokio::fs;
use tracing::{info, instrument, warn};

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Lowercase `text`, strip everything that is neither a word character nor
/// whitespace, and collapse whitespace runs to single spaces.
///
/// ```ignore
/// assert_eq!(normalize("  Vaccinurile, sunt SIGURE!  "), "vaccinurile sunt sigure");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Jaccard overlap of two keyword lists, treated as sets.
///
/// Returns `0.0` when both lists are empty.
pub fn keyword_overlap(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    set_a.intersection(&set_b).count() as f64 / union as f64
}

/// Language resources shared by the keyword extractor and the lemmatizer.
pub struct NlpContext {
    stemmer: Stemmer,
    stopwords: HashSet<String>,
    lemmas: HashMap<String, String>,
}

impl fmt::Debug for NlpContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NlpContext")
            .field("language", &"romanian")
            .field("stopwords", &self.stopwords.len())
            .field("lemmas", &self.lemmas.len())
            .finish()
    }
}

impl NlpContext {
    /// Romanian Snowball stemmer and stopword list, no lemma table.
    pub fn romanian() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::Romanian),
            stopwords: stopwords::ROMANIAN.iter().map(|w| w.to_string()).collect(),
            lemmas: HashMap::new(),
        }
    }

    /// Attach a `form -> lemma` table used by [`NlpContext::lemmatize`].
    pub fn with_lemmas(mut self, lemmas: HashMap<String, String>) -> Self {
        self.lemmas = lemmas;
        self
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn stem(&self, token: &str) -> String {
        self.stemmer.stem(token).into_owned()
    }

    /// Split normalized text into stems, dropping stopwords.
    ///
    /// Expects the output of [`normalize`]; tokens are whitespace-separated.
    pub fn extract_keywords(&self, normalized: &str) -> Vec<String> {
        normalized
            .split_whitespace()
            .filter(|token| !self.is_stopword(token))
            .map(|token| self.stem(token))
            .collect()
    }

    /// Reduce raw text to its content-word base forms.
    ///
    /// Lowercases, drops punctuation and stopwords, then maps each token
    /// through the lemma table. Tokens missing from the table fall back to
    /// their Snowball stem.
    pub fn lemmatize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty() && !self.is_stopword(token))
            .map(|token| match self.lemmas.get(token) {
                Some(lemma) => lemma.clone(),
                None => self.stem(token),
            })
            .collect()
    }
}

/// Parse a lemma table: one `form<TAB>lemma` pair per line.
///
/// Blank lines and lines starting with `#` are ignored, as are lines
/// without a tab. Forms are lowercased so lookups match [`NlpContext::lemmatize`].
pub fn parse_lemma_table(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('\t'))
        .map(|(form, lemma)| (form.trim().to_lowercase(), lemma.trim().to_lowercase()))
        .filter(|(form, lemma)| !form.is_empty() && !lemma.is_empty())
        .collect()
}

/// Read and parse a lemma table from disk.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn load_lemma_table(path: &str) -> Result<HashMap<String, String>, Box<dyn Error>> {
    let contents = fs::read_to_string(path).await?;
    let table = parse_lemma_table(&contents);
    if table.is_empty() {
        warn!("Lemma table is empty; lemmatization falls back to stemming");
    }
    info!(entries = table.len(), "Loaded lemma table");
    Ok(table)
}
