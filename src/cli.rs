//! Command-line interface definitions.
//!
//! Global options can be provided as flags or environment variables; each
//! subcommand maps to one workflow in `main`.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line arguments for the fact checker.
///
/// # Examples
///
/// ```sh
/// # Refresh the local copy of every trusted source
/// fact_check_news scrape
///
/// # Check a claim against Veridica
/// fact_check_news verify "Vaccinurile sunt sigure"
///
/// # Search the verified and disinformation corpora
/// fact_check_news analyze "Vaccinurile conțin cipuri"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Path to the trusted sources JSON file
    #[arg(long, global = true, env = "FACT_CHECK_SOURCES", default_value = "config/trusted_sources.json")]
    pub sources: String,

    /// Directory holding scraped articles and analysis corpora
    #[arg(long, global = true, env = "FACT_CHECK_DATA_DIR", default_value = "data")]
    pub data_dir: String,

    /// Optional tab-separated `form<TAB>lemma` table for lemmatization
    #[arg(long, global = true, env = "FACT_CHECK_LEMMAS")]
    pub lemmas: Option<String>,
}

/// Text similarity used for title and description scores.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Character-level diff ratio
    Sequence,
    /// TF-IDF cosine over lemmas
    Tfidf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape trusted sources and store their articles
    Scrape {
        /// Source to scrape; all registered sources when omitted
        source: Option<String>,

        /// Also scrape the source's fact-checking category page
        #[arg(long)]
        fact_checks: bool,
    },

    /// Estimate whether a claim matches trusted reporting
    Verify {
        /// Claim text; prompted for interactively when omitted
        text: Vec<String>,

        /// Trusted source whose articles and trust level are used
        #[arg(short, long, default_value = "veridica")]
        source: String,

        /// Scrape the source before verifying
        #[arg(long)]
        refresh: bool,

        /// How title and description similarity are measured
        #[arg(long, value_enum, default_value_t = Strategy::Sequence)]
        strategy: Strategy,
    },

    /// List verified and disinformation articles similar to a claim
    Analyze {
        /// Claim text
        text: Vec<String>,

        /// Minimum TF-IDF cosine similarity (exclusive)
        #[arg(short, long, default_value_t = crate::analyzer::DEFAULT_THRESHOLD)]
        threshold: f64,
    },
}
