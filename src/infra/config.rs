// src/infra/config.rs — Configuration loading (TOML)

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::util::split_params;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub evaluator: EvaluatorConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    /// Overrides the built-in corpus list when set.
    #[serde(default)]
    pub corpora: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Evaluator command line: program plus leading arguments.
    pub command: String,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            command: "cargo run --release --".into(),
        }
    }
}

impl EvaluatorConfig {
    pub fn argv(&self) -> Vec<String> {
        split_params(&self.command)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
        }
    }
}

impl Config {
    /// Load `korpora.toml` from the working directory, defaults if absent.
    pub fn load() -> anyhow::Result<Config> {
        let path = Path::new("korpora.toml");
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}

/// Built-in corpus list, matching the ngram directories shipped alongside
/// the layout evaluator.
pub fn default_corpora() -> Vec<String> {
    [
        "ngrams/eng/eng_wiki_1m",
        "ngrams/eng/eng_web_1m",
        "ngrams/eng/eng_news_typical_1m",
        "ngrams/eng/eng_shai",
        "ngrams/eng/oxey_english",
        "ngrams/eng/oxey_english2",
        "ngrams/deu/deu_web_1m",
        "ngrams/deu/deu_mixed_1m",
        "ngrams/deu/arne",
        "ngrams/deu/arne_basis",
        "ngrams/deu/arne_no_special",
        "ngrams/deu/irc_neo",
        "ngrams/deu/oxey_german",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.evaluator.command, "cargo run --release --");
        assert_eq!(config.chart.width, 1600);
        assert_eq!(config.chart.height, 900);
        assert!(config.corpora.is_none());
    }

    #[test]
    fn test_evaluator_argv() {
        let config = Config::default();
        assert_eq!(
            config.evaluator.argv(),
            vec!["cargo", "run", "--release", "--"]
        );
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [evaluator]
            command = "evaluate"
            "#,
        )
        .unwrap();
        assert_eq!(config.evaluator.command, "evaluate");
        assert_eq!(config.chart.width, 1600);
    }

    #[test]
    fn test_full_toml() {
        let config: Config = toml::from_str(
            r#"
            corpora = ["ngrams/eng/eng_wiki_1m"]

            [evaluator]
            command = "./target/release/evaluate"

            [chart]
            width = 800
            height = 450
            "#,
        )
        .unwrap();
        assert_eq!(config.corpora.as_deref().unwrap().len(), 1);
        assert_eq!(config.chart.width, 800);
        assert_eq!(config.chart.height, 450);
    }

    #[test]
    fn test_default_corpora_order() {
        let corpora = default_corpora();
        assert_eq!(corpora.len(), 13);
        assert_eq!(corpora[0], "ngrams/eng/eng_wiki_1m");
        assert_eq!(corpora[12], "ngrams/deu/oxey_german");
    }
}
