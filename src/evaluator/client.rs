// src/evaluator/client.rs — External evaluator invocation
//
// Spawns one evaluator process per corpus and decodes its JSON output.
// The evaluator is invoked as `<command> <layout>... --ngrams <corpus> --json
// [extra-args...]` and is expected to print a JSON array with one cost record
// per requested layout, in request order.

use serde::Deserialize;
use tokio::process::Command;

use crate::infra::errors::KorporaError;

/// One cost observation returned by the evaluator for a single layout.
///
/// Only `total_cost` is required; unknown fields are ignored. Evaluators that
/// echo the layout name per record set `layout`, which lets correlation
/// detect reordered output instead of silently mislabeling it.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationRecord {
    pub total_cost: f64,
    #[serde(default)]
    pub layout: Option<String>,
}

/// Client for the external layout-evaluation tool.
#[derive(Debug, Clone)]
pub struct EvaluatorClient {
    /// Program plus leading arguments, e.g. `["cargo", "run", "--release", "--"]`.
    command: Vec<String>,
}

impl EvaluatorClient {
    pub fn new(command: Vec<String>) -> Result<Self, KorporaError> {
        if command.first().map(String::as_str).unwrap_or("").is_empty() {
            return Err(KorporaError::Config("evaluator command is empty".into()));
        }
        Ok(Self { command })
    }

    pub fn program(&self) -> &str {
        &self.command[0]
    }

    /// Arguments passed to the evaluator for one corpus, excluding the
    /// program itself. Layout order is preserved; extra args go last,
    /// verbatim.
    pub fn build_args(&self, layouts: &[String], corpus: &str, extra_args: &[String]) -> Vec<String> {
        let mut args: Vec<String> = self.command[1..].to_vec();
        args.extend(layouts.iter().cloned());
        args.push("--ngrams".into());
        args.push(corpus.to_string());
        args.push("--json".into());
        args.extend(extra_args.iter().cloned());
        args
    }

    /// Evaluate all `layouts` against one corpus.
    ///
    /// One-shot, blocking invocation: the process is spawned, its output is
    /// captured in full, and its stdout is decoded as a JSON array of
    /// records. Non-zero exit or undecodable output is a hard failure for
    /// the corpus. Not retried.
    pub async fn evaluate(
        &self,
        layouts: &[String],
        corpus: &str,
        extra_args: &[String],
    ) -> Result<Vec<EvaluationRecord>, KorporaError> {
        let args = self.build_args(layouts, corpus, extra_args);
        tracing::debug!("Running: {} {}", self.program(), args.join(" "));

        let output = Command::new(self.program())
            .args(&args)
            .output()
            .await
            .map_err(|e| KorporaError::Invocation {
                corpus: corpus.to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(KorporaError::EvaluatorFailed {
                corpus: corpus.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_records(corpus, &output.stdout)
    }
}

/// Decode the evaluator's stdout: a single JSON array of cost records.
pub fn parse_records(corpus: &str, stdout: &[u8]) -> Result<Vec<EvaluationRecord>, KorporaError> {
    serde_json::from_slice(stdout).map_err(|e| KorporaError::MalformedResponse {
        corpus: corpus.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layouts(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_args_order() {
        let client = EvaluatorClient::new(vec![
            "cargo".into(),
            "run".into(),
            "--release".into(),
            "--".into(),
        ])
        .unwrap();
        let args = client.build_args(&layouts(&["qwerty", "dvorak"]), "ngrams/eng/a", &[]);
        assert_eq!(
            args,
            vec!["run", "--release", "--", "qwerty", "dvorak", "--ngrams", "ngrams/eng/a", "--json"]
        );
    }

    #[test]
    fn test_build_args_extra_params_appended_verbatim() {
        let client = EvaluatorClient::new(vec!["evaluate".into()]).unwrap();
        let args = client.build_args(
            &layouts(&["qwerty"]),
            "ngrams/eng/a",
            &["--fixed".into(), ",.".into()],
        );
        assert_eq!(
            args,
            vec!["qwerty", "--ngrams", "ngrams/eng/a", "--json", "--fixed", ",."]
        );
    }

    #[test]
    fn test_empty_command_rejected() {
        assert!(EvaluatorClient::new(vec![]).is_err());
        assert!(EvaluatorClient::new(vec!["".into()]).is_err());
    }

    #[test]
    fn test_parse_records() {
        let records =
            parse_records("c", br#"[{"total_cost":10.5},{"total_cost":20.0}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].total_cost, 10.5);
        assert_eq!(records[1].total_cost, 20.0);
        assert!(records[0].layout.is_none());
    }

    #[test]
    fn test_parse_records_ignores_unknown_fields() {
        let records = parse_records(
            "c",
            br#"[{"total_cost":1.0,"layout":"qwerty","details":{"bigrams":0.4}}]"#,
        )
        .unwrap();
        assert_eq!(records[0].layout.as_deref(), Some("qwerty"));
    }

    #[test]
    fn test_parse_records_malformed() {
        let err = parse_records("ngrams/eng/a", b"Finished release [optimized]").unwrap_err();
        match err {
            KorporaError::MalformedResponse { corpus, .. } => assert_eq!(corpus, "ngrams/eng/a"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_records_requires_total_cost() {
        assert!(parse_records("c", br#"[{"cost":1.0}]"#).is_err());
    }
}
