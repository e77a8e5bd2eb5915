// src/cli/compare.rs — Default command: compare layouts across corpora

use std::collections::HashMap;

use crate::cli::Cli;
use crate::evaluator::client::EvaluatorClient;
use crate::evaluator::correlate::correlate;
use crate::infra::config::{self, Config};
use crate::infra::errors::KorporaError;
use crate::report::chart;
use crate::report::matrix::ComparisonMatrix;
use crate::util::split_params;

/// Run the full comparison pipeline: evaluate every corpus, fold the results
/// into one matrix, and render the chart.
pub async fn run_compare(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let command = match cli.evaluator {
        Some(ref s) => split_params(s),
        None => config.evaluator.argv(),
    };
    let client = EvaluatorClient::new(command)?;

    // Pre-flight: fail before the first invocation if the program is missing.
    which::which(client.program()).map_err(|_| KorporaError::EvaluatorNotFound {
        program: client.program().to_string(),
    })?;

    let corpora: Vec<String> = if cli.corpora.is_empty() {
        config
            .corpora
            .clone()
            .unwrap_or_else(config::default_corpora)
    } else {
        cli.corpora.clone()
    };
    let extra_args = split_params(&cli.eval_params);

    let matrix = collect_matrix(&client, &cli.layouts, &corpora, &extra_args, cli.quiet).await?;

    chart::render(&matrix, &cli.out, config.chart.width, config.chart.height)?;
    if !cli.quiet {
        eprintln!("Wrote {}", cli.out.display());
    }
    Ok(())
}

/// Evaluate every corpus in order and fold the per-corpus costs into one
/// comparison matrix.
///
/// Corpora are processed strictly sequentially: each evaluator invocation is
/// awaited in full before the next one is issued. Any failure aborts the
/// whole run; no partial matrix is returned.
pub async fn collect_matrix(
    client: &EvaluatorClient,
    layouts: &[String],
    corpora: &[String],
    extra_args: &[String],
    quiet: bool,
) -> Result<ComparisonMatrix, KorporaError> {
    let mut per_corpus: HashMap<String, HashMap<String, f64>> =
        HashMap::with_capacity(corpora.len());

    for (i, corpus) in corpora.iter().enumerate() {
        if !quiet {
            eprintln!("[{}/{}] evaluating {}", i + 1, corpora.len(), corpus);
        }
        let records = client.evaluate(layouts, corpus, extra_args).await?;
        let costs = correlate(corpus, layouts, &records)?;
        tracing::debug!("Corpus {}: {} record(s)", corpus, costs.len());
        per_corpus.insert(corpus.clone(), costs);
    }

    Ok(ComparisonMatrix::build(corpora, &per_corpus, layouts))
}
