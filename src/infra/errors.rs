// src/infra/errors.rs — Error types for korpora

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Every failure aborts the whole comparison run before the output image is
/// written; there is no partial-success mode and nothing is retried.
#[derive(Error, Debug)]
pub enum KorporaError {
    #[error("Evaluator could not be started for corpus '{corpus}': {source}")]
    Invocation {
        corpus: String,
        #[source]
        source: io::Error,
    },

    #[error("Evaluator failed for corpus '{corpus}' ({status}): {stderr}")]
    EvaluatorFailed {
        corpus: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Evaluator output for corpus '{corpus}' is not valid JSON: {source}")]
    MalformedResponse {
        corpus: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Evaluator returned {actual} record(s) for corpus '{corpus}', expected {expected}")]
    RecordCountMismatch {
        corpus: String,
        expected: usize,
        actual: usize,
    },

    #[error(
        "Evaluator returned layout '{returned}' at position {position} for corpus '{corpus}', expected '{requested}'"
    )]
    RecordLayoutMismatch {
        corpus: String,
        position: usize,
        requested: String,
        returned: String,
    },

    #[error("Evaluator program '{program}' not found in PATH")]
    EvaluatorNotFound { program: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
