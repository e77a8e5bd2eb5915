// src/cli/mod.rs — CLI definition (clap derive)

pub mod compare;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "korpora",
    about = "Compare keyboard layout evaluation costs across text corpora",
    version
)]
pub struct Cli {
    /// Layouts to compare (passed through to the evaluator)
    #[arg(required = true)]
    pub layouts: Vec<String>,

    /// Ngram corpora to evaluate against (built-in list if omitted)
    #[arg(long, num_args = 1..)]
    pub corpora: Vec<String>,

    /// Filename of the resulting image
    #[arg(long, default_value = "layout_by_corpus.png")]
    pub out: PathBuf,

    /// Extra arguments passed to the evaluator verbatim (whitespace-delimited)
    #[arg(long, default_value = "")]
    pub eval_params: String,

    /// Evaluator command, program plus leading arguments (whitespace-delimited)
    #[arg(long)]
    pub evaluator: Option<String>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress per-corpus progress output
    #[arg(long)]
    pub quiet: bool,
}
