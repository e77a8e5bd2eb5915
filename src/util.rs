// src/util.rs — Shared utility functions

/// Split a whitespace-delimited parameter string into argv fragments.
///
/// Used for both the evaluator command and `--eval-params`; an empty or
/// all-whitespace string yields no fragments.
pub fn split_params(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}
