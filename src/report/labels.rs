// src/report/labels.rs — Corpus display labels

/// Derive a short display label from a corpus identifier.
///
/// Strips exactly one leading `ngrams/` directory; identifiers without the
/// prefix are returned unchanged. Idempotent.
pub fn corpus_label(corpus: &str) -> &str {
    corpus.strip_prefix("ngrams/").unwrap_or(corpus)
}
