// src/report/matrix.rs — Comparison matrix assembly
//
// Folds the per-corpus cost mappings into one table. Rows follow the
// caller's corpus order and columns the caller's layout order, regardless of
// the order the mappings were populated in, so the chart axes always match
// the request.

use std::collections::HashMap;

use crate::report::labels;

/// Cost table: one row per corpus, one column per layout.
#[derive(Debug, Clone)]
pub struct ComparisonMatrix {
    /// Column order, as requested by the caller.
    pub layouts: Vec<String>,
    /// Row order, as requested by the caller.
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone)]
pub struct MatrixRow {
    pub corpus: String,
    /// Display label, prefix-stripped from `corpus`.
    pub label: String,
    /// Cells aligned with `ComparisonMatrix::layouts`. `None` means no
    /// measurement exists for that (corpus, layout) pair; the chart omits
    /// the bar.
    pub cells: Vec<Option<f64>>,
}

impl ComparisonMatrix {
    pub fn build(
        corpora: &[String],
        per_corpus: &HashMap<String, HashMap<String, f64>>,
        layouts: &[String],
    ) -> Self {
        let rows = corpora
            .iter()
            .map(|corpus| {
                let costs = per_corpus.get(corpus);
                let cells = layouts
                    .iter()
                    .map(|layout| costs.and_then(|m| m.get(layout).copied()))
                    .collect();
                MatrixRow {
                    corpus: corpus.clone(),
                    label: labels::corpus_label(corpus).to_string(),
                    cells,
                }
            })
            .collect();

        Self {
            layouts: layouts.to_vec(),
            rows,
        }
    }

    /// Cell lookup by identifiers. Mostly useful in tests.
    pub fn get(&self, corpus: &str, layout: &str) -> Option<f64> {
        let col = self.layouts.iter().position(|l| l == layout)?;
        self.rows
            .iter()
            .find(|r| r.corpus == corpus)
            .and_then(|r| r.cells[col])
    }

    /// Largest populated cell, 0.0 for an all-empty matrix.
    pub fn max_cost(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter().copied().flatten())
            .fold(0.0, f64::max)
    }
}
