// src/evaluator/correlate.rs — Record-to-layout correlation
//
// The evaluator's response carries no mandatory per-record key, so the i-th
// record is assigned to the i-th requested layout. A response whose length
// differs from the request is rejected outright; truncating or padding would
// silently corrupt the comparison.

use std::collections::HashMap;

use crate::evaluator::client::EvaluationRecord;
use crate::infra::errors::KorporaError;

/// Map each record to the layout that produced it.
///
/// Correlation is positional. When a record echoes a layout name, it must
/// match the layout requested at that position.
pub fn correlate(
    corpus: &str,
    layouts: &[String],
    records: &[EvaluationRecord],
) -> Result<HashMap<String, f64>, KorporaError> {
    if records.len() != layouts.len() {
        return Err(KorporaError::RecordCountMismatch {
            corpus: corpus.to_string(),
            expected: layouts.len(),
            actual: records.len(),
        });
    }

    let mut costs = HashMap::with_capacity(layouts.len());
    for (position, (layout, record)) in layouts.iter().zip(records).enumerate() {
        if let Some(returned) = &record.layout {
            if returned != layout {
                return Err(KorporaError::RecordLayoutMismatch {
                    corpus: corpus.to_string(),
                    position,
                    requested: layout.clone(),
                    returned: returned.clone(),
                });
            }
        }
        costs.insert(layout.clone(), record.total_cost);
    }
    Ok(costs)
}
