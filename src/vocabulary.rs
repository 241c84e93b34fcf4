//! Distinct-value vocabularies for the categorical filter choice lists.

use crate::dataset::Dataset;

/// Returns the sorted, deduplicated display values of one column. Cells
/// missing from ragged rows contribute the empty string. Computed from
/// the dataset alone, so it only needs recomputing when the dataset
/// changes, which is once per session.
pub fn distinct_values(dataset: &Dataset, column: usize) -> Vec<String> {
    let mut values: Vec<String> = dataset
        .rows()
        .iter()
        .map(|row| row.display(column))
        .collect();
    values.sort();
    values.dedup();
    values
}
