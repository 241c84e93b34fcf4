//! The filter/sort engine over a loaded dataset.

use serde::{Deserialize, Serialize};

use crate::columns::{COMPLETED_COL, COUNTRY_COL, OWNER_COL};
use crate::dataset::{Dataset, Row};

/// Sort directive for the completion-date column. Serializes as the
/// `"none"`/`"asc"`/`"desc"` tokens the shell sends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    pub fn iterator() -> impl Iterator<Item = SortOrder> {
        [SortOrder::None, SortOrder::Ascending, SortOrder::Descending]
            .iter()
            .copied()
    }
}

/// One query over the dataset. `None` and the empty string both mean a
/// constraint is inactive, matching how a cleared filter selection reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    /// Case-insensitive substring match against every cell of a row.
    pub search: Option<String>,
    /// Exact (case-insensitive) match on the country column.
    pub country: Option<String>,
    /// Exact (case-insensitive) match on the owner column.
    pub owner: Option<String>,
    pub sort: SortOrder,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.search = Some(term.to_string());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn with_owner(mut self, owner: &str) -> Self {
        self.owner = Some(owner.to_string());
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Case-folds an active constraint; unset and empty both deactivate it.
fn active(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
}

/// Applies the criteria to the dataset and returns the matching rows by
/// reference, in dataset order unless a sort directive is given.
///
/// Filters are conjunctive. The sort compares the raw stringified cell
/// of the completion column lexicographically, not chronologically, and
/// is stable in both directions. Cells missing from ragged rows compare
/// as the empty string.
pub fn query<'a>(dataset: &'a Dataset, criteria: &Criteria) -> Vec<&'a Row> {
    let country = active(&criteria.country);
    let owner = active(&criteria.owner);
    let search = active(&criteria.search);

    let mut rows: Vec<&Row> = dataset
        .rows()
        .iter()
        .filter(|row| {
            if let Some(country) = &country {
                if row.display(COUNTRY_COL).to_lowercase() != *country {
                    return false;
                }
            }
            if let Some(owner) = &owner {
                if row.display(OWNER_COL).to_lowercase() != *owner {
                    return false;
                }
            }
            if let Some(term) = &search {
                let hit = row
                    .cells()
                    .iter()
                    .any(|cell| cell.display().to_lowercase().contains(term.as_str()));
                if !hit {
                    return false;
                }
            }
            true
        })
        .collect();

    match criteria.sort {
        SortOrder::Ascending => {
            rows.sort_by(|a, b| a.display(COMPLETED_COL).cmp(&b.display(COMPLETED_COL)));
        }
        SortOrder::Descending => {
            rows.sort_by(|a, b| b.display(COMPLETED_COL).cmp(&a.display(COMPLETED_COL)));
        }
        SortOrder::None => {}
    }

    tracing::debug!(
        matched = rows.len(),
        total = dataset.len(),
        sort = criteria.sort.as_str(),
        "query evaluated"
    );
    rows
}
