//! docview: the data core of a spreadsheet-archive browser.
//!
//! Ingests one workbook sheet into an immutable [`Dataset`], answers
//! filter/sort queries over it, derives distinct-value vocabularies for
//! the categorical filters, and maps a selected row into the two-section
//! detail form behind the overlay view. Rendering is someone else's job:
//! everything here returns plain values.

use std::path::Path;

use color_eyre::Result;

pub mod columns;
pub mod dataset;
pub mod dates;
pub mod form;
pub mod query;
pub mod source;
pub mod vocabulary;

pub use dataset::{CellValue, Dataset, Row};
pub use dates::serial_to_calendar_date;
pub use form::{map_row, summary_row, FieldEntry, FormLayout, SummaryRow};
pub use query::{query, Criteria, SortOrder};
pub use source::{load_workbook, LoadOptions};
pub use vocabulary::distinct_values;

/// One browsing session over one loaded dataset.
///
/// The session owns the only fallible step of the pipeline (ingestion);
/// afterwards the dataset is read-only and every operation is a pure
/// function of it.
pub struct Session {
    dataset: Dataset,
}

impl Session {
    /// Ingests the workbook and starts a session. Fails without a
    /// partial dataset when the file is unreachable or undecodable.
    pub fn open(path: &Path, options: &LoadOptions) -> Result<Self> {
        let dataset = source::load_workbook(path, options)?;
        tracing::debug!(rows = dataset.len(), "session started");
        Ok(Self::from_dataset(dataset))
    }

    /// Starts a session over an already-decoded dataset.
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn row_count(&self) -> usize {
        self.dataset.len()
    }

    /// Filter choice list for one column.
    pub fn distinct_values(&self, column: usize) -> Vec<String> {
        vocabulary::distinct_values(&self.dataset, column)
    }

    /// Filtered, optionally sorted view of the dataset.
    pub fn query(&self, criteria: &Criteria) -> Vec<&Row> {
        query::query(&self.dataset, criteria)
    }

    /// Detail form for one selected row.
    pub fn map_row(&self, row: &Row) -> FormLayout {
        form::map_row(row, self.dataset.headers())
    }

    /// List-view cells for one row.
    pub fn summary_row(&self, row: &Row) -> SummaryRow {
        form::summary_row(row, self.dataset.headers())
    }
}
