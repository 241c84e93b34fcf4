//! Row-to-view transforms: the two-section detail form and the
//! list-view summary projection.

use serde::{Deserialize, Serialize};

use crate::columns::{COLLAPSIBLE_COLS, RIGHT_SECTION_COLS, SUMMARY_COLS, SUMMARY_DATE_COLS};
use crate::dataset::Row;
use crate::dates::serial_to_calendar_date;

/// One labelled field of the detail form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub label: String,
    pub value: String,
    /// Collapsible fields start closed behind a disclosure control.
    pub collapsible: bool,
}

/// The detail form split. `right` holds the fixed metadata columns in a
/// fixed render order; `left` holds every other column of the row in
/// ascending index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormLayout {
    pub left: Vec<FieldEntry>,
    pub right: Vec<FieldEntry>,
}

/// List-view projection of one row: the summary columns as display
/// strings, with the matching header names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub labels: Vec<String>,
    pub cells: Vec<String>,
}

fn header_label(headers: &[String], index: usize) -> String {
    headers.get(index).cloned().unwrap_or_default()
}

/// Date-first value derivation: a cell that reads as a day serial
/// renders as its calendar date, anything else as its display string.
fn field_value(row: &Row, index: usize) -> String {
    serial_to_calendar_date(row.cell(index)).unwrap_or_else(|| row.display(index))
}

/// Splits one row into the two form sections.
///
/// The left section is recomputed per row from whatever indices the row
/// actually has, so ragged rows and over-long header lists are both
/// fine. Empty values keep their entry; the form shows the label with a
/// blank value rather than dropping the field.
pub fn map_row(row: &Row, headers: &[String]) -> FormLayout {
    let left = (0..row.len())
        .filter(|index| !RIGHT_SECTION_COLS.contains(index))
        .map(|index| FieldEntry {
            label: header_label(headers, index),
            value: field_value(row, index),
            collapsible: COLLAPSIBLE_COLS.contains(&index),
        })
        .collect();

    let right = RIGHT_SECTION_COLS
        .iter()
        .map(|&index| FieldEntry {
            label: header_label(headers, index),
            value: field_value(row, index),
            collapsible: false,
        })
        .collect();

    FormLayout { left, right }
}

/// Projects one row onto the list-view columns. The received and
/// completed columns render as calendar dates or blank; the rest render
/// as their raw display form.
pub fn summary_row(row: &Row, headers: &[String]) -> SummaryRow {
    let labels = SUMMARY_COLS
        .iter()
        .map(|&index| header_label(headers, index))
        .collect();
    let cells = SUMMARY_COLS
        .iter()
        .map(|&index| {
            if SUMMARY_DATE_COLS.contains(&index) {
                serial_to_calendar_date(row.cell(index)).unwrap_or_default()
            } else {
                row.display(index)
            }
        })
        .collect();
    SummaryRow { labels, cells }
}
