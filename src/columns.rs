//! The positional column contract of the archive sheet.
//!
//! Columns carry no names at the data level; meaning is attached to
//! fixed indices shared by the query engine, the summary projection,
//! and the detail form.

/// Country, the first categorical filter.
pub const COUNTRY_COL: usize = 0;

/// Document owner, the second categorical filter.
pub const OWNER_COL: usize = 26;

/// Completion date serial, the sort key of the list view.
pub const COMPLETED_COL: usize = 17;

/// Detail-form right section, in render order.
pub const RIGHT_SECTION_COLS: [usize; 13] = [0, 24, 25, 26, 27, 28, 29, 11, 17, 31, 32, 30, 33];

/// Left-section fields that start collapsed (long free-text columns).
pub const COLLAPSIBLE_COLS: [usize; 5] = [8, 20, 21, 22, 23];

/// List-view column projection, in render order.
pub const SUMMARY_COLS: [usize; 8] = [0, 1, 2, 4, 5, 16, 17, 26];

/// Summary columns rendered as calendar dates (received and completed).
pub const SUMMARY_DATE_COLS: [usize; 2] = [16, 17];
