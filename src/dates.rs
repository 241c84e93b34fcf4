//! Rendering of spreadsheet day serials as calendar dates.

use chrono::DateTime;

use crate::dataset::CellValue;

/// Days between the 1900-system day zero and the Unix epoch.
const EPOCH_OFFSET_DAYS: f64 = 25_569.0;
const SECONDS_PER_DAY: i64 = 86_400;

/// Renders a 1900-epoch day serial as `YYYY-MM-DD`.
///
/// Returns `None` for anything that is not a usable serial: empty cells,
/// booleans, text that does not parse as a number, non-finite numbers,
/// and zero (an empty date cell in the source workbooks decodes as 0).
/// Any time-of-day fraction is truncated away. The conversion is pinned
/// to UTC; a given serial renders as the same date on every machine.
pub fn serial_to_calendar_date(cell: &CellValue) -> Option<String> {
    let serial = match cell {
        CellValue::Number(n) => *n,
        CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
        CellValue::Empty | CellValue::Bool(_) => return None,
    };
    if !serial.is_finite() || serial == 0.0 {
        return None;
    }
    let days = (serial - EPOCH_OFFSET_DAYS).floor() as i64;
    let secs = days.checked_mul(SECONDS_PER_DAY)?;
    let date = DateTime::from_timestamp(secs, 0)?;
    Some(date.format("%Y-%m-%d").to_string())
}
