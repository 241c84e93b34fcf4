//! Workbook ingestion: calamine decode, sheet selection, grid slicing.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::dataset::{CellValue, Dataset};

/// Load-time options, built up with `with_*` calls.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Sheet selection: a name, or a 0-based index given as digits.
    /// `None` loads the first sheet.
    pub sheet: Option<String>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, sheet: &str) -> Self {
        self.sheet = Some(sheet.to_string());
        self
    }
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        // Date cells keep their day serial; rendering decides what is a date.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("#ERROR: {e:?}")),
    }
}

/// Opens the workbook at `path` (xls, xlsx, xlsm, xlsb) and ingests the
/// selected sheet into a [`Dataset`].
///
/// Ingestion is all-or-nothing: an unreachable file, an undecodable
/// workbook, or a missing sheet returns an error and no dataset exists.
pub fn load_workbook(path: &Path, options: &LoadOptions) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path).map_err(|e| eyre!("Workbook: {}", e))?;
    let sheet_names = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err(eyre!("Workbook has no worksheets"));
    }
    let range = if let Some(selector) = options.sheet.as_deref() {
        if let Ok(idx) = selector.parse::<usize>() {
            workbook
                .worksheet_range_at(idx)
                .ok_or_else(|| eyre!("Workbook has no sheet at index {}", idx))?
                .map_err(|e| eyre!("Sheet {}: {}", idx, e))?
        } else {
            workbook
                .worksheet_range(selector)
                .map_err(|e| eyre!("Sheet {:?}: {}", selector, e))?
        }
    } else {
        workbook
            .worksheet_range_at(0)
            .ok_or_else(|| eyre!("Workbook has no first sheet"))?
            .map_err(|e| eyre!("Sheet 0: {}", e))?
    };

    let grid: Vec<Vec<CellValue>> = range
        .rows()
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();
    tracing::info!(
        path = %path.display(),
        grid_rows = grid.len(),
        "workbook decoded"
    );
    Ok(Dataset::from_grid(grid))
}
