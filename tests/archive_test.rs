use std::path::PathBuf;

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use docview::{columns, Criteria, LoadOptions, Session, SortOrder};

const SHEET_NAME: &str = "EU Doc Archive";

/// Writes a small archive workbook: a title row, a header row, and three
/// data rows spanning 34 columns. Returns the temp dir (keep it alive)
/// and the workbook path.
fn write_archive_workbook() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("archive.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).unwrap();

    sheet.write_string(0, 0, "EU Doc Archive export").unwrap();

    for col in 0..34u16 {
        let header = match col {
            0 => "Country".to_string(),
            8 => "Summary".to_string(),
            16 => "Received".to_string(),
            17 => "Completed".to_string(),
            26 => "Owner".to_string(),
            _ => format!("H{col}"),
        };
        sheet.write_string(1, col, header).unwrap();
    }

    // (row, country, summary text, received serial, completed serial, owner)
    let rows: [(u32, &str, &str, f64, f64, &str); 3] = [
        (2, "Italy", "Permit review for offshore site", 44920.0, 44941.0, "Alice"),
        (3, "France", "Grid connection dossier", 44800.0, 44927.0, "Bob"),
        (4, "Austria", "Environmental audit", 44700.0, 44800.0, "Alice"),
    ];
    for (row, country, summary, received, completed, owner) in rows {
        sheet.write_string(row, 0, country).unwrap();
        sheet.write_string(row, 1, format!("Doc {row}")).unwrap();
        sheet.write_string(row, 8, summary).unwrap();
        sheet.write_number(row, 16, received).unwrap();
        sheet.write_number(row, 17, completed).unwrap();
        sheet.write_string(row, 26, owner).unwrap();
        sheet.write_string(row, 33, "archived").unwrap();
    }

    workbook.save(&path).unwrap();
    (dir, path)
}

#[test]
fn test_end_to_end_browse_flow() {
    let (_dir, path) = write_archive_workbook();
    let session = Session::open(&path, &LoadOptions::new().with_sheet(SHEET_NAME)).unwrap();

    // Title and header rows are metadata, not data.
    assert_eq!(session.row_count(), 3);
    assert_eq!(session.dataset().headers()[0], "Country");
    assert_eq!(session.dataset().headers()[26], "Owner");

    // Vocabularies for the two filter dropdowns.
    assert_eq!(
        session.distinct_values(columns::COUNTRY_COL),
        vec!["Austria", "France", "Italy"]
    );
    assert_eq!(
        session.distinct_values(columns::OWNER_COL),
        vec!["Alice", "Bob"]
    );

    // Case-insensitive categorical filter.
    let result = session.query(&Criteria::new().with_country("italy"));
    assert_eq!(result.len(), 1);
    let row = result[0];
    assert_eq!(row.display(0), "Italy");

    // Detail form: owner and completion date land in the right section
    // at their fixed slots, the summary text in a collapsible left field.
    let layout = session.map_row(row);
    assert_eq!(layout.right[3].label, "Owner");
    assert_eq!(layout.right[3].value, "Alice");
    assert_eq!(layout.right[8].label, "Completed");
    assert_eq!(layout.right[8].value, "2023-01-15");
    let summary = layout
        .left
        .iter()
        .find(|field| field.label == "Summary")
        .unwrap();
    assert!(summary.collapsible);
    assert_eq!(summary.value, "Permit review for offshore site");

    // List-view projection renders both date columns as calendar dates.
    let summary_row = session.summary_row(row);
    assert_eq!(summary_row.labels[0], "Country");
    assert_eq!(summary_row.cells[0], "Italy");
    assert_eq!(summary_row.cells[5], "2022-12-25");
    assert_eq!(summary_row.cells[6], "2023-01-15");
    assert_eq!(summary_row.cells[7], "Alice");
}

#[test]
fn test_search_and_sort_over_loaded_data() {
    let (_dir, path) = write_archive_workbook();
    let session = Session::open(&path, &LoadOptions::new()).unwrap();

    let hits = session.query(&Criteria::new().with_search("dossier"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].display(0), "France");

    let asc = session.query(&Criteria::new().with_sort(SortOrder::Ascending));
    let countries: Vec<String> = asc.iter().map(|r| r.display(0)).collect();
    assert_eq!(countries, vec!["Austria", "France", "Italy"]);

    let desc = session.query(&Criteria::new().with_sort(SortOrder::Descending));
    let countries: Vec<String> = desc.iter().map(|r| r.display(0)).collect();
    assert_eq!(countries, vec!["Italy", "France", "Austria"]);

    // Search that matches nothing is an empty result, not an error.
    assert!(session
        .query(&Criteria::new().with_search("no such text"))
        .is_empty());
}

#[test]
fn test_sheet_selection() {
    let (_dir, path) = write_archive_workbook();

    // By name, by 0-based index digits, and by default (first sheet).
    for options in [
        LoadOptions::new().with_sheet(SHEET_NAME),
        LoadOptions::new().with_sheet("0"),
        LoadOptions::new(),
    ] {
        let session = Session::open(&path, &options).unwrap();
        assert_eq!(session.row_count(), 3);
    }

    assert!(Session::open(&path, &LoadOptions::new().with_sheet("Wrong Sheet")).is_err());
    assert!(Session::open(&path, &LoadOptions::new().with_sheet("7")).is_err());
}

#[test]
fn test_criteria_round_trips_from_shell_json() {
    let criteria: Criteria =
        serde_json::from_str(r#"{"country":"italy","sort":"asc"}"#).unwrap();
    assert_eq!(criteria.country.as_deref(), Some("italy"));
    assert_eq!(criteria.search, None);
    assert_eq!(criteria.sort, SortOrder::Ascending);

    let json = serde_json::to_string(&criteria).unwrap();
    assert!(json.contains(r#""sort":"asc""#));
    let back: Criteria = serde_json::from_str(&json).unwrap();
    assert_eq!(back, criteria);
}

#[test]
fn test_form_layout_serializes_for_the_shell() {
    let (_dir, path) = write_archive_workbook();
    let session = Session::open(&path, &LoadOptions::new()).unwrap();
    let rows = session.query(&Criteria::new());
    let layout = session.map_row(rows[0]);

    let json = serde_json::to_value(&layout).unwrap();
    assert_eq!(json["right"][3]["value"], "Alice");
    assert_eq!(json["right"][3]["collapsible"], false);
}
