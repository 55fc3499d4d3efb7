//! Export pipeline tests — range validation, record serialization, and the
//! shape of the standalone HTML artifact.

mod common;

use common::*;
use podium::charts::ChartKind;
use podium::export::{DATA_MARKER, download_filename, export_document, export_records};
use podium::models::deck::Deck;

#[test]
fn range_validation() {
    let deck = deck_of(&["a", "b", "c"]);
    assert!(export_records(&deck, 0, 2).is_ok());
    assert!(export_records(&deck, 1, 1).is_ok());

    let err = export_records(&deck, 2, 1).unwrap_err();
    assert_eq!(err.to_string(), "Invalid slide range selected.");
    assert!(export_records(&deck, 0, 3).is_err());
    assert!(export_records(&deck, 3, 3).is_err());
}

#[test]
fn records_cover_the_inclusive_range() {
    let deck = deck_of(&["a", "b", "c", "d", "e"]);
    let records = export_records(&deck, 1, 3).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "b");
    assert_eq!(records[2].title, "d");
}

#[test]
fn chart_exports_by_symbolic_name() {
    let deck = Deck::new(vec![chart_slide("growth", ChartKind::PlatformGrowth)]).unwrap();
    let records = export_records(&deck, 0, 0).unwrap();
    assert_eq!(records[0].chart_name.as_deref(), Some("PlatformGrowthChart"));
}

#[test]
fn document_embeds_data_behind_the_marker() {
    let deck = Deck::new(vec![
        styled_slide("first"),
        chart_slide("second", ChartKind::TimeSpent),
    ])
    .unwrap();
    let doc = export_document(&deck, 0, 1).unwrap();

    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.trim_end().ends_with("</html>"));
    assert!(doc.contains(DATA_MARKER));
    assert!(doc.contains("\"chartName\": \"TimeSpentChart\""));
    assert!(doc.contains("\"titleStyle\""));
    // chart renderers and viewer travel with the file
    assert!(doc.contains("global.Charts"));
    assert!(doc.contains("PRESENTATION_DATA"));
}

#[test]
fn document_is_self_terminating_for_reimport() {
    let deck = deck_of(&["a"]);
    let doc = export_document(&deck, 0, 0).unwrap();
    let start = doc.find(DATA_MARKER).expect("marker present") + DATA_MARKER.len();
    assert!(doc[start..].contains("];"), "data literal must close with ];");
}

#[test]
fn filename_is_dated() {
    let name = download_filename();
    let re = regex::Regex::new(r"^presentation-\d{4}-\d{2}-\d{2}\.html$").unwrap();
    assert!(re.is_match(&name), "unexpected filename: {name}");
}
