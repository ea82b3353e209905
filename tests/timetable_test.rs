//! Timetable parsing integration tests

use apubot::parser::timetable::{
    format_building_floor, format_record, parse_row, parse_sheet, SUBJECT_ID_HEADER,
};
use apubot::parser::TimetableSheet;
use apubot::utils::error::ParseError;

fn cells(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some(v.to_string())).collect()
}

fn fall_row(subject_id: &str) -> Vec<Option<String>> {
    cells(&[
        "Fall", "1.Mon", "1", "A101", "C-2F", subject_id, "...", "...", "...", "...", "EN",
        "1st Year", "...", "...", "...",
    ])
}

const FALL_LABEL: &str = "Timetable (Fall Semester Students)";

#[test]
fn test_fall_row_produces_expanded_record() {
    let row = parse_row(&fall_row("SUB101"), FALL_LABEL).unwrap().unwrap();
    let record = format_record(&row).unwrap();

    assert_eq!(record.building_floor, "C building 2nd floor");
    assert_eq!(record.day_of_week, "Mon");
    assert_eq!(record.period, "1st Period");
    assert_eq!(record.subject_id, "SUB101");
    assert_eq!(record.language, "EN");
    assert_eq!(record.classroom, "A101");
}

#[test]
fn test_na_and_header_rows_never_become_records() {
    assert_eq!(parse_row(&fall_row("NA"), FALL_LABEL).unwrap(), None);
    assert_eq!(parse_row(&fall_row(SUBJECT_ID_HEADER), FALL_LABEL).unwrap(), None);

    let mut blank = fall_row("SUB101");
    blank[5] = None;
    assert_eq!(parse_row(&blank, FALL_LABEL).unwrap(), None);
}

#[test]
fn test_sheet_with_mixed_rows() {
    let label = "Spring Semester Timetable (For 2017 Curriculum students)";
    let mut header = vec![None; 15];
    header[5] = Some("講義CD/\nSubject CD".to_string());

    let mut lecture = cells(&[
        "Semester",
        "2.Tue",
        "\u{ff13}",
        "F\u{2161}201",
        "F-2",
        "51234",
        "国際関係論",
        "International\nRelations",
        "佐藤花子",
        "SATO Hanako",
        "J/E",
        "2回生",
        "Social Sciences",
        "2",
        "2",
    ]);
    lecture[13] = None;

    let sheet = TimetableSheet {
        name: "2017".to_string(),
        label: label.to_string(),
        rows: vec![vec![None; 15], header, lecture],
    };

    let results = parse_sheet(&sheet);
    assert_eq!(results.len(), 1);
    let (row, record) = &results[0];
    assert_eq!(*row, 2);

    let record = record.as_ref().unwrap();
    assert_eq!(record.day_of_week, "Tue");
    assert_eq!(record.period, "3rd Period");
    assert_eq!(record.classroom, "FII 201");
    assert_eq!(record.building_floor, "F building 2nd floor");
    assert_eq!(record.subject_name_foreign, "InternationalRelations");
    assert_eq!(record.grade, "2nd Year");
    assert_eq!(record.ap_score1, "NA");
    assert_eq!(record.semester, "Spring");
    assert_eq!(record.curriculum, "2017 Curriculum");
}

#[test]
fn test_row_with_wrong_width_is_malformed() {
    let short = cells(&["Fall", "1.Mon"]);
    assert!(matches!(
        parse_row(&short, FALL_LABEL),
        Err(ParseError::MalformedRow { .. })
    ));

    assert!(matches!(
        format_record("Fall|1.Mon|1"),
        Err(ParseError::MalformedRow { .. })
    ));
}

#[test]
fn test_unscheduled_building() {
    assert_eq!(format_building_floor("T.B.A.").unwrap(), "T.B.A.");
}
