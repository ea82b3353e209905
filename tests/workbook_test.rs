//! Timetable workbook reading tests against real xlsx files

mod common;

use apubot::parser::timetable::parse_sheet;
use apubot::parser::read_workbook;
use common::{build_workbook, lecture_cells, timetable_rows, SPRING_LABEL};

#[test]
fn test_workbook_rows_become_lectures() {
    let bytes = build_workbook(&[(
        "2017",
        timetable_rows(SPRING_LABEL, vec![lecture_cells("11010", "C-2F")]),
    )]);

    let sheets = read_workbook(&bytes).unwrap();
    assert_eq!(sheets.len(), 1);

    let sheet = &sheets[0];
    assert_eq!(sheet.name, "2017");
    assert_eq!(sheet.label, SPRING_LABEL);
    assert_eq!(sheet.rows.len(), 4);
    assert!(sheet.rows.iter().all(|row| row.len() == 15));

    let results = parse_sheet(sheet);
    assert_eq!(results.len(), 1);
    let (row, lecture) = &results[0];
    assert_eq!(*row, 3);

    let lecture = lecture.as_ref().unwrap();
    assert_eq!(lecture.day_of_week, "Mon");
    assert_eq!(lecture.period, "1st Period");
    assert_eq!(lecture.building_floor, "C building 2nd floor");
    assert_eq!(lecture.subject_id, "11010");
    assert_eq!(lecture.subject_name_local, "微分積分");
    assert_eq!(lecture.grade, "1st Year");
    assert_eq!(lecture.ap_score1, "2");
    assert_eq!(lecture.ap_score2, "NA");
    assert_eq!(lecture.semester, "Spring");
    assert_eq!(lecture.curriculum, "2017 Curriculum");
}

#[test]
fn test_sheets_without_label_are_skipped() {
    let unlabeled = vec![vec!["Notes".to_string()]];
    let bytes = build_workbook(&[
        ("Notes", unlabeled),
        (
            "2011",
            timetable_rows(
                "Fall Semester Timetable (For 2011 Curriculum students)",
                vec![lecture_cells("22020", "A-1")],
            ),
        ),
    ]);

    let sheets = read_workbook(&bytes).unwrap();
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].name, "2011");

    let lectures: Vec<_> = parse_sheet(&sheets[0])
        .into_iter()
        .map(|(_, result)| result.unwrap())
        .collect();
    assert_eq!(lectures.len(), 1);
    assert_eq!(lectures[0].semester, "Fall");
    assert_eq!(lectures[0].curriculum, "2011 Curriculum");
    assert_eq!(lectures[0].building_floor, "A building 1st floor");
}
