//! Page extraction tests against saved fixtures

mod common;

use apubot::parser::{extract_calendar_rows, extract_menu_links, extract_timetable_links};
use apubot::utils::error::ParseError;
use common::load_fixture;

const BASE: &str = "http://en.apu.ac.jp";

#[test]
fn test_main_page_menus() {
    let html = load_fixture("main_page.html");

    assert_eq!(
        extract_menu_links(&html, "01", BASE).unwrap(),
        vec![
            "http://en.apu.ac.jp/academic/page/calendar2018.html",
            "http://en.apu.ac.jp/academic/page/calendar2019.html",
        ]
    );
    assert_eq!(
        extract_menu_links(&html, "03", BASE).unwrap(),
        vec!["http://en.apu.ac.jp/academic/page/timetable.html"]
    );
    assert!(matches!(
        extract_menu_links(&html, "07", BASE),
        Err(ParseError::NotFound(_))
    ));
}

#[test]
fn test_calendar_fixture_rows() {
    let rows = extract_calendar_rows(&load_fixture("calendar2018.html")).unwrap();

    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0], vec!["2018"]);
    assert_eq!(rows[1], vec!["Date", "Day", "Event", "Remarks"]);
    assert_eq!(rows[2][2], "\u{2193}");
    assert_eq!(rows[4][3], "Founder\u{2019}s Day");
    assert!(rows[5][2].ends_with("\n(Back-up Examination)"));
}

#[test]
fn test_timetable_fixture_links() {
    let links = extract_timetable_links(&load_fixture("timetable.html"), BASE).unwrap();

    assert_eq!(
        links,
        vec![
            "http://en.apu.ac.jp/academic/file/timetable_2017.xlsx",
            "http://en.apu.ac.jp/academic/file/timetable_2011.xlsx",
        ]
    );
}

#[test]
fn test_error_page_on_timetable_link() {
    assert!(matches!(
        extract_timetable_links(&load_fixture("not_found.html"), BASE),
        Err(ParseError::SiteErrorPage { .. })
    ));
}
