//! Common test utilities

use std::io::{Cursor, Write};
use std::path::PathBuf;

use apubot::config::Config;
use apubot::crawler::{AcademicCrawler, SiteFetcher};
use apubot::LectureRecord;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Read an HTML fixture from `tests/fixtures/html`
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/html")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("missing fixture {}: {e}", path.display()))
}

/// Crawler pointed at a mock server, without retries
#[allow(dead_code)]
pub fn crawler_for(base_url: &str) -> AcademicCrawler {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    let fetcher = SiteFetcher::with_base_url(base_url, 0).unwrap();
    AcademicCrawler::with_fetcher(fetcher, config)
}

/// Create a lecture with the searchable fields set
#[allow(dead_code)]
pub fn create_test_lecture(subject_id: &str, name: &str, instructor: &str) -> LectureRecord {
    LectureRecord {
        term: "Semester".to_string(),
        day_of_week: "Mon".to_string(),
        period: "1st Period".to_string(),
        subject_id: subject_id.to_string(),
        subject_name_foreign: name.to_string(),
        instructor_foreign: instructor.to_string(),
        semester: "Spring".to_string(),
        curriculum: "2017 Curriculum".to_string(),
        ..Default::default()
    }
}

/// Label of the sample timetable sheets
#[allow(dead_code)]
pub const SPRING_LABEL: &str = "Spring Semester Timetable (For 2017 Curriculum students)";

/// Fifteen cells of a lecture row as they appear in a timetable sheet
#[allow(dead_code)]
pub fn lecture_cells(subject_id: &str, building_floor: &str) -> Vec<String> {
    [
        "Semester",
        "1.Mon",
        "1",
        "A101",
        building_floor,
        subject_id,
        "微分積分",
        "Calculus",
        "山田太郎",
        "YAMADA Taro",
        "E",
        "1回生",
        "Mathematics",
        "2",
        "",
    ]
    .iter()
    .map(|cell| cell.to_string())
    .collect()
}

/// Rows of a timetable sheet: title, label, column header, then lectures
#[allow(dead_code)]
pub fn timetable_rows(label: &str, lectures: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut header = vec![String::new(); 15];
    header[5] = "講義CD/Subject CD".to_string();

    let mut rows = vec![
        vec!["2018 Timetable".to_string()],
        vec![label.to_string()],
        header,
    ];
    rows.extend(lectures);
    rows
}

/// Build an xlsx workbook in memory; empty strings leave the cell out
#[allow(dead_code)]
pub fn build_workbook(sheets: &[(&str, Vec<Vec<String>>)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    let mut content_types = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    );
    let mut workbook = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>"#,
    );
    let mut relationships = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );

    for (index, (name, rows)) in sheets.iter().enumerate() {
        let number = index + 1;
        content_types.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{number}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
        workbook.push_str(&format!(
            r#"<sheet name="{}" sheetId="{number}" r:id="rId{number}"/>"#,
            xml_escape(name)
        ));
        relationships.push_str(&format!(
            r#"<Relationship Id="rId{number}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{number}.xml"/>"#
        ));

        zip.start_file(format!("xl/worksheets/sheet{number}.xml"), options)
            .unwrap();
        zip.write_all(worksheet_xml(rows).as_bytes()).unwrap();
    }

    content_types.push_str("</Types>");
    workbook.push_str("</sheets></workbook>");
    relationships.push_str("</Relationships>");

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(content_types.as_bytes()).unwrap();

    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#,
    )
    .unwrap();

    zip.start_file("xl/workbook.xml", options).unwrap();
    zip.write_all(workbook.as_bytes()).unwrap();

    zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
    zip.write_all(relationships.as_bytes()).unwrap();

    zip.finish().unwrap().into_inner()
}

fn worksheet_xml(rows: &[Vec<String>]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );

    for (row_index, row) in rows.iter().enumerate() {
        let number = row_index + 1;
        xml.push_str(&format!(r#"<row r="{number}">"#));
        for (column, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let letter = char::from(b'A' + column as u8);
            xml.push_str(&format!(
                r#"<c r="{letter}{number}" t="inlineStr"><is><t>{}</t></is></c>"#,
                xml_escape(value)
            ));
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
