//! Cell text normalization for scraped table and spreadsheet content
//!
//! The academic office pages render their calendar with hand-edited tables,
//! so a cell's inner text carries layout artifacts: padding runs, entity
//! placeholders for blank cells and a back-up examination footnote. This
//! module turns one cell's raw text into its canonical form.

/// Sentinel for a cell rendered as a bare non-breaking space
pub const EMPTY_SENTINEL: &str = "Empty";

/// Text the calendar uses a down-arrow glyph for
pub const NEW_YEARS_DAY: &str = "New Year's Day";

/// Footnote appended to examination rows after a line break
pub const BACKUP_EXAM_ANNOTATION: &str = "\n(Back-up Examination)";

/// Entity artifacts and their replacements.
///
/// Both the literal entity and its decoded character are listed because the
/// HTML layer may or may not have decoded the entity already.
const ENTITY_ARTIFACTS: &[(&str, &str)] = &[
    ("&nbsp;", EMPTY_SENTINEL),
    ("\u{a0}", EMPTY_SENTINEL),
    ("&darr;", NEW_YEARS_DAY),
    ("\u{2193}", NEW_YEARS_DAY),
    ("&rsquo;", "'"),
    ("\u{2019}", "'"),
];

/// Normalize a single scraped cell
///
/// Steps, in order:
/// 1. Trim surrounding whitespace (a non-breaking space is content, not padding)
/// 2. Remove every two-space run
/// 3. Replace entity artifacts with their sentinel text
/// 4. Strip trailing `(Back-up Examination)` footnotes
///
/// The function is idempotent.
///
/// # Examples
///
/// ```
/// use apubot::parser::sanitize::normalize_cell;
///
/// assert_eq!(normalize_cell("  \u{a0} "), "Empty");
/// assert_eq!(normalize_cell("Final Exams\n(Back-up Examination)"), "Final Exams");
/// ```
pub fn normalize_cell(raw: &str) -> String {
    let text = trim_cell(raw);
    let text = remove_double_spaces(text);
    let text = replace_entity_artifacts(&text);
    let text = strip_backup_annotation(&text);
    trim_cell(text).to_string()
}

/// Trim whitespace other than U+00A0 from both ends
pub fn trim_cell(text: &str) -> &str {
    text.trim_matches(is_padding)
}

fn is_padding(c: char) -> bool {
    c.is_whitespace() && c != '\u{a0}'
}

/// Remove literal two-space runs left behind by the source markup
///
/// This is not whitespace collapsing: a run of four spaces disappears
/// entirely and a run of three leaves one.
///
/// # Examples
///
/// ```
/// use apubot::parser::sanitize::remove_double_spaces;
///
/// assert_eq!(remove_double_spaces("Spring  Semester"), "SpringSemester");
/// assert_eq!(remove_double_spaces("a   b"), "a b");
/// ```
pub fn remove_double_spaces(text: &str) -> String {
    text.replace("  ", "")
}

/// Replace entity artifacts that survived HTML parsing
///
/// # Examples
///
/// ```
/// use apubot::parser::sanitize::replace_entity_artifacts;
///
/// assert_eq!(replace_entity_artifacts("&nbsp;"), "Empty");
/// assert_eq!(replace_entity_artifacts("Founders\u{2019} Day"), "Founders' Day");
/// ```
pub fn replace_entity_artifacts(text: &str) -> String {
    ENTITY_ARTIFACTS
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Strip trailing back-up examination footnotes
pub fn strip_backup_annotation(text: &str) -> &str {
    let mut rest = text;
    while let Some(stripped) = rest.strip_suffix(BACKUP_EXAM_ANNOTATION) {
        rest = stripped.trim_end_matches(is_padding);
    }
    rest
}

/// Remove line breaks from a spreadsheet cell value
pub fn strip_line_breaks(text: &str) -> String {
    text.replace('\n', "")
}
