//! Academic office page extraction
//!
//! Pulls menu links, calendar table cells and spreadsheet links out of the
//! site's HTML. Cell text is returned raw; normalization happens in the row
//! parsers.

use scraper::{ElementRef, Html};

use crate::parser::selectors::{
    menu_title, CALENDAR_TABLE, ENTRY, MENU_TITLE_CLASS, NOT_FOUND_TITLE, PAGE_TITLE,
};
use crate::utils::absolute_url;
use crate::utils::error::ParseError;

/// Links listed under a sidebar menu heading, made absolute against `base`
///
/// # Errors
///
/// Returns `ParseError::NotFound` when the menu heading is missing.
pub fn extract_menu_links(html: &str, menu: &str, base: &str) -> Result<Vec<String>, ParseError> {
    let selector = menu_title(menu)?;
    let document = Html::parse_document(html);

    let heading = document
        .select(&selector)
        .next()
        .ok_or_else(|| ParseError::NotFound(format!("menu {menu}")))?;

    // lists up to the next menu heading belong to this menu
    let hrefs = heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|sibling| !is_menu_heading(sibling))
        .filter(|sibling| sibling.value().name() == "ul")
        .flat_map(link_hrefs);

    resolve_all(hrefs, base)
}

/// Raw inner text of every cell of the calendar table, row by row
///
/// # Errors
///
/// Returns `ParseError::SiteErrorPage` for the site's not-found page and
/// `ParseError::NotFound` when the page has no calendar table.
pub fn extract_calendar_rows(html: &str) -> Result<Vec<Vec<String>>, ParseError> {
    let document = Html::parse_document(html);
    check_error_page(&document)?;

    let table = document
        .select(&CALENDAR_TABLE)
        .next()
        .ok_or_else(|| ParseError::NotFound("calendar table".to_string()))?;

    let rows = child_elements(table, "tbody")
        .flat_map(|body| child_elements(body, "tr"))
        .map(|row| {
            child_elements(row, "td")
                .map(|cell| cell.text().collect::<String>())
                .collect()
        })
        .collect();

    Ok(rows)
}

/// Spreadsheet links of a timetable download page, made absolute against `base`
///
/// # Errors
///
/// Returns `ParseError::SiteErrorPage` for the site's not-found page and
/// `ParseError::NotFound` when the page has no entry body.
pub fn extract_timetable_links(html: &str, base: &str) -> Result<Vec<String>, ParseError> {
    let document = Html::parse_document(html);
    check_error_page(&document)?;

    let entry = document
        .select(&ENTRY)
        .next()
        .ok_or_else(|| ParseError::NotFound("timetable entry".to_string()))?;

    let hrefs = child_elements(entry, "ul").flat_map(link_hrefs);

    resolve_all(hrefs, base)
}

fn check_error_page(document: &Html) -> Result<(), ParseError> {
    let title = document
        .select(&PAGE_TITLE)
        .next()
        .map(|node| node.text().collect::<String>());

    match title {
        Some(title) if title.trim() == NOT_FOUND_TITLE => Err(ParseError::SiteErrorPage { title }),
        _ => Ok(()),
    }
}

fn is_menu_heading(element: &ElementRef<'_>) -> bool {
    element.value().name() == "div"
        && element
            .value()
            .classes()
            .any(|class| class == MENU_TITLE_CLASS)
}

/// `href` of every `li > a` directly under a list
fn link_hrefs<'a>(list: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    child_elements(list, "li")
        .flat_map(|item| child_elements(item, "a"))
        .filter_map(|anchor| anchor.value().attr("href"))
}

fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == name)
}

fn resolve_all<'a>(
    hrefs: impl Iterator<Item = &'a str>,
    base: &str,
) -> Result<Vec<String>, ParseError> {
    hrefs
        .map(|href| {
            absolute_url(base, href).map_err(|e| ParseError::malformed("href", e.to_string()))
        })
        .collect()
}
