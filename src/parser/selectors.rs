//! CSS selectors for the academic office pages

use lazy_static::lazy_static;
use scraper::Selector;

use crate::utils::error::ParseError;

// Helper macro to parse selectors safely at compile time
macro_rules! parse_selector {
    ($s:expr) => {
        Selector::parse($s).expect(concat!("Invalid CSS selector: ", $s))
    };
}

lazy_static! {
    pub static ref PAGE_TITLE: Selector = parse_selector!("title");

    /// Academic calendar table
    pub static ref CALENDAR_TABLE: Selector = parse_selector!("table.fcktable");

    /// Body of a timetable download page
    pub static ref ENTRY: Selector = parse_selector!("div.entry");
}

/// Class shared by every sidebar menu heading
pub const MENU_TITLE_CLASS: &str = "menu_title";

/// Title the site serves on its HTTP-200 not-found page
pub const NOT_FOUND_TITLE: &str = "404ページ";

/// Selector for a sidebar menu heading, e.g. `01` for the academic calendar
///
/// # Errors
///
/// Returns `ParseError::InvalidSelector` when `menu` is not a valid class suffix.
pub fn menu_title(menu: &str) -> Result<Selector, ParseError> {
    let css = format!("div.{MENU_TITLE_CLASS}.curriculum{menu}");
    Selector::parse(&css).map_err(|e| ParseError::InvalidSelector(format!("{css}: {e}")))
}
