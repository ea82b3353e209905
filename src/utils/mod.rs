//! Common utilities and helper functions
//!
//! This module provides shared utilities used across the application.

pub mod error;

use url::Url;

use crate::utils::error::FetchError;

/// Render a number as an English ordinal (`"1"` -> `"1st"`).
///
/// Only `1`, `2` and `3` get their own suffix; every other input, including
/// `11`-`13` and non-numeric text, gets `th` appended verbatim.
///
/// # Examples
///
/// ```
/// use apubot::utils::ordinal;
///
/// assert_eq!(ordinal("2"), "2nd");
/// assert_eq!(ordinal("11"), "11th");
/// ```
pub fn ordinal(n: &str) -> String {
    match n {
        "1" => String::from("1st"),
        "2" => String::from("2nd"),
        "3" => String::from("3rd"),
        _ => format!("{n}th"),
    }
}

/// Resolve `href` against `base`, leaving absolute URLs untouched
pub fn absolute_url(base: &str, href: &str) -> Result<String, FetchError> {
    let base = Url::parse(base).map_err(|e| FetchError::InvalidUrl(format!("{base}: {e}")))?;
    base.join(href.trim())
        .map(String::from)
        .map_err(|e| FetchError::InvalidUrl(format!("{href}: {e}")))
}
