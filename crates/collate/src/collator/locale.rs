//! Locale negotiation for collation backends.
//!
//! A requested tag is trimmed, POSIX `_` separators are rewritten to `-`,
//! and the result is parsed as a BCP-47 locale. Absent, empty or
//! unparsable tags fall back to the default locale. Negotiation never fails.

use std::env;

use icu_locale_core::{Locale, locale};
use log::{debug, trace};

/// Environment variables consulted for the default locale, in POSIX order.
const LOCALE_VARIABLES: &[&str] = &["LC_ALL", "LC_COLLATE", "LANG"];

/// Resolve a requested tag to a concrete locale.
///
/// # Examples
///
/// ```
/// use collate::negotiate_locale;
///
/// assert_eq!(negotiate_locale(Some("EN_us")).to_string(), "en-US");
/// assert_eq!(negotiate_locale(Some("de-DE")).to_string(), "de-DE");
/// ```
pub fn negotiate_locale(requested: Option<&str>) -> Locale {
    let negotiated = requested
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .and_then(parse_tag)
        .unwrap_or_else(default_locale);
    trace!("negotiated locale {negotiated} for request {requested:?}");
    negotiated
}

/// The process default locale.
///
/// Read from `LC_ALL`, `LC_COLLATE` and `LANG` in that order. Encoding and
/// modifier suffixes are removed and the `C`/`POSIX` locales are skipped.
/// Falls back to the root locale `und`.
pub fn default_locale() -> Locale {
    LOCALE_VARIABLES
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find_map(|value| posix_locale(&value))
        .unwrap_or(locale!("und"))
}

/// Parse a BCP-47 tag, accepting `_` as a subtag separator.
fn parse_tag(tag: &str) -> Option<Locale> {
    match tag.replace('_', "-").parse::<Locale>() {
        Ok(locale) => Some(locale),
        Err(err) => {
            debug!("cannot parse locale tag '{tag}' ({err:?}), using default locale");
            None
        }
    }
}

/// Convert a POSIX locale value such as `de_DE.UTF-8@euro` to a locale.
fn posix_locale(value: &str) -> Option<Locale> {
    let name = value.split(['.', '@']).next().unwrap_or_default().trim();
    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }
    parse_tag(name)
}
