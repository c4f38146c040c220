//! Strength mapping and the case compensation pass.
//!
//! Native engines order their strengths PRIMARY < SECONDARY < TERTIARY,
//! where each level adds one class of significant difference: base letters,
//! then diacritics, then case. Case-sensitive but diacritic-insensitive
//! comparison has no native level. It is synthesized by comparing at
//! PRIMARY and, on a tie, running a case-only pass over the strings with
//! their combining marks removed.
//!
//! # Known limitation
//!
//! The case pass folds with a locale-agnostic case fold and only strips
//! diacritics that decompose into combining marks. Letters such as `ø` or
//! `ł` keep their difference, so for `case_sensitive && !diacritic_sensitive`
//! a diacritic difference can surface after an equal PRIMARY result.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};

use icu_casemap::CaseMapper;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::CollatorOptions;

/// Native collation strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    /// Base letters only.
    Primary,
    /// Base letters and diacritics.
    Secondary,
    /// Base letters, diacritics and case.
    Tertiary,
}

impl Strength {
    /// Map the requested sensitivity flags to a native strength.
    ///
    /// | diacritic | case  | strength  |
    /// |-----------|-------|-----------|
    /// | false     | any   | Primary   |
    /// | true      | false | Secondary |
    /// | true      | true  | Tertiary  |
    pub fn for_sensitivity(case_sensitive: bool, diacritic_sensitive: bool) -> Self {
        match (diacritic_sensitive, case_sensitive) {
            (false, _) => Strength::Primary,
            (true, false) => Strength::Secondary,
            (true, true) => Strength::Tertiary,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Primary => "primary",
            Strength::Secondary => "secondary",
            Strength::Tertiary => "tertiary",
        }
    }
}

impl Display for Strength {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Whether the options ask for the combination no native strength expresses.
pub fn needs_case_pass(options: &CollatorOptions) -> bool {
    options.case_sensitive && !options.diacritic_sensitive
}

/// Combine a native result with the case pass when the options require it.
///
/// A non-equal native result is a base-letter difference and always wins.
pub fn compensate(options: &CollatorOptions, native: Ordering, lhs: &str, rhs: &str) -> Ordering {
    if native != Ordering::Equal || !needs_case_pass(options) {
        return native;
    }
    case_only_compare(lhs, rhs)
}

/// Case-only ordering of two strings that are equal at PRIMARY strength.
///
/// Combining marks are dropped first, then the strings are ordered by their
/// case folds and finally codepoint-wise, which is where a pure case
/// difference shows up.
pub fn case_only_compare(lhs: &str, rhs: &str) -> Ordering {
    let lhs = strip_marks(lhs);
    let rhs = strip_marks(rhs);
    if lhs == rhs {
        return Ordering::Equal;
    }
    let lhs_folded = CaseMapper::new().fold_string(&lhs);
    let rhs_folded = CaseMapper::new().fold_string(&rhs);
    lhs_folded
        .chars()
        .cmp(rhs_folded.chars())
        .then_with(|| lhs.chars().cmp(rhs.chars()))
}

/// Canonically decompose and drop combining marks, keeping case.
fn strip_marks(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_table() {
        assert_eq!(Strength::for_sensitivity(false, false), Strength::Primary);
        assert_eq!(Strength::for_sensitivity(true, false), Strength::Primary);
        assert_eq!(Strength::for_sensitivity(false, true), Strength::Secondary);
        assert_eq!(Strength::for_sensitivity(true, true), Strength::Tertiary);
    }

    #[test]
    fn strengths_are_ordered() {
        assert!(Strength::Primary < Strength::Secondary);
        assert!(Strength::Secondary < Strength::Tertiary);
    }

    #[test]
    fn strip_marks_keeps_case() {
        assert_eq!(strip_marks("Café"), "Cafe");
        assert_eq!(strip_marks("ÀÉÎ"), "AEI");
        assert_eq!(strip_marks("plain"), "plain");
    }

    #[test]
    fn strip_marks_leaves_undecomposable_letters() {
        assert_eq!(strip_marks("ø"), "ø");
        assert_eq!(strip_marks("ł"), "ł");
    }

    #[test]
    fn case_pass_surfaces_case() {
        assert_ne!(case_only_compare("a", "A"), Ordering::Equal);
        assert_eq!(
            case_only_compare("a", "A"),
            case_only_compare("A", "a").reverse()
        );
    }

    #[test]
    fn case_pass_ignores_combining_diacritics() {
        assert_eq!(case_only_compare("a", "á"), Ordering::Equal);
        assert_eq!(case_only_compare("resume", "résumé"), Ordering::Equal);
    }

    #[test]
    fn case_pass_leaks_undecomposable_diacritics() {
        assert_ne!(case_only_compare("o", "ø"), Ordering::Equal);
    }

    #[test]
    fn compensate_trusts_native_difference() {
        let options = CollatorOptions::builder().case_sensitive(true).build();
        assert_eq!(
            compensate(&options, Ordering::Less, "b", "A"),
            Ordering::Less
        );
    }

    #[test]
    fn compensate_only_for_case_without_diacritics() {
        let insensitive = CollatorOptions::default();
        assert_eq!(
            compensate(&insensitive, Ordering::Equal, "a", "A"),
            Ordering::Equal
        );

        let tertiary = CollatorOptions::builder()
            .case_sensitive(true)
            .diacritic_sensitive(true)
            .build();
        assert_eq!(
            compensate(&tertiary, Ordering::Equal, "a", "A"),
            Ordering::Equal
        );

        let case_only = CollatorOptions::builder().case_sensitive(true).build();
        assert_ne!(
            compensate(&case_only, Ordering::Equal, "a", "A"),
            Ordering::Equal
        );
    }
}
