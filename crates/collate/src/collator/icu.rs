//! ICU4X collation backend.

use std::cmp::Ordering;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use icu_collator::options::{CollatorOptions as IcuOptions, Strength as IcuStrength};
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::{Locale, locale};
use log::debug;

use super::{CollationBackend, Strength, negotiate_locale};

/// Backend wrapping an ICU4X collator with compiled CLDR data.
///
/// The native collator is owned by this backend and dropped with it. When no
/// collator can be opened, neither for the negotiated locale nor for the
/// root locale, the backend is inert and reports an empty resolved locale.
pub struct IcuBackend {
    collator: Option<CollatorBorrowed<'static>>,
    resolved_locale: String,
}

impl IcuBackend {
    fn try_open(strength: Strength, locale: &Locale) -> Option<CollatorBorrowed<'static>> {
        match Collator::try_new(locale.clone().into(), icu_options(strength)) {
            Ok(collator) => Some(collator),
            Err(err) => {
                debug!("cannot open {strength} collator for '{locale}': {err}");
                None
            }
        }
    }
}

impl CollationBackend for IcuBackend {
    fn open(strength: Strength, requested_locale: Option<&str>) -> Self {
        let negotiated = negotiate_locale(requested_locale);
        if let Some(collator) = Self::try_open(strength, &negotiated) {
            return Self {
                collator: Some(collator),
                resolved_locale: negotiated.to_string(),
            };
        }

        let root = locale!("und");
        match Self::try_open(strength, &root) {
            Some(collator) => Self {
                collator: Some(collator),
                resolved_locale: root.to_string(),
            },
            None => Self {
                collator: None,
                resolved_locale: String::new(),
            },
        }
    }

    fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
        self.collator
            .as_ref()
            .map_or(Ordering::Equal, |collator| collator.compare(lhs, rhs))
    }

    fn resolved_locale(&self) -> &str {
        &self.resolved_locale
    }

    fn is_inert(&self) -> bool {
        self.collator.is_none()
    }
}

impl Debug for IcuBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("IcuBackend")
            .field("resolved_locale", &self.resolved_locale)
            .field("open", &self.collator.is_some())
            .finish()
    }
}

fn icu_options(strength: Strength) -> IcuOptions {
    let mut options = IcuOptions::default();
    options.strength = Some(match strength {
        Strength::Primary => IcuStrength::Primary,
        Strength::Secondary => IcuStrength::Secondary,
        Strength::Tertiary => IcuStrength::Tertiary,
    });
    options
}
