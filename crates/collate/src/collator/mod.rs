//! Locale-aware string comparison.
//!
//! A [`Collator`] is an immutable comparison policy: case sensitivity,
//! diacritic sensitivity and an optional requested locale. The actual
//! ordering is delegated to a [`CollationBackend`] selected at build time
//! through the `icu` feature. The strength mapping and the case
//! compensation pass live in [`strength`] so every backend shares them.

mod backend;
#[cfg(feature = "icu")]
mod icu;
mod locale;
mod noop;
pub mod strength;

use std::cmp::Ordering;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

pub use backend::{CollationBackend, DefaultBackend};
#[cfg(feature = "icu")]
pub use icu::IcuBackend;
pub use locale::{default_locale, negotiate_locale};
pub use noop::NoopBackend;
pub use strength::Strength;

/// Configuration a [`Collator`] is built from.
///
/// # Example
///
/// ```
/// use collate::CollatorOptions;
///
/// let options = CollatorOptions::builder()
///     .case_sensitive(true)
///     .locale("de".to_string())
///     .build();
///
/// assert!(options.case_sensitive);
/// assert!(!options.diacritic_sensitive);
/// assert_eq!(options.locale.as_deref(), Some("de"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Builder, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CollatorOptions {
    /// Distinguish upper and lower case letters.
    #[builder(default)]
    #[serde(default)]
    pub case_sensitive: bool,

    /// Distinguish letters that differ only by accents or other marks.
    #[builder(default)]
    #[serde(default)]
    pub diacritic_sensitive: bool,

    /// Requested BCP-47 locale tag. `None` selects the default locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl CollatorOptions {
    /// The native collation strength these flags map to.
    pub fn strength(&self) -> Strength {
        Strength::for_sensitivity(self.case_sensitive, self.diacritic_sensitive)
    }

    /// Serialize to the style-syntax option mapping.
    pub fn serialize(&self) -> Json {
        let mut map = Map::new();
        map.insert("case-sensitive".to_string(), Json::Bool(self.case_sensitive));
        map.insert(
            "diacritic-sensitive".to_string(),
            Json::Bool(self.diacritic_sensitive),
        );
        if let Some(locale) = &self.locale {
            map.insert("locale".to_string(), Json::String(locale.clone()));
        }
        Json::Object(map)
    }
}

/// An immutable, locale-aware string comparator.
///
/// Two collators are equal when their options are equal and they resolved
/// to the same locale. Clones share the backend handle, which is confined to
/// the thread that created it.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use collate::{Collator, CollatorOptions};
///
/// let collator = Collator::new(CollatorOptions::default());
/// assert_eq!(collator.compare("abc", "abc"), Ordering::Equal);
/// ```
#[derive(Clone)]
pub struct Collator {
    options: CollatorOptions,
    backend: Rc<dyn CollationBackend>,
}

impl Collator {
    /// Build a collator on the backend selected for this build.
    pub fn new(options: CollatorOptions) -> Self {
        Self::with_backend::<DefaultBackend>(options)
    }

    /// Build a collator on an explicit backend.
    pub fn with_backend<B: CollationBackend + 'static>(options: CollatorOptions) -> Self {
        let backend = B::open(options.strength(), options.locale.as_deref());
        Self {
            options,
            backend: Rc::new(backend),
        }
    }

    pub fn options(&self) -> &CollatorOptions {
        &self.options
    }

    pub fn case_sensitive(&self) -> bool {
        self.options.case_sensitive
    }

    pub fn diacritic_sensitive(&self) -> bool {
        self.options.diacritic_sensitive
    }

    /// The locale tag the caller asked for, if any.
    pub fn requested_locale(&self) -> Option<&str> {
        self.options.locale.as_deref()
    }

    /// The locale the backend actually uses. Empty when undeterminable.
    pub fn resolved_locale(&self) -> &str {
        self.backend.resolved_locale()
    }

    /// Three-way comparison of two strings under this collator's policy.
    ///
    /// Inert backends answer `Equal` for every pair; the case compensation
    /// pass is not applied to them.
    pub fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
        let native = self.backend.compare(lhs, rhs);
        if self.backend.is_inert() {
            return native;
        }
        strength::compensate(&self.options, native, lhs, rhs)
    }

    /// Serialize to the style-syntax option mapping.
    pub fn serialize(&self) -> Json {
        self.options.serialize()
    }
}

impl PartialEq for Collator {
    fn eq(&self, other: &Self) -> bool {
        self.options == other.options && self.resolved_locale() == other.resolved_locale()
    }
}

impl Eq for Collator {}

impl Debug for Collator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Collator")
            .field("options", &self.options)
            .field("resolved_locale", &self.resolved_locale())
            .field("backend", &self.backend)
            .finish()
    }
}
