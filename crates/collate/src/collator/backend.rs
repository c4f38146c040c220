use std::cmp::Ordering;
use std::fmt::Debug;

use super::Strength;

/// A native collation engine behind a [`Collator`](super::Collator).
///
/// Implementations only provide the engine call surface: opening at a
/// native strength for a requested locale, comparing, and reporting the
/// locale they settled on. Opening never fails; an implementation that
/// cannot reach its engine degrades to an inert comparator instead.
pub trait CollationBackend: Debug {
    /// Open the engine at `strength` for the requested locale tag.
    fn open(strength: Strength, requested_locale: Option<&str>) -> Self
    where
        Self: Sized;

    /// Native three-way comparison at the strength the backend was opened with.
    fn compare(&self, lhs: &str, rhs: &str) -> Ordering;

    /// The concrete locale in use. Empty when undeterminable.
    fn resolved_locale(&self) -> &str;

    /// Whether every comparison answers `Equal`.
    fn is_inert(&self) -> bool {
        false
    }
}

/// The backend used by [`Collator::new`](super::Collator::new).
#[cfg(feature = "icu")]
pub type DefaultBackend = super::IcuBackend;

/// The backend used by [`Collator::new`](super::Collator::new).
#[cfg(not(feature = "icu"))]
pub type DefaultBackend = super::NoopBackend;
