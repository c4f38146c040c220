use std::cmp::Ordering;

use super::{CollationBackend, Strength};

/// Backend for builds without a collation engine.
///
/// Every pair of strings compares equal and the resolved locale is the empty
/// string. This is a valid degraded answer, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopBackend;

impl CollationBackend for NoopBackend {
    fn open(_strength: Strength, _requested_locale: Option<&str>) -> Self {
        NoopBackend
    }

    fn compare(&self, _lhs: &str, _rhs: &str) -> Ordering {
        Ordering::Equal
    }

    fn resolved_locale(&self) -> &str {
        ""
    }

    fn is_inert(&self) -> bool {
        true
    }
}
