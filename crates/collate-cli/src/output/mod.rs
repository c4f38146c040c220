//! Output formatting for CLI commands.

mod diagnostic;
pub mod table;

use std::cmp::Ordering;

pub use diagnostic::ExprDiagnostic;

/// Three-way result as printed by the CLI: -1, 0 or 1.
pub fn ordering_sign(ordering: Ordering) -> i8 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
