//! CLI command implementations.

mod collator_args;
mod compare;
mod eval;
mod matrix;
mod sort;

pub use collator_args::CollatorArgs;
pub use compare::{run_compare, CompareArgs};
pub use eval::{run_eval, EvalArgs};
pub use matrix::{run_matrix, MatrixArgs};
pub use sort::{run_sort, SortArgs};
