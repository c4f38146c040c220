//! Implementation of the `collate sort` command.

use std::fs::read_to_string;
use std::io::{read_to_string as read_all, stdin};
use std::path::{Path, PathBuf};

use collate::Collator;
use miette::{miette, Result};

use super::CollatorArgs;

/// Arguments for the sort command.
#[derive(Debug, clap::Args)]
pub struct SortArgs {
    /// File to sort. Reads stdin when omitted
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub collator: CollatorArgs,

    /// Sort in descending order
    #[arg(long)]
    pub reverse: bool,
}

/// Read the whole input from a file or stdin.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => read_to_string(path)
            .map_err(|e| miette!("Cannot read {}: {}", path.display(), e)),
        None => read_all(stdin()).map_err(|e| miette!("Cannot read stdin: {}", e)),
    }
}

/// Stable sort of the lines of `text`. Equal lines keep their input order.
fn sort_lines<'a>(collator: &Collator, text: &'a str, reverse: bool) -> Vec<&'a str> {
    let mut lines: Vec<&str> = text.lines().collect();
    if reverse {
        lines.sort_by(|a, b| collator.compare(b, a));
    } else {
        lines.sort_by(|a, b| collator.compare(a, b));
    }
    lines
}

/// Run the sort command.
pub fn run_sort(args: SortArgs) -> Result<i32> {
    let text = read_input(args.file.as_deref())?;
    let collator = args.collator.collator();
    log::debug!("sorting with {:?}", collator);

    for line in sort_lines(&collator, &text, args.reverse) {
        println!("{}", line);
    }
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use collate::{CollatorOptions, NoopBackend};
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn reads_file_input() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "b\na").unwrap();
        assert_eq!(read_input(Some(file.path())).unwrap(), "b\na\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_input(Some(&dir.path().join("absent.txt"))).is_err());
    }

    #[test]
    fn inert_collator_keeps_input_order() {
        let collator = Collator::with_backend::<NoopBackend>(CollatorOptions::default());
        assert_eq!(sort_lines(&collator, "b\na\nc", false), vec!["b", "a", "c"]);
        assert_eq!(sort_lines(&collator, "b\na\nc", true), vec!["b", "a", "c"]);
    }

    #[cfg(feature = "icu")]
    #[test]
    fn sorts_with_locale_tailoring() {
        let swedish = Collator::new(
            CollatorOptions::builder().locale("sv".to_string()).build(),
        );
        assert_eq!(sort_lines(&swedish, "ä\nz\na", false), vec!["a", "z", "ä"]);
        assert_eq!(sort_lines(&swedish, "ä\nz\na", true), vec!["ä", "z", "a"]);
    }

    #[test]
    fn run_sort_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "beta\nalpha").unwrap();
        let args = SortArgs {
            file: Some(file.path().to_path_buf()),
            collator: CollatorArgs::default(),
            reverse: false,
        };
        assert_eq!(run_sort(args).unwrap(), exitcode::OK);
    }
}
