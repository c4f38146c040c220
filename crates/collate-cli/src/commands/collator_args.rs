//! Collator flags shared by the comparison commands.

use collate::{Collator, CollatorOptions};

/// Flags describing a collator.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CollatorArgs {
    /// Distinguish upper and lower case
    #[arg(long)]
    pub case_sensitive: bool,

    /// Distinguish accents and other diacritics
    #[arg(long)]
    pub diacritic_sensitive: bool,

    /// Locale tag (e.g., de, sv, en-US). Defaults to the environment locale
    #[arg(long, env = "COLLATE_LOCALE")]
    pub locale: Option<String>,
}

impl CollatorArgs {
    pub fn options(&self) -> CollatorOptions {
        CollatorOptions::builder()
            .case_sensitive(self.case_sensitive)
            .diacritic_sensitive(self.diacritic_sensitive)
            .maybe_locale(self.locale.clone())
            .build()
    }

    pub fn collator(&self) -> Collator {
        Collator::new(self.options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_options() {
        let args = CollatorArgs {
            case_sensitive: true,
            diacritic_sensitive: false,
            locale: Some("sv".to_string()),
        };
        let options = args.options();
        assert!(options.case_sensitive);
        assert!(!options.diacritic_sensitive);
        assert_eq!(options.locale.as_deref(), Some("sv"));
    }

    #[test]
    fn missing_locale_stays_unset() {
        assert_eq!(CollatorArgs::default().options(), CollatorOptions::default());
    }
}
