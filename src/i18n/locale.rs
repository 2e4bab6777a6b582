//! Supported display locales.

use std::fmt;

/// Display language of the catalog UI.
///
/// The set is closed: the shop ships exactly these translation tables and any
/// other value read from the preference store collapses to [`Locale::BASELINE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English, the baseline locale.
    #[default]
    En,
    /// Albanian.
    Al,
}

impl Locale {
    /// Locale used when no valid preference exists.
    pub const BASELINE: Self = Self::En;

    /// Every supported locale in toggle order.
    pub const ALL: [Self; 2] = [Self::En, Self::Al];

    /// What: Return the short code stored in settings and used to pick the table.
    ///
    /// Inputs: none
    ///
    /// Output: Static code string (`"en"` or `"al"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Al => "al",
        }
    }

    /// What: Parse a persisted locale code.
    ///
    /// Inputs:
    /// - `s`: Raw value (surrounding whitespace and case are ignored)
    ///
    /// Output:
    /// - `Some(Locale)` for a supported code; `None` otherwise.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "al" => Some(Self::Al),
            _ => None,
        }
    }

    /// What: Return the locale following `self` in [`Locale::ALL`], wrapping around.
    ///
    /// Inputs: none
    ///
    /// Output: Next locale for the language toggle.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Translation key of this locale's own display name.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::En => "app.languages.en",
            Self::Al => "app.languages.al",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::Locale;

    #[test]
    /// What: Locale codes parse case-insensitively and reject unknown values
    ///
    /// - Input: Known codes with noise; unsupported codes
    /// - Output: Matching variants; None for the rest
    fn locale_parse_accepts_supported_codes_only() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse(" AL "), Some(Locale::Al));
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse(""), None);
        for l in Locale::ALL {
            assert_eq!(Locale::parse(l.code()), Some(l));
        }
    }

    #[test]
    fn locale_next_cycles_through_all() {
        assert_eq!(Locale::En.next(), Locale::Al);
        assert_eq!(Locale::Al.next(), Locale::En);
        assert_eq!(Locale::default(), Locale::BASELINE);
    }
}
