//! Modal dialog state for the UI.

/// Overlay shown above the active screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Key binding reference.
    Help,
    /// One-line notice (e.g. a failed preference write).
    Alert {
        /// Already-translated message.
        message: String,
    },
}

impl Modal {
    /// Whether an overlay currently captures input.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
