/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VisibleCell {
    #[default]
    Hidden,
    Flagged,
    /// Disclosed safe cell with its adjacent mine count, `0` being empty.
    Revealed(u8),
    /// Only shown by the final reveal after a loss.
    Mine,
}

impl VisibleCell {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Revealed(0))
    }
}

/// Ground truth of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    Mine,
    /// Safe cell with its adjacent mine count, `0` being empty.
    Safe(u8),
}

impl Answer {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for Answer {
    fn default() -> Self {
        Self::Safe(0)
    }
}
