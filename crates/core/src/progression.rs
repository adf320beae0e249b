//! Progressions and the per-item progression history.

use serde::Serialize;

use crate::error::{Result, TodoError};
use crate::percentage::Percentage;
use crate::Time;

/// A dated percentage-of-completion increment.
///
/// Immutable once built; the percentage is always in `(0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Progression {
    date: Time,
    percentage: Percentage,
}

impl Progression {
    /// Create a progression, rejecting percentages outside `(0, 100]`.
    pub fn new(date: Time, percentage: Percentage) -> Result<Self> {
        if percentage == Percentage::ZERO || percentage > Percentage::HUNDRED {
            return Err(TodoError::validation(
                "Percentage must be between 0 and 100",
            ));
        }
        Ok(Self { date, percentage })
    }

    /// When the progress was made.
    pub fn date(&self) -> Time {
        self.date
    }

    /// How much progress was made.
    pub fn percentage(&self) -> Percentage {
        self.percentage
    }
}

impl std::fmt::Display for Progression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}%", self.date.format("%Y-%m-%d"), self.percentage)
    }
}

/// Append-only, chronologically ordered progressions of one item.
///
/// Dates strictly increase and the percentages never sum past 100.
/// `Clone` yields an independent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressionHistory {
    progressions: Vec<Progression>,
}

impl ProgressionHistory {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `progression`.
    ///
    /// Fails with [`TodoError::OutOfOrder`] if its date is not after every
    /// recorded date, or [`TodoError::Overflow`] if the total would pass 100%.
    /// Nothing is appended on failure.
    pub fn add_progression(&mut self, progression: Progression) -> Result<()> {
        if let Some(latest) = self.latest_date() {
            if progression.date <= latest {
                return Err(TodoError::OutOfOrder {
                    date: progression.date,
                    latest,
                });
            }
        }

        let current = self.total_progress();
        match current.checked_add(progression.percentage) {
            Some(total) if total <= Percentage::HUNDRED => {}
            _ => {
                return Err(TodoError::Overflow {
                    current,
                    attempted: progression.percentage,
                })
            }
        }

        self.progressions.push(progression);
        Ok(())
    }

    /// Sum of all recorded percentages.
    pub fn total_progress(&self) -> Percentage {
        self.progressions.iter().map(|p| p.percentage).sum()
    }

    /// True when the total is exactly 100%.
    pub fn is_completed(&self) -> bool {
        self.total_progress() == Percentage::HUNDRED
    }

    /// Latest recorded date, if any.
    pub fn latest_date(&self) -> Option<Time> {
        self.progressions.iter().map(|p| p.date).max()
    }

    /// Recorded progressions in insertion (chronological) order.
    pub fn progressions(&self) -> &[Progression] {
        &self.progressions
    }

    /// Number of recorded progressions.
    pub fn len(&self) -> usize {
        self.progressions.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.progressions.is_empty()
    }
}
