//! Weekday index type.

use std::fmt;

/// Error returned when constructing a weekday outside 1-7.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid weekday: {0} (must be 1-7)")]
pub struct InvalidWeekday(pub u8);

/// A 1-based weekday index.
///
/// Timetables are keyed by an opaque 1-7 index with no fixed anchor day;
/// the loader and the caller simply have to agree on the numbering.
/// This type guarantees the index is in range by construction.
///
/// # Examples
///
/// ```
/// use bus_planner::domain::Weekday;
///
/// let monday = Weekday::new(1).unwrap();
/// assert_eq!(monday.get(), 1);
///
/// // Out of range is rejected
/// assert!(Weekday::new(0).is_err());
/// assert!(Weekday::new(8).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weekday(u8);

impl Weekday {
    /// Construct a weekday from a 1-7 index.
    pub fn new(day: u8) -> Result<Self, InvalidWeekday> {
        if (1..=7).contains(&day) {
            Ok(Weekday(day))
        } else {
            Err(InvalidWeekday(day))
        }
    }

    /// Returns the 1-7 index.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the following weekday, wrapping 7 back to 1.
    pub fn next(self) -> Weekday {
        Weekday(self.0 % 7 + 1)
    }

    /// Zero-based index for timetable storage.
    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl fmt::Debug for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weekday({})", self.0)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for day in 1..=7 {
            assert_eq!(Weekday::new(day).unwrap().get(), day);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Weekday::new(0), Err(InvalidWeekday(0)));
        assert_eq!(Weekday::new(8), Err(InvalidWeekday(8)));
        assert_eq!(Weekday::new(255), Err(InvalidWeekday(255)));
    }

    #[test]
    fn next_advances_and_wraps() {
        for day in 1..7 {
            assert_eq!(Weekday::new(day).unwrap().next().get(), day + 1);
        }
        assert_eq!(Weekday::new(7).unwrap().next().get(), 1);
    }

    #[test]
    fn storage_index_is_zero_based() {
        assert_eq!(Weekday::new(1).unwrap().index(), 0);
        assert_eq!(Weekday::new(7).unwrap().index(), 6);
    }

    #[test]
    fn display() {
        assert_eq!(Weekday::new(3).unwrap().to_string(), "3");
    }
}
