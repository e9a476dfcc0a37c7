//! The seven fixed weekdays.

use std::fmt;
use std::str::FromStr;

use crate::constants::DAY_COUNT;
use crate::error::HabitError;

/// A day of the tracked week, Monday first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in display order.
    pub const ALL: [Weekday; DAY_COUNT] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Zero-based position in the week.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display label shown in the day selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Po",
            Weekday::Tuesday => "Út",
            Weekday::Wednesday => "St",
            Weekday::Thursday => "Čt",
            Weekday::Friday => "Pá",
            Weekday::Saturday => "So",
            Weekday::Sunday => "Ne",
        }
    }

    /// English three-letter abbreviation, accepted on the command line.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }

    /// The following day, wrapping Sunday to Monday.
    #[must_use]
    pub const fn next(self) -> Weekday {
        Self::ALL[(self.index() + 1) % DAY_COUNT]
    }

    /// The preceding day, wrapping Monday to Sunday.
    #[must_use]
    pub const fn prev(self) -> Weekday {
        Self::ALL[(self.index() + DAY_COUNT - 1) % DAY_COUNT]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weekday {
    type Err = HabitError;

    /// Accepts the display label exactly (`Čt`) or the English
    /// abbreviation in any case (`thu`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label() == s || d.short_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| HabitError::UnknownWeekday(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_monday_first() {
        assert_eq!(Weekday::ALL[0], Weekday::Monday);
        assert_eq!(Weekday::ALL[6], Weekday::Sunday);
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
    }

    #[test]
    fn labels() {
        let labels: Vec<&str> = Weekday::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, ["Po", "Út", "St", "Čt", "Pá", "So", "Ne"]);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Weekday::Sunday.next(), Weekday::Monday);
        assert_eq!(Weekday::Monday.prev(), Weekday::Sunday);
        assert_eq!(Weekday::Wednesday.next().prev(), Weekday::Wednesday);
    }

    #[test]
    fn parse_labels_and_abbreviations() {
        assert_eq!("Po".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("Čt".parse::<Weekday>().unwrap(), Weekday::Thursday);
        assert_eq!("Mon".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("sun".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert_eq!(" Fri ".parse::<Weekday>().unwrap(), Weekday::Friday);
    }

    #[test]
    fn parse_unknown_is_error() {
        let err = "Funday".parse::<Weekday>().unwrap_err();
        assert_eq!(err, HabitError::UnknownWeekday("Funday".into()));
        assert!("".parse::<Weekday>().is_err());
        // Display labels are matched exactly.
        assert!("po".parse::<Weekday>().is_err());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Weekday::Friday.to_string(), "Pá");
    }

    #[test]
    fn default_is_monday() {
        assert_eq!(Weekday::default(), Weekday::Monday);
    }
}
