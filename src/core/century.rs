//! Century markers of the Personal Identity Number and birth date resolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::IdentityError;

/// The separator character between birth date and individual number.
///
/// It encodes the century of birth. The letters were added in 2023 to relieve
/// the individual number space; `-` and `A` remain the primary markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CenturyMarker {
    /// `+`, born 1800–1899.
    Plus,
    /// `-`, born 1900–1999.
    Minus,
    /// `U`, born 1900–1999.
    U,
    /// `V`, born 1900–1999.
    V,
    /// `W`, born 1900–1999.
    W,
    /// `X`, born 1900–1999.
    X,
    /// `Y`, born 1900–1999.
    Y,
    /// `A`, born 2000–2099.
    A,
    /// `B`, born 2000–2099.
    B,
    /// `C`, born 2000–2099.
    C,
    /// `D`, born 2000–2099.
    D,
    /// `E`, born 2000–2099.
    E,
    /// `F`, born 2000–2099.
    F,
}

impl CenturyMarker {
    /// All markers, in the order they are listed by the population register.
    pub const ALL: [Self; 13] = [
        Self::Plus,
        Self::Minus,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
    ];

    /// Recognize a marker. Letters must already be upper case.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '+' => Self::Plus,
            '-' => Self::Minus,
            'U' => Self::U,
            'V' => Self::V,
            'W' => Self::W,
            'X' => Self::X,
            'Y' => Self::Y,
            'A' => Self::A,
            'B' => Self::B,
            'C' => Self::C,
            'D' => Self::D,
            'E' => Self::E,
            'F' => Self::F,
            _ => return None,
        })
    }

    /// The marker character.
    pub fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::U => 'U',
            Self::V => 'V',
            Self::W => 'W',
            Self::X => 'X',
            Self::Y => 'Y',
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }

    /// First two digits of the birth year: 18, 19 or 20.
    pub fn century(self) -> i32 {
        match self {
            Self::Plus => 18,
            Self::Minus | Self::U | Self::V | Self::W | Self::X | Self::Y => 19,
            Self::A | Self::B | Self::C | Self::D | Self::E | Self::F => 20,
        }
    }

    /// Resolve `DD`, `MM`, `YY` under this marker into a calendar date.
    pub fn resolve_date(
        self,
        day: u32,
        month: u32,
        yy: u32,
    ) -> Result<NaiveDate, IdentityError> {
        let year = self.century() * 100 + yy as i32;
        NaiveDate::from_ymd_opt(year, month, day).ok_or(IdentityError::Date { year, month, day })
    }
}

impl std::fmt::Display for CenturyMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn century_table() {
        assert_eq!(CenturyMarker::Plus.century(), 18);
        for c in ['-', 'U', 'V', 'W', 'X', 'Y'] {
            assert_eq!(CenturyMarker::from_char(c).unwrap().century(), 19, "{c}");
        }
        for c in ['A', 'B', 'C', 'D', 'E', 'F'] {
            assert_eq!(CenturyMarker::from_char(c).unwrap().century(), 20, "{c}");
        }
    }

    #[test]
    fn char_round_trip() {
        for m in CenturyMarker::ALL {
            assert_eq!(CenturyMarker::from_char(m.as_char()), Some(m));
        }
    }

    #[test]
    fn unknown_markers() {
        for c in ['a', 'u', 'G', 'Z', '*', ' ', '0'] {
            assert_eq!(CenturyMarker::from_char(c), None, "{c}");
        }
    }

    #[test]
    fn leap_years_per_century() {
        // 2000 is a leap year, 1900 and 1800 are not.
        assert!(CenturyMarker::A.resolve_date(29, 2, 0).is_ok());
        assert!(CenturyMarker::Minus.resolve_date(29, 2, 0).is_err());
        assert!(CenturyMarker::Plus.resolve_date(29, 2, 0).is_err());
        assert!(CenturyMarker::Y.resolve_date(29, 2, 96).is_ok());
    }

    #[test]
    fn invalid_date_reports_year() {
        assert_eq!(
            CenturyMarker::W.resolve_date(31, 4, 85),
            Err(IdentityError::Date {
                year: 1985,
                month: 4,
                day: 31
            })
        );
        assert!(CenturyMarker::A.resolve_date(0, 1, 1).is_err());
        assert!(CenturyMarker::A.resolve_date(1, 13, 1).is_err());
    }

    #[test]
    fn resolves_date() {
        let d = CenturyMarker::Plus.resolve_date(17, 5, 83).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(1883, 5, 17).unwrap());
    }
}
