//! Type-safe digit representation.

use std::fmt::{self, Display};

/// A puzzle digit in the range 1-9.
///
/// Invalid values are unrepresentable; fallible constructors cover the two
/// places raw data enters the system (wire payloads and keystrokes).
///
/// # Examples
///
/// ```
/// use gridlock_core::Digit;
///
/// assert_eq!(Digit::new(7), Some(Digit::D7));
/// assert_eq!(Digit::new(0), None);
/// assert_eq!(Digit::from_ascii('3'), Some(Digit::D3));
/// assert_eq!(Digit::from_ascii('x'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All digits from 1 to 9, in order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a numeric value, returning `None` outside 1-9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Creates a digit from the characters `'1'` through `'9'`.
    ///
    /// Note that `'0'` returns `None`: it is a decimal digit but not a valid
    /// puzzle digit.
    #[must_use]
    pub const fn from_ascii(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(Self::D1),
            '2' => Some(Self::D2),
            '3' => Some(Self::D3),
            '4' => Some(Self::D4),
            '5' => Some(Self::D5),
            '6' => Some(Self::D6),
            '7' => Some(Self::D7),
            '8' => Some(Self::D8),
            '9' => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based index for digit-keyed arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self.value() as usize - 1
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_only_one_through_nine() {
        assert_eq!(Digit::new(0), None);
        assert_eq!(Digit::new(1), Some(Digit::D1));
        assert_eq!(Digit::new(9), Some(Digit::D9));
        assert_eq!(Digit::new(10), None);
    }

    #[test]
    fn from_ascii_rejects_zero_and_non_digits() {
        assert_eq!(Digit::from_ascii('0'), None);
        assert_eq!(Digit::from_ascii('a'), None);
        assert_eq!(Digit::from_ascii(' '), None);
        for digit in Digit::ALL {
            let ch = char::from(b'0' + digit.value());
            assert_eq!(Digit::from_ascii(ch), Some(digit));
        }
    }

    #[test]
    fn value_round_trips_through_new() {
        for digit in Digit::ALL {
            assert_eq!(Digit::new(digit.value()), Some(digit));
            assert_eq!(digit.index(), digit.value() as usize - 1);
        }
    }

    #[test]
    fn display_matches_value() {
        assert_eq!(format!("{}", Digit::D1), "1");
        assert_eq!(format!("{}", Digit::D9), "9");
        let value: u8 = Digit::D5.into();
        assert_eq!(value, 5);
    }
}
