use std::fmt;
use std::str::FromStr;

use crate::error::ParsePriorityError;

/// Clinical urgency tier. Lower codes are seen first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityClass {
    Immediate = 1,
    Emergency = 2,
    Urgent = 3,
    Minimal = 4,
}

impl PriorityClass {
    pub const ALL: [PriorityClass; 4] = [
        PriorityClass::Immediate,
        PriorityClass::Emergency,
        PriorityClass::Urgent,
        PriorityClass::Minimal,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            PriorityClass::Immediate => "immediate",
            PriorityClass::Emergency => "emergency",
            PriorityClass::Urgent => "urgent",
            PriorityClass::Minimal => "minimal",
        }
    }
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad through the formatter so `{:<13}` works in listings.
        f.pad(self.name())
    }
}

impl FromStr for PriorityClass {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|class| class.name() == wanted)
            .ok_or_else(|| ParsePriorityError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_names_round_trip() {
        for class in PriorityClass::ALL {
            assert_eq!(PriorityClass::from_code(class.code()), Some(class));
            assert_eq!(class.name().parse::<PriorityClass>(), Ok(class));
        }
    }

    #[test]
    fn test_codes_are_clinical_order() {
        assert_eq!(PriorityClass::Immediate.code(), 1);
        assert_eq!(PriorityClass::Emergency.code(), 2);
        assert_eq!(PriorityClass::Urgent.code(), 3);
        assert_eq!(PriorityClass::Minimal.code(), 4);
    }

    #[test]
    fn test_out_of_range_code() {
        assert_eq!(PriorityClass::from_code(0), None);
        assert_eq!(PriorityClass::from_code(5), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("URGENT".parse(), Ok(PriorityClass::Urgent));
        assert_eq!(" Emergency ".parse(), Ok(PriorityClass::Emergency));
    }

    #[test]
    fn test_parse_rejects_unknown_name() {
        let err = "severe".parse::<PriorityClass>().unwrap_err();
        assert_eq!(err, ParsePriorityError("severe".into()));
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("{:<10}|", PriorityClass::Urgent), "urgent    |");
    }
}
