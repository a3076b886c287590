//! The closed set of answers an operator can give for a file.

use std::fmt;
use std::str::FromStr;

/// Destination bucket for a relocation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    Private,
    General,
    Defer,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Private, Bucket::General, Bucket::Defer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Private => "private",
            Bucket::General => "general",
            Bucket::Defer => "defer",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator decision for a single work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Private,
    General,
    Defer,
    Skip,
    Undo,
    Abort,
}

impl Decision {
    /// Every decision, in the order they are offered to the operator.
    pub const ALL: [Decision; 6] = [
        Decision::Private,
        Decision::General,
        Decision::Defer,
        Decision::Skip,
        Decision::Undo,
        Decision::Abort,
    ];

    /// Used when the operator submits an empty answer.
    pub const DEFAULT: Decision = Decision::Abort;

    pub fn code(&self) -> char {
        match self {
            Decision::Private => 'p',
            Decision::General => 'g',
            Decision::Defer => 'd',
            Decision::Skip => 's',
            Decision::Undo => 'u',
            Decision::Abort => 'a',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Private => "private",
            Decision::General => "general",
            Decision::Defer => "defer",
            Decision::Skip => "skip",
            Decision::Undo => "undo",
            Decision::Abort => "abort",
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    /// Short menu text such as `[p]rivate`.
    pub fn menu_label(&self) -> String {
        let name = self.as_str();
        format!("[{}]{}", &name[..1], &name[1..])
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();

        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_code(c).ok_or_else(|| format!("Unknown choice: {}", s));
        }

        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == lower)
            .ok_or_else(|| format!("Unknown choice: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes_case_insensitive() {
        assert_eq!("p".parse::<Decision>().unwrap(), Decision::Private);
        assert_eq!("G".parse::<Decision>().unwrap(), Decision::General);
        assert_eq!(" d ".parse::<Decision>().unwrap(), Decision::Defer);
        assert_eq!("S".parse::<Decision>().unwrap(), Decision::Skip);
        assert_eq!("u".parse::<Decision>().unwrap(), Decision::Undo);
        assert_eq!("A".parse::<Decision>().unwrap(), Decision::Abort);
    }

    #[test]
    fn test_parse_full_words() {
        assert_eq!("Private".parse::<Decision>().unwrap(), Decision::Private);
        assert_eq!("UNDO".parse::<Decision>().unwrap(), Decision::Undo);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("x".parse::<Decision>().is_err());
        assert!("".parse::<Decision>().is_err());
        assert!("pg".parse::<Decision>().is_err());
        assert!("privates".parse::<Decision>().is_err());
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<char> = Decision::ALL.iter().map(|d| d.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Decision::ALL.len());
    }

    #[test]
    fn test_menu_label() {
        assert_eq!(Decision::Private.menu_label(), "[p]rivate");
        assert_eq!(Decision::Abort.menu_label(), "[a]bort");
    }
}
