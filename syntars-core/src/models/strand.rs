use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::MatchError;

/// Alignment orientation between the two genome spaces.
///
/// On the forward strand, coordinates grow in the same direction in both
/// spaces; on the reverse strand the correspondence is flipped, so the start
/// of a reference span lines up with the end of its query span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// The `+1` / `-1` sign used in match records and block ids.
    #[inline]
    pub fn sign(&self) -> i64 {
        match self {
            Strand::Forward => 1,
            Strand::Reverse => -1,
        }
    }
}

impl FromStr for Strand {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "+1" | "+" => Ok(Strand::Forward),
            "-1" | "-" => Ok(Strand::Reverse),
            _ => Err(MatchError::StrandParseError(s.to_string())),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("1".parse::<Strand>().unwrap(), Strand::Forward);
        assert_eq!("+".parse::<Strand>().unwrap(), Strand::Forward);
        assert_eq!("-1".parse::<Strand>().unwrap(), Strand::Reverse);
        assert_eq!(Strand::Reverse.to_string(), "-1");
        assert_eq!("x".parse::<Strand>().is_err(), true);
    }
}
