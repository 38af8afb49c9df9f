//! Board squares in algebraic coordinates.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A square on the board, addressed as file a-h and rank 1-8.
///
/// Serializes as its algebraic name ("e4"), which is also its `Display`
/// and `FromStr` form.
///
/// # Example
///
/// ```rust
/// use gambit::engine::Square;
///
/// let square: Square = "e4".parse().unwrap();
/// assert_eq!(square.to_string(), "e4");
/// assert_eq!(square.file(), 4);
/// assert_eq!(square.rank(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Build a square from 0-based file (a = 0) and rank (1 = 0) indices.
    /// Returns `None` when either index is off the board.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Self { file, rank })
    }

    /// 0-based file index (a = 0 .. h = 7).
    pub fn file(&self) -> u8 {
        self.file
    }

    /// 0-based rank index (1 = 0 .. 8 = 7).
    pub fn rank(&self) -> u8 {
        self.rank
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

/// Error parsing an algebraic square name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid square `{0}`; expected algebraic coordinates like `e4`")]
pub struct ParseSquareError(String);

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() == 2
            && (b'a'..=b'h').contains(&bytes[0])
            && (b'1'..=b'8').contains(&bytes[1])
        {
            Ok(Square {
                file: bytes[0] - b'a',
                rank: bytes[1] - b'1',
            })
        } else {
            Err(ParseSquareError(s.to_string()))
        }
    }
}

impl Serialize for Square {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
