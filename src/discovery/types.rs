use std::fmt;

/// An interval around the unknown limit: `low` is known present, `high` known absent.
///
/// `Bracket { low: 0, high: 1 }` means not even the first ID exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub low: i64,
    pub high: i64,
}

impl Bracket {
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// True when the range holds no IDs at all.
    pub fn is_empty_range(&self) -> bool {
        self.low == 0 && self.high == 1
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
