use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
    /// No value this cycle, or nothing to compare against yet.
    Unknown,
}

impl Trend {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Up => "\u{1f7e2}",
            Self::Down => "\u{1f534}",
            Self::Flat => "\u{26aa}\u{fe0f}",
            Self::Unknown => "   ",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Last observed value per metric key, kept for the life of the process.
#[derive(Debug, Default)]
pub struct TrendTracker {
    last: FxHashMap<String, f64>,
}

impl TrendTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares `current` with the previous value for `key` and remembers it.
    ///
    /// A missing value leaves the stored one untouched.
    pub fn arrow(&mut self, key: &str, current: Option<f64>) -> Trend {
        let Some(current) = current else {
            return Trend::Unknown;
        };

        let Some(previous) = self.last.insert(key.to_string(), current) else {
            return Trend::Unknown;
        };

        match current.partial_cmp(&previous) {
            Some(Ordering::Greater) => Trend::Up,
            Some(Ordering::Less) => Trend::Down,
            Some(Ordering::Equal) => Trend::Flat,
            None => Trend::Unknown,
        }
    }

    pub fn last(&self, key: &str) -> Option<f64> {
        self.last.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}
