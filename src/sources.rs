pub mod bank;
pub mod gold;
pub mod silver;

pub use bank::{Bank, fetch_bank_usd, parse_bank_usd};
pub use gold::{Karat, fetch_gold, parse_gold};
pub use silver::{fetch_silver, parse_silver};

use scraper::ElementRef;

const GOLD_URL: &str =
    "https://goldbullioneg.com/%D8%A3%D8%B3%D8%B9%D8%A7%D8%B1-%D8%A7%D9%84%D8%B0%D9%87%D8%A8/";
const NBE_URL: &str = "https://ta3weem.com/en/banks/national-bank-of-egypt-nbe";
const BANQUE_MISR_URL: &str = "https://ta3weem.com/en/banks/banque-misr-bm";
const CIB_URL: &str = "https://ta3weem.com/en/banks/commercial-international-bank-cib";
const SILVER_URL: &str = "https://goldpricez.com/silver-rates/egypt";

/// A buy/sell pair; either side is `None` when the page could not be read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quote {
    pub buy: Option<f64>,
    pub sell: Option<f64>,
}

impl Quote {
    pub const MISSING: Self = Self {
        buy: None,
        sell: None,
    };

    pub const fn new(buy: f64, sell: f64) -> Self {
        Self {
            buy: Some(buy),
            sell: Some(sell),
        }
    }

    pub const fn is_missing(&self) -> bool {
        self.buy.is_none() && self.sell.is_none()
    }
}

/// The five pages scraped every cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub gold: String,
    pub nbe: String,
    pub banque_misr: String,
    pub cib: String,
    pub silver: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            gold: GOLD_URL.to_string(),
            nbe: NBE_URL.to_string(),
            banque_misr: BANQUE_MISR_URL.to_string(),
            cib: CIB_URL.to_string(),
            silver: SILVER_URL.to_string(),
        }
    }
}

impl Endpoints {
    pub fn bank(&self, bank: Bank) -> &str {
        match bank {
            Bank::Nbe => &self.nbe,
            Bank::BanqueMisr => &self.banque_misr,
            Bank::Cib => &self.cib,
        }
    }
}

/// Joins the trimmed, non-empty text nodes with single spaces.
pub fn join_text<'a>(chunks: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for chunk in chunks {
        let trimmed = chunk.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(trimmed);
    }
    out
}

pub fn extract_cell_text(cell: ElementRef<'_>) -> String {
    join_text(cell.text())
}

/// Every number in `value` after thousands separators are dropped.
pub fn numeric_tokens(value: &str) -> Vec<f64> {
    let chars = normalize_chars(value, true);
    let mut tokens = Vec::new();
    let mut idx = 0;
    while idx < chars.len() {
        if let Some((number, end)) = number_at(&chars, idx) {
            tokens.push(number);
            idx = end;
        } else {
            idx += 1;
        }
    }
    tokens
}

pub fn first_number(value: &str) -> Option<f64> {
    let chars = normalize_chars(value, true);
    (0..chars.len()).find_map(|idx| number_at(&chars, idx).map(|(number, _)| number))
}

fn normalize_chars(value: &str, strip_commas: bool) -> Vec<char> {
    value
        .chars()
        .filter(|&ch| !(strip_commas && ch == ','))
        .map(normalize_digit)
        .collect()
}

fn normalize_digit(ch: char) -> char {
    let offset = match ch {
        '\u{0660}'..='\u{0669}' => u32::from(ch) - 0x0660,
        '\u{06f0}'..='\u{06f9}' => u32::from(ch) - 0x06f0,
        _ => return ch,
    };
    char::from_digit(offset, 10).unwrap_or(ch)
}

/// Reads `\d+(\.\d+)?` starting exactly at `start`.
fn number_at(chars: &[char], start: usize) -> Option<(f64, usize)> {
    let mut end = start;
    while chars.get(end).is_some_and(char::is_ascii_digit) {
        end += 1;
    }
    if end == start {
        return None;
    }

    if chars.get(end) == Some(&'.') && chars.get(end + 1).is_some_and(char::is_ascii_digit) {
        end += 1;
        while chars.get(end).is_some_and(char::is_ascii_digit) {
            end += 1;
        }
    }

    let buf: String = chars[start..end].iter().collect();
    buf.parse::<f64>().ok().map(|number| (number, end))
}

fn skip_whitespace(chars: &[char], mut idx: usize) -> usize {
    while chars.get(idx).is_some_and(|ch| ch.is_whitespace()) {
        idx += 1;
    }
    idx
}
