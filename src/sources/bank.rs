use crate::fetch::PageSource;
use scraper::{Html, Selector};
use tracing::{debug, warn};

use super::{Quote, extract_cell_text, first_number};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    Nbe,
    BanqueMisr,
    Cib,
}

impl Bank {
    pub const ALL: [Self; 3] = [Self::Nbe, Self::BanqueMisr, Self::Cib];

    /// Prefix of the bank's metric keys (`nbe_buy`, `bm_sell`, ...).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Nbe => "nbe",
            Self::BanqueMisr => "bm",
            Self::Cib => "cib",
        }
    }
}

pub async fn fetch_bank_usd<S>(source: &S, url: &str, bank: Bank) -> Quote
where
    S: PageSource + ?Sized,
{
    let body = match source.fetch(url).await {
        Ok(body) => body,
        Err(err) => {
            debug!(bank = bank.key(), %err, "bank page unavailable");
            return Quote::MISSING;
        }
    };

    let quote = parse_bank_usd(&body);
    if quote.is_missing() {
        warn!(bank = bank.key(), url, "usd row not found");
    }
    quote
}

/// Buy/sell from the first row mentioning USD: its first two numeric cells.
///
/// A header row that mentions USD is that first row, so it suppresses the quote.
pub fn parse_bank_usd(html: &str) -> Quote {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("tr").expect("valid selector");
    let cell_selector = Selector::parse("td").expect("valid selector");

    let Some(row) = document
        .select(&row_selector)
        .find(|row| extract_cell_text(*row).to_lowercase().contains("usd"))
    else {
        return Quote::MISSING;
    };

    let numbers: Vec<f64> = row
        .select(&cell_selector)
        .filter_map(|cell| first_number(&extract_cell_text(cell)))
        .collect();

    match numbers.as_slice() {
        [buy, sell, ..] => Quote::new(*buy, *sell),
        _ => Quote::MISSING,
    }
}
