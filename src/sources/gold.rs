use crate::fetch::PageSource;
use scraper::{Html, Selector};
use tracing::{debug, warn};

use super::{Quote, extract_cell_text, numeric_tokens};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Karat {
    K24,
    K21,
    K18,
}

impl Karat {
    pub const ALL: [Self; 3] = [Self::K24, Self::K21, Self::K18];

    pub const fn grade(self) -> u8 {
        match self {
            Self::K24 => 24,
            Self::K21 => 21,
            Self::K18 => 18,
        }
    }

    /// Row label used on the gold page, e.g. `جرام عيار 21`.
    pub fn row_label(self) -> String {
        format!("جرام عيار {}", self.grade())
    }
}

pub async fn fetch_gold<S>(source: &S, url: &str, karat: Karat) -> Quote
where
    S: PageSource + ?Sized,
{
    let body = match source.fetch(url).await {
        Ok(body) => body,
        Err(err) => {
            debug!(karat = karat.grade(), %err, "gold page unavailable");
            return Quote::MISSING;
        }
    };

    let quote = parse_gold(&body, karat);
    if quote.is_missing() {
        warn!(karat = karat.grade(), url, "gold row not found");
    }
    quote
}

/// Buy/sell for `karat`: the last two numbers of the first matching row.
pub fn parse_gold(html: &str, karat: Karat) -> Quote {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("tr").expect("valid selector");
    let label = karat.row_label();

    let Some(text) = document
        .select(&row_selector)
        .map(extract_cell_text)
        .find(|text| text.contains(&label))
    else {
        return Quote::MISSING;
    };

    match numeric_tokens(&text).as_slice() {
        [.., buy, sell] => Quote::new(buy.round_ties_even(), sell.round_ties_even()),
        _ => Quote::MISSING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r"
        <html><body><table>
          <tr><th>العيار</th><th>شراء</th><th>بيع</th></tr>
          <tr><td>جرام عيار 24</td><td>3,199.6</td><td>3,225</td></tr>
          <tr><td>جرام عيار 21</td><td>2,800</td><td>2,822.4</td></tr>
          <tr><td>جرام عيار 18</td><td>2,400.5</td><td>2,419.5</td></tr>
        </table></body></html>";

    #[test]
    fn takes_last_two_numbers_of_matching_row() {
        assert_eq!(parse_gold(PAGE, Karat::K24), Quote::new(3200.0, 3225.0));
        assert_eq!(parse_gold(PAGE, Karat::K21), Quote::new(2800.0, 2822.0));
    }

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(parse_gold(PAGE, Karat::K18), Quote::new(2400.0, 2420.0));
    }

    #[test]
    fn missing_row_yields_missing_quote() {
        let page = "<table><tr><td>جرام عيار 22</td><td>3000</td><td>3010</td></tr></table>";
        assert_eq!(parse_gold(page, Karat::K24), Quote::MISSING);
    }

    #[test]
    fn first_matching_row_wins() {
        let page = "<table>\
            <tr><td>جرام عيار 24</td><td>--</td></tr>\
            <tr><td>جرام عيار 24</td><td>3200</td><td>3225</td></tr>\
            </table>";
        // The label's own "24" is the only number in the first row.
        assert_eq!(parse_gold(page, Karat::K24), Quote::MISSING);
    }

    #[test]
    fn ignores_markup_without_rows() {
        assert_eq!(parse_gold("<p>جرام عيار 24 3200 3225</p>", Karat::K24), Quote::MISSING);
        assert_eq!(parse_gold("", Karat::K21), Quote::MISSING);
    }
}
