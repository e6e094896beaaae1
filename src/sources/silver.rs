use crate::fetch::PageSource;
use scraper::Html;
use tracing::{debug, warn};

use super::{join_text, normalize_chars, number_at, skip_whitespace};

const SILVER_LABEL: &str = "Silver Price";

pub async fn fetch_silver<S>(source: &S, url: &str) -> Option<f64>
where
    S: PageSource + ?Sized,
{
    let body = match source.fetch(url).await {
        Ok(body) => body,
        Err(err) => {
            debug!(%err, "silver page unavailable");
            return None;
        }
    };

    let price = parse_silver(&body);
    if price.is_none() {
        warn!(url, "silver price not found");
    }
    price
}

/// World silver price in USD per ounce, read from `Silver Price $<n>` anywhere in the page text.
pub fn parse_silver(html: &str) -> Option<f64> {
    let document = Html::parse_document(html);
    let text = join_text(document.root_element().text());
    text.match_indices(SILVER_LABEL)
        .find_map(|(idx, label)| price_after(&text[idx + label.len()..]))
}

fn price_after(rest: &str) -> Option<f64> {
    let chars = normalize_chars(rest, false);
    let mut idx = skip_whitespace(&chars, 0);
    if chars.get(idx) == Some(&'$') {
        idx = skip_whitespace(&chars, idx + 1);
    }
    number_at(&chars, idx).map(|(price, _)| price)
}
