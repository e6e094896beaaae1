use crate::fetch::PageSource;
use crate::formatting::{format_cell, format_gold, format_usd};
use crate::sources::{Bank, Endpoints, Karat, Quote, fetch_bank_usd, fetch_gold, fetch_silver};
use crate::trend::TrendTracker;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, info};

/// Grams per troy ounce.
pub const OZ_TO_GRAM: f64 = 31.1035;
pub const CAIRO: Tz = chrono_tz::Africa::Cairo;

const HEADER: &str = "تحديث كل ساعة – القاهرة";
const RULE: &str = "------------------------------------------------";
const COLUMN_GAP: &str = "      ";

const BANK_TITLE: &str = "💵 <b>الدولار مقابل الجنيه (البنوك)</b>";
const BANK_COLUMNS: &str = "البنك          شراء               بيع";
const BANK_ROWS: [(Bank, &str); 3] = [
    (Bank::Nbe, "الأهلي       "),
    (Bank::BanqueMisr, "بنك مصر     "),
    (Bank::Cib, "بنك (CIB)    "),
];

const GOLD_TITLE: &str = "🥇 <b>الذهب (شراء / بيع)</b>";
const GOLD_COLUMNS: &str = "العيار    شراء              بيع";

const SILVER_TITLE: &str = "🥈 <b>الفضة</b>";
const SILVER_NOTE: &str =
    "* سعر الفضة في مصر محسوب من السعر العالمي ومتوسط الدولار وبدون مصنعية *";
const SIGNATURE: &str = "BY : Ahmed Magdy";

/// Every value gathered during one cycle, raw and derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub nbe: Quote,
    pub banque_misr: Quote,
    pub cib: Quote,
    pub gold24: Quote,
    pub gold21: Quote,
    pub gold18: Quote,
    pub silver_usd: Option<f64>,
    pub avg_sell: Option<f64>,
    pub silver_egp: Option<f64>,
}

impl Snapshot {
    pub fn new(banks: [Quote; 3], gold: [Quote; 3], silver_usd: Option<f64>) -> Self {
        let [nbe, banque_misr, cib] = banks;
        let [gold24, gold21, gold18] = gold;
        let avg_sell = average_sell([nbe.sell, banque_misr.sell, cib.sell]);
        Self {
            nbe,
            banque_misr,
            cib,
            gold24,
            gold21,
            gold18,
            silver_usd,
            avg_sell,
            silver_egp: silver_egp(silver_usd, avg_sell),
        }
    }

    pub const fn bank(&self, bank: Bank) -> Quote {
        match bank {
            Bank::Nbe => self.nbe,
            Bank::BanqueMisr => self.banque_misr,
            Bank::Cib => self.cib,
        }
    }

    pub const fn gold(&self, karat: Karat) -> Quote {
        match karat {
            Karat::K24 => self.gold24,
            Karat::K21 => self.gold21,
            Karat::K18 => self.gold18,
        }
    }

    /// Scraped fields that came back empty this cycle.
    pub fn missing_fields(&self) -> usize {
        let quotes = [
            self.nbe,
            self.banque_misr,
            self.cib,
            self.gold24,
            self.gold21,
            self.gold18,
        ];
        quotes
            .iter()
            .flat_map(|quote| [quote.buy, quote.sell])
            .chain([self.silver_usd])
            .filter(Option::is_none)
            .count()
    }
}

/// Mean of the three bank sell prices, only when all three are known.
pub fn average_sell(sells: [Option<f64>; 3]) -> Option<f64> {
    let [Some(a), Some(b), Some(c)] = sells else {
        return None;
    };
    Some((a + b + c) / 3.0)
}

/// Local silver price per gram in EGP.
pub fn silver_egp(silver_usd: Option<f64>, avg_sell: Option<f64>) -> Option<f64> {
    Some(silver_usd? * avg_sell? / OZ_TO_GRAM)
}

/// One rendered message and how complete the data behind it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub missing: usize,
}

pub fn cairo_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&CAIRO)
}

pub struct MessageBuilder<S> {
    source: S,
    endpoints: Endpoints,
    trends: TrendTracker,
}

impl<S: PageSource> MessageBuilder<S> {
    pub fn new(source: S, endpoints: Endpoints) -> Self {
        Self {
            source,
            endpoints,
            trends: TrendTracker::new(),
        }
    }

    pub const fn trends(&self) -> &TrendTracker {
        &self.trends
    }

    /// Scrapes every page in order: gold by karat, banks, then silver.
    pub async fn collect(&self) -> Snapshot {
        let mut gold = [Quote::MISSING; 3];
        for (slot, karat) in gold.iter_mut().zip(Karat::ALL) {
            *slot = fetch_gold(&self.source, &self.endpoints.gold, karat).await;
        }

        let mut banks = [Quote::MISSING; 3];
        for (slot, bank) in banks.iter_mut().zip(Bank::ALL) {
            *slot = fetch_bank_usd(&self.source, self.endpoints.bank(bank), bank).await;
        }

        let silver_usd = fetch_silver(&self.source, &self.endpoints.silver).await;

        Snapshot::new(banks, gold, silver_usd)
    }

    pub async fn build(&mut self, now: DateTime<Tz>) -> Report {
        let snapshot = self.collect().await;
        let missing = snapshot.missing_fields();
        debug!(?snapshot, "collected prices");
        info!(missing, avg_sell = ?snapshot.avg_sell, "prices collected");
        Report {
            text: render_report(&snapshot, &now, &mut self.trends),
            missing,
        }
    }
}

/// Renders the chat message; trend state is updated in display order.
pub fn render_report(snapshot: &Snapshot, now: &DateTime<Tz>, trends: &mut TrendTracker) -> String {
    let mut lines: Vec<String> = vec![
        HEADER.to_string(),
        now.format("%Y-%m-%d %H:%M").to_string(),
        String::new(),
        BANK_TITLE.to_string(),
        "<pre>".to_string(),
        BANK_COLUMNS.to_string(),
        RULE.to_string(),
    ];
    for (bank, label) in BANK_ROWS {
        let quote = snapshot.bank(bank);
        let buy = usd_cell(trends, &format!("{}_buy", bank.key()), quote.buy);
        let sell = usd_cell(trends, &format!("{}_sell", bank.key()), quote.sell);
        lines.push(format!("{label}{buy}{COLUMN_GAP}{sell}"));
    }
    lines.extend(
        ["</pre>", "", GOLD_TITLE, "<pre>", GOLD_COLUMNS, RULE].map(str::to_string),
    );

    for karat in Karat::ALL {
        let quote = snapshot.gold(karat);
        let grade = karat.grade();
        let buy = gold_cell(trends, &format!("g{grade}_buy"), quote.buy);
        let sell = gold_cell(trends, &format!("g{grade}_sell"), quote.sell);
        lines.push(format!("عيار {grade}  {buy}{COLUMN_GAP}{sell}"));
    }
    lines.extend(["</pre>", "", SILVER_TITLE, "<pre>"].map(str::to_string));

    let world = usd_cell(trends, "silver_usd", snapshot.silver_usd);
    let local = gold_cell(trends, "silver_egp", snapshot.silver_egp);
    lines.push(format!("عالمي : {world}"));
    lines.push(format!("مصر :  {local}"));

    lines.extend(["</pre>", "", SILVER_NOTE, SIGNATURE].map(str::to_string));
    lines.join("\n")
}

fn usd_cell(trends: &mut TrendTracker, key: &str, value: Option<f64>) -> String {
    format_cell(&format_usd(value), trends.arrow(key, value))
}

fn gold_cell(trends: &mut TrendTracker, key: &str, value: Option<f64>) -> String {
    format_cell(&format_gold(value), trends.arrow(key, value))
}
