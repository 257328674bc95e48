//! SectorLens CLI: the dashboard's data, printed.
//!
//! Commands:
//! - `companies` - the validated fourteen-company table
//! - `show <tab>` - the projections and annotations a tab displays
//! - `sectors` - sector colour tokens and member tickers
//! - `tabs` - tab identifiers and labels

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sectorlens_core::insights::{self, Annotations};
use sectorlens_core::{CompanyRecord, Metric, Sector, SectorMap, Tab, TabView, Universe};

#[derive(Parser)]
#[command(
    name = "sectorlens",
    about = "SectorLens CLI: financial metrics for fourteen companies across three sectors"
)]
struct Cli {
    /// Log debug output to stderr. RUST_LOG overrides.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the company metrics table.
    Companies {
        /// Emit JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print what a dashboard tab displays.
    Show {
        /// Tab id: overview, profitability, growth, dividends, insights.
        tab: Tab,

        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print sectors with colour tokens and member tickers.
    Sectors {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List tab ids and labels.
    Tabs {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
struct Shown<'a> {
    view: &'a TabView,
    #[serde(flatten)]
    annotations: Annotations,
}

#[derive(Serialize)]
struct SectorEntry<'a> {
    sector: Sector,
    color: String,
    tickers: Vec<&'a str>,
}

#[derive(Serialize)]
struct TabEntry {
    id: &'static str,
    label: &'static str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let universe = Universe::builtin().context("build company universe")?;
    debug!(companies = universe.len(), "universe loaded");

    match cli.command {
        Commands::Companies { json } => run_companies(&universe, json),
        Commands::Show { tab, json } => run_show(&universe, tab, json),
        Commands::Sectors { json } => run_sectors(json),
        Commands::Tabs { json } => run_tabs(json),
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serialize output")?
    );
    Ok(())
}

fn run_companies(universe: &Universe, json: bool) -> Result<()> {
    if json {
        return print_json(universe.records());
    }
    println!(
        "{:<6} {:<11} {:>8} {:>6} {:>8} {:>8} {:>7} {:>7}",
        "Ticker", "Sector", "Cap", "P/E", "Margin", "Growth", "Yield", "ROE"
    );
    println!("{}", "-".repeat(68));
    for record in universe.records() {
        println!("{}", company_line(record));
    }
    Ok(())
}

fn company_line(r: &CompanyRecord) -> String {
    let pe = r
        .pe_ratio
        .map(|pe| Metric::PeRatio.format(pe))
        .unwrap_or_else(|| "n/a".to_string());
    format!(
        "{:<6} {:<11} {:>8} {:>6} {:>8} {:>8} {:>7} {:>7}",
        r.ticker,
        r.sector.label(),
        Metric::MarketCap.format(r.market_cap_millions / 1000.0),
        pe,
        Metric::ProfitMargin.format(r.profit_margin * 100.0),
        Metric::RevenueGrowth.format(r.revenue_growth * 100.0),
        Metric::DividendYield.format(r.dividend_yield * 100.0),
        Metric::Roe.format(r.roe * 100.0),
    )
}

fn run_show(universe: &Universe, tab: Tab, json: bool) -> Result<()> {
    let view = TabView::build(tab, universe);
    let annotations = insights::annotations(&view);
    if json {
        return print_json(&Shown {
            view: &view,
            annotations,
        });
    }

    println!("{}", tab.label());
    for line in view_lines(&view) {
        println!("{line}");
    }
    for card in &annotations.cards {
        match &card.headline {
            Some(headline) => println!("[{}] {headline}: {}", card.title, card.body),
            None => println!("[{}] {}", card.title, card.body),
        }
    }
    for panel in &annotations.lists {
        println!("[{}]", panel.title);
        for row in panel.rows {
            match row.value {
                Some(value) => println!("  {} {value}", row.label),
                None => println!("  {}", row.label),
            }
        }
    }
    for insight in &annotations.insights {
        println!("[{}] {}", insight.title, insight.body);
    }
    Ok(())
}

/// Section heading, then one `TICKER  Sector  value...` line per point.
fn view_lines(view: &TabView) -> Vec<String> {
    fn row(ticker: &str, sector: Sector, values: &[String]) -> String {
        format!("  {:<6} {:<11} {}", ticker, sector.label(), values.join("  "))
    }

    let mut lines = Vec::new();
    match view {
        TabView::Overview { market_cap } => {
            lines.push(Metric::MarketCap.axis_title().to_string());
            lines.extend(market_cap.iter().map(|p| {
                row(&p.ticker, p.sector, &[Metric::MarketCap.format(p.market_cap_billions)])
            }));
        }
        TabView::Profitability { by_margin, by_pe } => {
            lines.push(Metric::ProfitMargin.axis_title().to_string());
            lines.extend(by_margin.iter().map(|p| {
                row(&p.ticker, p.sector, &[Metric::ProfitMargin.format(p.profit_margin_pct)])
            }));
            lines.push(format!(
                "{} / {}",
                Metric::PeRatio.axis_title(),
                Metric::Roe.axis_title()
            ));
            lines.extend(by_pe.iter().map(|p| {
                row(
                    &p.ticker,
                    p.sector,
                    &[Metric::PeRatio.format(p.pe_ratio), Metric::Roe.format(p.roe_pct)],
                )
            }));
        }
        TabView::Growth { by_growth } => {
            lines.push(Metric::RevenueGrowth.axis_title().to_string());
            lines.extend(by_growth.iter().map(|p| {
                row(&p.ticker, p.sector, &[Metric::RevenueGrowth.format(p.revenue_growth_pct)])
            }));
        }
        TabView::Dividends { by_yield } => {
            lines.push(Metric::DividendYield.axis_title().to_string());
            lines.extend(by_yield.iter().map(|p| {
                row(&p.ticker, p.sector, &[Metric::DividendYield.format(p.dividend_yield_pct)])
            }));
        }
        TabView::Insights => {}
    }
    lines
}

fn run_sectors(json: bool) -> Result<()> {
    let map = SectorMap::builtin();
    let entries: Vec<SectorEntry> = Sector::ALL
        .iter()
        .map(|sector| SectorEntry {
            sector: *sector,
            color: sector.color().hex(),
            tickers: map.tickers(*sector),
        })
        .collect();
    if json {
        return print_json(&entries);
    }
    for e in &entries {
        println!("{:<11} {}  {}", e.sector.label(), e.color, e.tickers.join(", "));
    }
    Ok(())
}

fn run_tabs(json: bool) -> Result<()> {
    let entries: Vec<TabEntry> = Tab::ALL
        .iter()
        .map(|tab| TabEntry {
            id: tab.id(),
            label: tab.label(),
        })
        .collect();
    if json {
        return print_json(&entries);
    }
    for (i, e) in entries.iter().enumerate() {
        println!("{}  {:<14} {}", i + 1, e.id, e.label);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_tab_ids() {
        let cli = Cli::try_parse_from(["sectorlens", "show", "growth", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Show {
                tab: Tab::Growth,
                json: true
            }
        ));
        assert!(Cli::try_parse_from(["sectorlens", "show", "charts"]).is_err());
    }

    #[test]
    fn company_line_formats_like_dashboard() {
        let universe = Universe::builtin().unwrap();
        let intc = company_line(universe.get("INTC").unwrap());
        assert!(intc.starts_with("INTC   Technology"));
        assert!(intc.contains("n/a"));
        assert!(intc.contains("-36.2%"));
        assert!(intc.contains("-0.4%"));
    }

    #[test]
    fn growth_lines_lead_with_nvda() {
        let universe = Universe::builtin().unwrap();
        let lines = view_lines(&TabView::build(Tab::Growth, &universe));
        assert_eq!(lines[0], "Revenue Growth (%)");
        assert!(lines[1].trim_start().starts_with("NVDA"));
        assert!(lines[1].ends_with("77.9%"));
        assert_eq!(lines.len(), 15);
    }

    #[test]
    fn profitability_lines_skip_missing_pe() {
        let universe = Universe::builtin().unwrap();
        let lines = view_lines(&TabView::build(Tab::Profitability, &universe));
        // Two headings plus thirteen companies per ordering.
        assert_eq!(lines.len(), 28);
        assert!(lines.iter().all(|l| !l.contains("INTC")));
    }

    #[test]
    fn show_json_carries_tab_tag_and_cards() {
        let universe = Universe::builtin().unwrap();
        let view = TabView::build(Tab::Overview, &universe);
        let shown = Shown {
            view: &view,
            annotations: insights::annotations(&view),
        };
        let value = serde_json::to_value(&shown).unwrap();
        assert_eq!(value["view"]["tab"], "overview");
        assert_eq!(value["cards"][1]["body"], "$18.0T combined");
        assert_eq!(value["view"]["market_cap"][0]["ticker"], "MSFT");
    }
}
