//! SectorLens TUI - terminal dashboard over the fourteen-company metrics table.
//!
//! Tabs:
//! 1. Market Overview - market cap by company, coloured by sector
//! 2. Profitability - profit margin, P/E against ROE
//! 3. Growth Analysis - revenue growth, declines flagged
//! 4. Dividend Analysis - yields of dividend payers
//! 5. Key Insights - narrative insights and portfolio recommendations

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use theme::Theme;
