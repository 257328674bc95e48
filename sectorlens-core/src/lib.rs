//! SectorLens Core: company metrics, sector lookup, chart projections, view selection.
//!
//! This crate holds everything the dashboard displays, independent of any
//! terminal backend:
//! - The fixed fourteen-company metrics table and the validated `Universe`
//! - Sector classification, colour tokens, and the ticker → sector lookup
//! - Pure per-chart projections (scaling, filtering, sorting)
//! - Value formatting and the annotation cards
//! - The five-tab view selector and per-tab dispatch

pub mod company;
pub mod error;
pub mod format;
pub mod insights;
pub mod projection;
pub mod sector;
pub mod summary;
pub mod view;

pub use company::{CompanyRecord, MetricRow, Universe, METRIC_TABLE};
pub use error::{DataError, ParseSectorError, ParseTabError};
pub use format::Metric;
pub use sector::{ColorToken, Sector, SectorMap};
pub use view::{Tab, TabView, ViewSelector};
