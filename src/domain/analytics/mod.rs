//! Derived equity-curve analytics.
//!
//! Both transforms here are pure, single-pass and total: they never fail,
//! never touch I/O, and recompute from scratch on every call. The surrounding
//! polling layer invokes them on each refresh of the upstream feed.

mod drawdown;
mod heatmap;

pub use drawdown::{DrawdownPoint, EquityPoint, compute_drawdown};
pub use heatmap::{DailyPnlEntry, HeatmapDay, build_heatmap_days, build_heatmap_days_local};
