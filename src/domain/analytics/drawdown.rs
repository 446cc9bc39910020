use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One snapshot of total account value, as delivered by the backend's
/// equity-curve endpoints. Daily points carry `date`, intraday points carry
/// `time`; every other field may be absent in the wire payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub equity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_pnl: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trades: Option<u32>,
}

impl EquityPoint {
    /// Human-readable timestamp for chart axes. Prefers the daily `date` key,
    /// falls back to the intraday `time` key.
    pub fn label(&self) -> String {
        if let Some(date) = self.date {
            date.format("%Y-%m-%d").to_string()
        } else if let Some(time) = self.time {
            time.format("%H:%M").to_string()
        } else {
            String::new()
        }
    }
}

/// An [`EquityPoint`] annotated with running drawdown percentage.
///
/// Invariant: `drawdown <= 0`, rounded to 2 decimals, measured against the
/// high-water mark of equity seen so far (seeded at starting capital).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownPoint {
    #[serde(flatten)]
    pub point: EquityPoint,
    pub drawdown: f64,
}

/// Annotates an ordered equity curve with running drawdown percentage.
///
/// The peak accumulator is a monotonic high-water mark, not a rolling window:
/// it starts at `starting_capital` and never decreases. Points with a missing
/// `equity` value fall back to `starting_capital`, so the function is total
/// over its domain and the output always has the input's length.
pub fn compute_drawdown(points: &[EquityPoint], starting_capital: f64) -> Vec<DrawdownPoint> {
    let mut peak = starting_capital;

    points
        .iter()
        .map(|point| {
            let equity = point.equity.unwrap_or(starting_capital);
            peak = peak.max(equity);

            let drawdown = if peak > 0.0 {
                round2((equity - peak) / peak * 100.0)
            } else {
                0.0
            };

            DrawdownPoint {
                point: point.clone(),
                drawdown,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_point(date: &str, equity: f64) -> EquityPoint {
        EquityPoint {
            date: date.parse().ok(),
            equity: Some(equity),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(compute_drawdown(&[], 10_000.0).is_empty());
    }

    #[test]
    fn test_exact_rounding_to_two_decimals() {
        let points = vec![daily_point("2024-01-01", 900.0)];
        let result = compute_drawdown(&points, 1000.0);
        assert_eq!(result.len(), 1);
        // (900 - 1000) / 1000 * 100 = -10.00
        assert_eq!(result[0].drawdown, -10.00);
    }

    #[test]
    fn test_drawdown_is_never_positive() {
        let points = vec![
            daily_point("2024-01-01", 10_500.0),
            daily_point("2024-01-02", 11_200.0),
            daily_point("2024-01-03", 9_800.0),
            daily_point("2024-01-04", 12_000.0),
            daily_point("2024-01-05", 11_100.0),
        ];
        for dd in compute_drawdown(&points, 10_000.0) {
            assert!(dd.drawdown <= 0.0, "drawdown {} > 0", dd.drawdown);
        }
    }

    #[test]
    fn test_zero_at_new_highs_negative_on_dip() {
        let points = vec![
            daily_point("2024-01-01", 10_000.0),
            daily_point("2024-01-02", 11_000.0), // new high
            daily_point("2024-01-03", 10_450.0), // -5% from peak
            daily_point("2024-01-04", 11_500.0), // new high again
        ];
        let result = compute_drawdown(&points, 10_000.0);
        assert_eq!(result[0].drawdown, 0.0);
        assert_eq!(result[1].drawdown, 0.0);
        assert_eq!(result[2].drawdown, -5.0);
        assert_eq!(result[3].drawdown, 0.0);
    }

    #[test]
    fn test_peak_is_monotonic_high_water_mark() {
        // After the 12k peak, a recovery to 11k is still under water.
        let points = vec![
            daily_point("2024-01-01", 12_000.0),
            daily_point("2024-01-02", 9_000.0),
            daily_point("2024-01-03", 11_000.0),
        ];
        let result = compute_drawdown(&points, 10_000.0);
        assert_eq!(result[0].drawdown, 0.0);
        assert_eq!(result[1].drawdown, -25.0);
        assert!((result[2].drawdown - (-8.33)).abs() < 1e-9);
    }

    #[test]
    fn test_missing_equity_falls_back_to_starting_capital() {
        let points = vec![
            EquityPoint {
                date: "2024-01-01".parse().ok(),
                equity: None,
                ..Default::default()
            },
            daily_point("2024-01-02", 9_500.0),
        ];
        let result = compute_drawdown(&points, 10_000.0);
        assert_eq!(result[0].drawdown, 0.0);
        assert_eq!(result[1].drawdown, -5.0);
    }

    #[test]
    fn test_zero_capital_curve_stays_at_zero() {
        let points = vec![daily_point("2024-01-01", 0.0)];
        let result = compute_drawdown(&points, 0.0);
        assert_eq!(result[0].drawdown, 0.0);
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let points = vec![
            daily_point("2024-01-01", 10_200.0),
            daily_point("2024-01-02", 9_700.0),
        ];
        assert_eq!(
            compute_drawdown(&points, 10_000.0),
            compute_drawdown(&points, 10_000.0)
        );
    }

    #[test]
    fn test_original_fields_pass_through() {
        let point = EquityPoint {
            date: "2024-03-15".parse().ok(),
            equity: Some(10_000.0),
            daily_pnl: Some(120.5),
            trades: Some(3),
            ..Default::default()
        };
        let result = compute_drawdown(std::slice::from_ref(&point), 10_000.0);
        assert_eq!(result[0].point, point);
    }
}
