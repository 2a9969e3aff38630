use crate::types::Year;

/// Compound inflation relative to a base year. All plan amounts are stated
/// in base-year dollars and scaled to nominal dollars per year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InflationModel {
    /// Annual inflation, percent (e.g. 1.8).
    pub annual_pct: f64,
    pub base_year: Year,
}

impl InflationModel {
    pub fn new(annual_pct: f64, base_year: Year) -> Self {
        InflationModel { annual_pct, base_year }
    }

    /// `rate ^ (year - base_year)` with `rate = 1 + annual_pct / 100`.
    /// Total over all integer years; exponents before the base year are
    /// negative and discount rather than inflate.
    pub fn multiplier(&self, year: Year) -> f64 {
        let rate = 1.0 + self.annual_pct / 100.0;
        rate.powi(year.since(self.base_year))
    }
}
