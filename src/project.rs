use serde::{Deserialize, Serialize};

use crate::inflation::InflationModel;
use crate::split::SplitPolicy;
use crate::types::Year;

/// When a project is active, and how its year label reads in the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Schedule {
    /// Fires in exactly one year ("Total cost").
    OneTime { year: Year },
    /// Active over `[start, end)`. `end: None` means open-ended — the
    /// project runs to the simulation horizon ("Year N" labels).
    Recurring { start: Year, end: Option<Year> },
}

impl Schedule {
    pub fn start(self) -> Year {
        match self {
            Schedule::OneTime { year } => year,
            Schedule::Recurring { start, .. } => start,
        }
    }

    pub fn contains(self, year: Year) -> bool {
        match self {
            Schedule::OneTime { year: y } => year == y,
            Schedule::Recurring { start, end } => {
                year >= start && end.is_none_or(|e| year < e)
            }
        }
    }

    /// Years since the schedule start; indexes time-varying cost bands.
    pub fn relative_year(self, year: Year) -> i32 {
        year.since(self.start())
    }

    pub fn label(self, year: Year) -> String {
        match self {
            Schedule::OneTime { .. } => "Total cost".to_string(),
            Schedule::Recurring { .. } => format!("Year {}", self.relative_year(year)),
        }
    }
}

/// The closed family of per-year amount rules. Amounts are stated in
/// base-year dollars; `Project::amount` applies inflation on top.
/// Negative is an expense, positive is income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CostRule {
    /// After-tax salary. `first_year`, when set, replaces `annual` in the
    /// schedule's first year — a pro-rated blend for a mid-year job change.
    Career { annual: f64, first_year: Option<f64> },
    /// Constant annual amount (living expenses, vacation, gifts).
    FlatRecurring { annual: f64 },
    /// Single payment in the schedule's one year (engagement, wedding).
    LumpSum { amount: f64 },
    /// Rent compounding at its own annual rate on top of general inflation.
    /// The escalator runs from the inflation base year, not the move-in
    /// year — it tracks the rental market, not the tenancy.
    EscalatingRent { monthly: f64, annual_escalation: f64 },
    /// Large purchase: an upfront payment in the first year plus a
    /// recurring cost that changes after `change_after` years. Covers a
    /// mortgage (payment drops once paid off) and a pet (recurring cost
    /// ends after the expected lifetime, `annual_after` 0).
    Amortized { upfront: f64, annual: f64, annual_after: f64, change_after: i32 },
    /// Child-rearing cost banded by the child's age: under 8, under 12,
    /// under 18 (school), under 23 (college), then a small trailing cost
    /// indefinitely.
    DependentCare { child: f64, preteen: f64, school: f64, college: f64, adult: f64 },
}

impl CostRule {
    /// Pre-inflation amount for a year already known to be in-window.
    fn base_amount(&self, relative_year: i32, year: Year, base_year: Year) -> f64 {
        match *self {
            CostRule::Career { annual, first_year } => {
                if relative_year == 0 {
                    first_year.unwrap_or(annual)
                } else {
                    annual
                }
            }
            CostRule::FlatRecurring { annual } => annual,
            CostRule::LumpSum { amount } => amount,
            CostRule::EscalatingRent { monthly, annual_escalation } => {
                monthly * 12.0 * annual_escalation.powi(year.since(base_year))
            }
            CostRule::Amortized { upfront, annual, annual_after, change_after } => {
                let recurring =
                    if relative_year < change_after { annual } else { annual_after };
                if relative_year == 0 { recurring + upfront } else { recurring }
            }
            CostRule::DependentCare { child, preteen, school, college, adult } => {
                match relative_year {
                    0..8 => child,
                    8..12 => preteen,
                    12..18 => school,
                    18..23 => college,
                    _ => adult,
                }
            }
        }
    }
}

/// One income or expense stream in the plan. Immutable and stateless:
/// each year's amount is a pure function of the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub schedule: Schedule,
    pub rule: CostRule,
    pub split: SplitPolicy,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        schedule: Schedule,
        rule: CostRule,
        split: SplitPolicy,
    ) -> Self {
        Project { name: name.into(), schedule, rule, split }
    }

    /// Signed nominal amount for `year`: exactly 0.0 outside the active
    /// window, otherwise the rule's base amount scaled by inflation.
    pub fn amount(&self, year: Year, inflation: &InflationModel) -> f64 {
        if !self.schedule.contains(year) {
            return 0.0;
        }
        let rel = self.schedule.relative_year(year);
        self.rule.base_amount(rel, year, inflation.base_year) * inflation.multiplier(year)
    }
}
