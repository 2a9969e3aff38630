use serde::{Deserialize, Serialize};

use crate::types::PerPartner;

/// How a project's amount is divided between the partners.
/// A ratio `r` assigns `amount * r` to bear and `amount * (1 - r)` to cat,
/// for income and expense alike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SplitPolicy {
    /// Proportional to year-to-date income at the moment the project is
    /// evaluated (see `dynamic_ratio`).
    Dynamic,
    /// A hard-coded bear fraction, ignoring the dynamic input. Careers use
    /// 1.0 / 0.0 — a salary funds its earner's own bank and is not shared
    /// at the allocation step.
    Fixed(f64),
}

impl SplitPolicy {
    /// Resolve to an effective bear fraction given the current dynamic ratio.
    pub fn ratio(self, dynamic: f64) -> f64 {
        match self {
            SplitPolicy::Dynamic => dynamic,
            SplitPolicy::Fixed(r) => r,
        }
    }
}

/// Bear's share of combined income. Degrades to 0.0 when there is no income
/// to apportion yet (guards 0/0 — a defined default, not an error).
pub fn dynamic_ratio(income_bear: f64, income_cat: f64) -> f64 {
    let total = income_bear + income_cat;
    if total > 0.0 { income_bear / total } else { 0.0 }
}

/// Partition a signed amount by a bear fraction.
pub fn apply(amount: f64, ratio: f64) -> PerPartner {
    PerPartner { bear: amount * ratio, cat: amount * (1.0 - ratio) }
}
