use serde::{Deserialize, Serialize};

use crate::inflation::InflationModel;
use crate::project::{CostRule, Project, Schedule};
use crate::split::SplitPolicy;
use crate::types::Year;

/// The full plan: global constants plus the ordered project list.
/// Project order matters — the dynamic split for each project is computed
/// from the income already accumulated by earlier projects that year, so
/// income streams come first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Annual inflation, percent.
    pub inflation_pct: f64,
    /// All plan amounts are stated in this year's dollars.
    pub base_year: Year,
    /// Used for the age shown in the per-year report.
    pub birth_year: Year,
    pub start_year: Year,
    /// Exclusive.
    pub end_year: Year,
    /// Years at or before this print full per-year detail.
    pub detail_year: Year,
    pub projects: Vec<Project>,
}

impl PlanConfig {
    pub fn inflation(&self) -> InflationModel {
        InflationModel::new(self.inflation_pct, self.base_year)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The canonical household plan, 2016 dollars throughout.
    pub fn canonical() -> Self {
        let far_future = Some(Year(3000));

        let projects = vec![
            // ── Income ────────────────────────────────────────────────────
            // After-tax salaries; 2016 blends a mid-year job change.
            Project::new(
                "Bear Career",
                Schedule::Recurring { start: Year(2016), end: Some(Year(2059)) },
                CostRule::Career {
                    annual: 180_000.0 * 0.64,
                    first_year: Some(
                        ((5.0 / 12.0) * 180_000.0 + (7.0 / 12.0) * 65_000.0) * 0.64,
                    ),
                },
                SplitPolicy::Fixed(1.0),
            ),
            // Cat's career pauses for parental leave, then resumes.
            Project::new(
                "Cat Career",
                Schedule::Recurring { start: Year(2016), end: Some(Year(2021)) },
                CostRule::Career {
                    annual: 105_000.0 * 0.66,
                    first_year: Some(
                        ((6.0 / 12.0) * 105_000.0 + (6.0 / 12.0) * 75_000.0) * 0.66,
                    ),
                },
                SplitPolicy::Fixed(0.0),
            ),
            Project::new(
                "Cat Career",
                Schedule::Recurring { start: Year(2026), end: Some(Year(2059)) },
                CostRule::Career { annual: 105_000.0 * 0.66, first_year: None },
                SplitPolicy::Fixed(0.0),
            ),
            // ── Recurring expenses ────────────────────────────────────────
            Project::new(
                "Living Expenses",
                Schedule::Recurring { start: Year(2016), end: far_future },
                CostRule::FlatRecurring { annual: -2_000.0 * 12.0 },
                SplitPolicy::Dynamic,
            ),
            Project::new(
                "Vacation",
                Schedule::Recurring { start: Year(2016), end: far_future },
                CostRule::FlatRecurring { annual: -6_000.0 },
                SplitPolicy::Fixed(0.5),
            ),
            Project::new(
                "Gifts",
                Schedule::Recurring { start: Year(2016), end: far_future },
                CostRule::FlatRecurring { annual: -6_000.0 },
                SplitPolicy::Fixed(0.5),
            ),
            Project::new(
                "Pet-Friendly Rent",
                Schedule::Recurring { start: Year(2016), end: Some(Year(2028)) },
                CostRule::EscalatingRent { monthly: -2_900.0, annual_escalation: 1.09 },
                SplitPolicy::Dynamic,
            ),
            Project::new(
                "Shiba",
                Schedule::Recurring { start: Year(2017), end: Some(Year(2032)) },
                CostRule::Amortized {
                    upfront: -2_500.0,
                    annual: -150.0 * 12.0,
                    annual_after: 0.0, // expected 15-year life
                    change_after: 15,
                },
                SplitPolicy::Fixed(0.5),
            ),
            // ── Upcoming projects ─────────────────────────────────────────
            Project::new(
                "Engagement",
                Schedule::OneTime { year: Year(2017) },
                CostRule::LumpSum { amount: -73_000.0 },
                SplitPolicy::Fixed(1.0),
            ),
            Project::new(
                "Marriage",
                Schedule::OneTime { year: Year(2018) },
                CostRule::LumpSum { amount: -70_000.0 },
                SplitPolicy::Dynamic,
            ),
            Project::new(
                "First Child",
                Schedule::Recurring { start: Year(2022), end: None },
                CostRule::DependentCare {
                    child: -20_000.0,
                    preteen: -24_000.0,
                    school: -48_000.0, // private school
                    college: -60_000.0,
                    adult: -2_000.0,
                },
                SplitPolicy::Dynamic,
            ),
            Project::new(
                "Second Child",
                Schedule::Recurring { start: Year(2024), end: None },
                CostRule::DependentCare {
                    child: -20_000.0,
                    preteen: -22_000.0,
                    school: -44_000.0,
                    college: -60_000.0,
                    adult: -2_000.0,
                },
                SplitPolicy::Dynamic,
            ),
            Project::new(
                "Apartment",
                Schedule::Recurring { start: Year(2029), end: Some(Year(2029 + 30)) },
                CostRule::Amortized {
                    upfront: -120_000.0,
                    annual: -6_000.0 * 12.0,
                    annual_after: -1_500.0 * 12.0, // 30-year mortgage
                    change_after: 30,
                },
                SplitPolicy::Dynamic,
            ),
        ];

        PlanConfig {
            inflation_pct: 1.8,
            base_year: Year(2016),
            birth_year: Year(1989),
            start_year: Year(2016),
            end_year: Year(2055),
            detail_year: Year(2020),
            projects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_income_streams_come_first() {
        let cfg = PlanConfig::canonical();
        assert!(cfg.projects.len() >= 3);
        for p in &cfg.projects[..3] {
            assert!(
                matches!(p.rule, CostRule::Career { .. }),
                "careers must be evaluated before expenses, found {:?}",
                p.name
            );
        }
    }

    #[test]
    fn canonical_careers_pin_their_own_split() {
        let cfg = PlanConfig::canonical();
        assert_eq!(cfg.projects[0].split, SplitPolicy::Fixed(1.0));
        assert_eq!(cfg.projects[1].split, SplitPolicy::Fixed(0.0));
        assert_eq!(cfg.projects[2].split, SplitPolicy::Fixed(0.0));
    }

    #[test]
    fn canonical_horizon_and_constants() {
        let cfg = PlanConfig::canonical();
        assert_eq!(cfg.start_year, Year(2016));
        assert_eq!(cfg.end_year, Year(2055));
        assert_eq!(cfg.detail_year, Year(2020));
        assert_eq!(cfg.inflation().multiplier(Year(2016)), 1.0);
    }

    #[test]
    fn plan_round_trips_through_json() {
        let cfg = PlanConfig::canonical();
        let json = serde_json::to_string(&cfg).unwrap();
        let back = PlanConfig::from_json(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn plan_parses_from_handwritten_json() {
        let json = r#"{
            "inflation_pct": 0.0,
            "base_year": 2016,
            "birth_year": 1989,
            "start_year": 2016,
            "end_year": 2018,
            "detail_year": 2016,
            "projects": [
                {
                    "name": "Salary",
                    "schedule": { "Recurring": { "start": 2016, "end": 2018 } },
                    "rule": { "Career": { "annual": 1000.0, "first_year": null } },
                    "split": { "Fixed": 1.0 }
                },
                {
                    "name": "Wedding",
                    "schedule": { "OneTime": { "year": 2017 } },
                    "rule": { "LumpSum": { "amount": -500.0 } },
                    "split": "Dynamic"
                }
            ]
        }"#;
        let cfg = PlanConfig::from_json(json).expect("handwritten plan must parse");
        assert_eq!(cfg.projects.len(), 2);
        assert_eq!(cfg.projects[1].schedule, Schedule::OneTime { year: Year(2017) });
    }
}
