use std::fmt::Write;

use crate::simulation::{Outcome, YearRecord};
use crate::types::Year;

/// `$1,234.56`, with a leading `-` for negative amounts. Deliberately
/// locale-free — the model is US-dollar only.
pub fn currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let negative = value < 0.0 && cents > 0;
    let dollars = cents / 100;
    let fraction = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${grouped}.{fraction:02}", if negative { "-" } else { "" })
}

/// Render the full console report. One group per year at or before
/// `detail_year` — plus the failure year, which always prints in full
/// before the run stops. `quiet` drops the per-year groups and keeps only
/// the outcome lines.
pub fn render(
    records: &[YearRecord],
    outcome: &Outcome,
    detail_year: Year,
    base_year: Year,
    quiet: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "*".repeat(80));

    for rec in records {
        if quiet && !rec.failed {
            continue;
        }
        if rec.year > detail_year && !rec.failed {
            continue;
        }

        let _ = writeln!(out, "Year: {} ( Age {} )", rec.year.0, rec.age);
        for c in &rec.contributions {
            let _ = writeln!(
                out,
                "\t{} : {} / {} - {} - {}",
                currency(c.shares.total()),
                currency(c.shares.bear),
                currency(c.shares.cat),
                c.project,
                c.label,
            );
        }

        if rec.failed {
            let _ = writeln!(out, "####### FAIL {} ########", rec.year.0);
        }

        let net = rec.net();
        let _ = writeln!(out, "Bear Bank: {}", currency(rec.bank.bear));
        let _ = writeln!(out, "\tBear Income: {}", currency(rec.income.bear));
        let _ = writeln!(out, "\tBear Expense: {}", currency(rec.expense.bear));
        let _ = writeln!(out, "\tBear Net: {}", currency(net.bear));
        let _ = writeln!(out, "Cat Bank: {}", currency(rec.bank.cat));
        let _ = writeln!(out, "\tCat Income: {}", currency(rec.income.cat));
        let _ = writeln!(out, "\tCat Expense: {}", currency(rec.expense.cat));
        let _ = writeln!(out, "\tCat Net: {}", currency(net.cat));
        let _ = writeln!(out, "-------");
    }

    if let Some(salary) = outcome.retirement_salary {
        let _ = writeln!(out, "{}", "*".repeat(8));
        let _ = writeln!(
            out,
            "Congrats. You will each retire on a salary of {} ({}'s dollars)",
            currency(salary),
            base_year.0,
        );
        let _ = writeln!(out, "{}", "*".repeat(8));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlanConfig;
    use crate::project::{CostRule, Project, Schedule};
    use crate::simulation::Simulation;
    use crate::split::SplitPolicy;

    // ── Currency formatting ───────────────────────────────────────────────

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(5.0), "$5.00");
        assert_eq!(currency(1_234.56), "$1,234.56");
        assert_eq!(currency(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn currency_marks_negatives_with_a_leading_sign() {
        assert_eq!(currency(-1_950.0 * 12.0), "-$23,400.00");
        assert_eq!(currency(-0.5), "-$0.50");
    }

    #[test]
    fn currency_rounds_away_a_vanishing_negative() {
        // -0.001 rounds to zero cents; "$-0.00" would be noise.
        assert_eq!(currency(-0.001), "$0.00");
    }

    // ── Report shape ──────────────────────────────────────────────────────

    fn tiny_plan(expense: f64) -> PlanConfig {
        PlanConfig {
            inflation_pct: 0.0,
            base_year: Year(2016),
            birth_year: Year(1989),
            start_year: Year(2016),
            end_year: Year(2020),
            detail_year: Year(2017),
            projects: vec![
                Project::new(
                    "Bear Career",
                    Schedule::Recurring { start: Year(2016), end: None },
                    CostRule::Career { annual: 1_000.0, first_year: None },
                    SplitPolicy::Fixed(1.0),
                ),
                Project::new(
                    "Cat Career",
                    Schedule::Recurring { start: Year(2016), end: None },
                    CostRule::Career { annual: 1_000.0, first_year: None },
                    SplitPolicy::Fixed(0.0),
                ),
                Project::new(
                    "Rent",
                    Schedule::Recurring { start: Year(2016), end: None },
                    CostRule::FlatRecurring { annual: expense },
                    SplitPolicy::Dynamic,
                ),
            ],
        }
    }

    #[test]
    fn detail_cutoff_limits_year_groups() {
        let cfg = tiny_plan(-100.0);
        let detail = cfg.detail_year;
        let base = cfg.base_year;
        let mut sim = Simulation::from_config(cfg);
        let outcome = sim.run();

        let text = render(&sim.records, &outcome, detail, base, false);
        assert!(text.contains("Year: 2016 ( Age 27 )"));
        assert!(text.contains("Year: 2017"));
        assert!(!text.contains("Year: 2018"), "past the detail cutoff");
        assert!(text.contains("Congrats."));
    }

    #[test]
    fn failure_year_prints_in_full_even_past_the_cutoff() {
        // Two comfortable years, then a -7,000 bill from 2018 sinks both
        // banks — a year past the detail cutoff.
        let mut cfg = tiny_plan(-100.0);
        cfg.projects.push(Project::new(
            "Roof",
            Schedule::Recurring { start: Year(2018), end: None },
            CostRule::FlatRecurring { annual: -7_000.0 },
            SplitPolicy::Dynamic,
        ));
        let detail = cfg.detail_year;
        let base = cfg.base_year;
        let mut sim = Simulation::from_config(cfg);
        let outcome = sim.run();
        assert_eq!(outcome.failed_year, Some(Year(2018)));

        let text = render(&sim.records, &outcome, detail, base, false);
        assert!(text.contains("####### FAIL 2018 ########"));
        assert!(text.contains("Year: 2018"), "failure year gets a full group");
        assert!(text.contains("Rent"), "failure year lists contributions");
        assert!(!text.contains("Congrats."));
    }

    #[test]
    fn quiet_mode_keeps_only_outcome_lines() {
        let cfg = tiny_plan(-100.0);
        let detail = cfg.detail_year;
        let base = cfg.base_year;
        let mut sim = Simulation::from_config(cfg);
        let outcome = sim.run();

        let text = render(&sim.records, &outcome, detail, base, true);
        assert!(!text.contains("Year: 2016"));
        assert!(text.contains("Congrats."));
    }

    #[test]
    fn contribution_lines_show_total_then_shares() {
        let cfg = tiny_plan(-100.0);
        let detail = cfg.detail_year;
        let base = cfg.base_year;
        let mut sim = Simulation::from_config(cfg);
        let outcome = sim.run();

        let text = render(&sim.records, &outcome, detail, base, false);
        assert!(
            text.contains("\t-$100.00 : -$50.00 / -$50.00 - Rent - Year 0"),
            "unexpected contribution line in:\n{text}"
        );
    }
}
