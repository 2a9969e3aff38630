use serde::Serialize;

use crate::config::PlanConfig;
use crate::inflation::InflationModel;
use crate::split::{self, dynamic_ratio};
use crate::types::{PerPartner, Year};

/// One project's non-zero contribution in a given year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub project: String,
    /// "Total cost" for one-time projects, "Year N" for recurring ones.
    pub label: String,
    pub shares: PerPartner,
}

/// Everything the report needs for one simulated year. `records[i]` is the
/// (start_year + i)-th year; a failed record is always the last one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearRecord {
    pub year: Year,
    pub age: i32,
    pub contributions: Vec<Contribution>,
    pub income: PerPartner,
    pub expense: PerPartner,
    /// Cumulative bank balances at the end of this year.
    pub bank: PerPartner,
    pub failed: bool,
}

impl YearRecord {
    pub fn net(&self) -> PerPartner {
        self.income + self.expense
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub failed_year: Option<Year>,
    /// Final bank balances (at the failure year if the plan failed).
    pub banks: PerPartner,
    /// Implied annual retirement salary per person, in base-year dollars.
    /// Present only on success.
    pub retirement_salary: Option<f64>,
}

/// Year-by-year projection of the plan. Deterministic and single-pass:
/// projects are evaluated in declared order each year because the dynamic
/// split depends on the income accumulated by earlier projects.
pub struct Simulation {
    config: PlanConfig,
    inflation: InflationModel,
    /// Completed years in order, for the report.
    pub records: Vec<YearRecord>,
    bank: PerPartner,
}

impl Simulation {
    pub fn from_config(config: PlanConfig) -> Self {
        let inflation = config.inflation();
        Simulation { config, inflation, records: Vec::new(), bank: PerPartner::ZERO }
    }

    /// Override the horizon (exclusive). Used in tests.
    pub fn until(mut self, end_year: Year) -> Self {
        self.config.end_year = end_year;
        self
    }

    /// Run every year in `[start_year, end_year)`, stopping early the first
    /// year either bank goes non-positive. Depletion is a domain outcome,
    /// not an error — the partial record log stays valid.
    pub fn run(&mut self) -> Outcome {
        let mut year = self.config.start_year;
        while year < self.config.end_year {
            let record = self.step(year);
            let failed = record.failed;
            self.records.push(record);

            if failed {
                return Outcome {
                    success: false,
                    failed_year: Some(year),
                    banks: self.bank,
                    retirement_salary: None,
                };
            }
            year = year.next();
        }

        // 4% rule: 25 years of drawdown, split between two people, stated
        // in base-year dollars.
        let last = self.config.end_year.prev();
        let salary = self.bank.total() / self.inflation.multiplier(last) / 25.0 / 2.0;

        Outcome {
            success: true,
            failed_year: None,
            banks: self.bank,
            retirement_salary: Some(salary),
        }
    }

    fn step(&mut self, year: Year) -> YearRecord {
        let mut income = PerPartner::ZERO;
        let mut expense = PerPartner::ZERO;
        let mut contributions = Vec::new();

        for project in &self.config.projects {
            // Recomputed before every project: only income from projects
            // already evaluated this year feeds the ratio.
            let ratio = project.split.ratio(dynamic_ratio(income.bear, income.cat));
            let shares = split::apply(project.amount(year, &self.inflation), ratio);

            if shares.bear >= 0.0 {
                income.bear += shares.bear;
            } else {
                expense.bear += shares.bear;
            }
            if shares.cat >= 0.0 {
                income.cat += shares.cat;
            } else {
                expense.cat += shares.cat;
            }

            if !shares.is_zero() {
                contributions.push(Contribution {
                    project: project.name.clone(),
                    label: project.schedule.label(year),
                    shares,
                });
            }
        }

        self.bank += income + expense;
        let failed = self.bank.bear <= 0.0 || self.bank.cat <= 0.0;

        YearRecord {
            year,
            age: year.since(self.config.birth_year),
            contributions,
            income,
            expense,
            bank: self.bank,
            failed,
        }
    }
}
