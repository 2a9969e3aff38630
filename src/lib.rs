//! Year-by-year household cash-flow projection.
//!
//! A plan is a fixed, ordered list of [`project::Project`]s — careers,
//! rent, children, one-off purchases — each a pure function from year to a
//! signed, inflation-adjusted dollar amount. The [`simulation::Simulation`]
//! walks the years, splitting every amount between the two partners and
//! accumulating per-partner bank balances; the first year either balance
//! goes non-positive the projection halts and reports failure. On success
//! it reports the implied joint retirement salary in base-year dollars.

pub mod config;
pub mod inflation;
pub mod project;
pub mod report;
pub mod simulation;
pub mod split;
pub mod types;
