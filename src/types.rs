use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// A calendar year. Signed so that exponents relative to the base year
/// stay well-defined for years before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(pub i32);

impl Year {
    /// Years elapsed since `start` (negative before it).
    pub fn since(self, start: Year) -> i32 {
        self.0 - start.0
    }

    pub fn next(self) -> Year {
        Year(self.0 + 1)
    }

    pub fn prev(self) -> Year {
        Year(self.0 - 1)
    }
}

impl Sub for Year {
    type Output = i32;

    fn sub(self, rhs: Year) -> i32 {
        self.0 - rhs.0
    }
}

/// A dollar quantity tracked separately for each partner.
/// "Bear" and "cat" are the two members of the household.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerPartner {
    pub bear: f64,
    pub cat: f64,
}

impl PerPartner {
    pub const ZERO: PerPartner = PerPartner { bear: 0.0, cat: 0.0 };

    pub fn new(bear: f64, cat: f64) -> Self {
        PerPartner { bear, cat }
    }

    pub fn total(self) -> f64 {
        self.bear + self.cat
    }

    /// Whether a project contributed nothing this year (both shares zero).
    pub fn is_zero(self) -> bool {
        self.bear == 0.0 && self.cat == 0.0
    }
}

impl Add for PerPartner {
    type Output = PerPartner;

    fn add(self, rhs: PerPartner) -> PerPartner {
        PerPartner { bear: self.bear + rhs.bear, cat: self.cat + rhs.cat }
    }
}

impl AddAssign for PerPartner {
    fn add_assign(&mut self, rhs: PerPartner) {
        self.bear += rhs.bear;
        self.cat += rhs.cat;
    }
}
