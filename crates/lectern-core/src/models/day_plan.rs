//! Day plan model produced by the scheduler.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Lecture;

/// Lectures assigned to one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Calendar day this plan covers
    pub date: Date,

    /// Whether `date` falls on Saturday or Sunday
    pub is_weekend: bool,

    /// Hours available on this day
    pub capacity: f64,

    /// Hours consumed by `lectures`
    pub used: f64,

    /// Lectures placed on this day, in admission order
    #[serde(default)]
    pub lectures: Vec<Lecture>,
}

impl DayPlan {
    /// Hours still free on this day. Never negative.
    pub fn remaining(&self) -> f64 {
        (self.capacity - self.used).max(0.0)
    }

    /// True when nothing was placed on this day.
    pub fn is_rest_day(&self) -> bool {
        self.lectures.is_empty()
    }
}
