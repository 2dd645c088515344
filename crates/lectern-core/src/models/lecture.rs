//! Lecture model definition and related functionality.

use serde::{Deserialize, Serialize};

/// A single schedulable lecture held by the item store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lecture {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Module number; primary admission key
    pub module: i64,

    /// Submodule number; breaks ties within a module
    pub submodule: i64,

    /// Display name of the lecture
    pub topic: String,

    /// Size metric carried through from the import (e.g. megabytes)
    #[serde(default)]
    pub size: f64,

    /// Viewing time in hours
    #[serde(default)]
    pub duration: f64,

    /// Whether the lecture has been watched
    #[serde(default)]
    pub completed: bool,
}

impl Lecture {
    /// Short display key such as `3.07`.
    pub fn key(&self) -> String {
        format_key(self.module, self.submodule)
    }

    /// Admission order key used by the scheduler and the store.
    pub fn order_key(&self) -> (i64, i64) {
        (self.module, self.submodule)
    }
}

/// A normalized lecture that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLecture {
    pub module: i64,
    pub submodule: i64,
    pub topic: String,
    pub size: f64,
    pub duration: f64,
    pub completed: bool,
}

/// Formats `module.submodule` with the submodule padded to two digits.
pub fn format_key(module: i64, submodule: i64) -> String {
    format!("{module}.{submodule:02}")
}
