use anyhow::{Context, Result};
use regex::Regex;

use super::models::TimeControlCategory;

/// Classifies raw time-control strings of the form `base+increment`.
/// Anything that does not parse, or parses with a zero increment, counts as
/// a fixed time budget.
pub struct TimeControlParser {
    base_increment_regex: Regex,
}

impl TimeControlParser {
    pub fn new() -> Result<Self> {
        let base_increment_regex = Self::compile_regex()?;
        Ok(Self {
            base_increment_regex,
        })
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"^(\d+)\+(\d+)$").context("Failed to compile time control regex")
    }

    pub fn categorize(&self, raw: &str) -> TimeControlCategory {
        match self.increment_seconds(raw) {
            Some(increment) if increment > 0 => TimeControlCategory::Increment,
            _ => TimeControlCategory::Standard,
        }
    }

    fn increment_seconds(&self, raw: &str) -> Option<u32> {
        let captures = self.base_increment_regex.captures(raw.trim())?;
        captures.get(2)?.as_str().parse().ok()
    }
}
