//! Ordered Rule Tables
//!
//! Several classification tables are defined by the order in which their
//! conditions are checked, not by a ranking of the outcomes. Exposure class
//! is first-match-wins; structural and slab systems are last-match-wins,
//! where a later rule overrides an earlier assignment.

/// A single condition/outcome pair in an ordered table
pub struct Rule<C, T> {
    /// Short identifier, used in debug logging and tests
    pub name: &'static str,
    pub applies: fn(&C) -> bool,
    pub outcome: T,
}

impl<C, T> Rule<C, T> {
    pub fn new(name: &'static str, applies: fn(&C) -> bool, outcome: T) -> Self {
        Self { name, applies, outcome }
    }
}

/// Outcome of the first rule whose condition holds
pub fn first_match<'r, C, T>(rules: &'r [Rule<C, T>], ctx: &C) -> Option<&'r Rule<C, T>> {
    rules.iter().find(|rule| (rule.applies)(ctx))
}

/// Every rule whose condition holds, in table order
///
/// The last element is the winner of a last-match-wins table.
pub fn fired<'r, C, T>(rules: &'r [Rule<C, T>], ctx: &C) -> Vec<&'r Rule<C, T>> {
    rules.iter().filter(|rule| (rule.applies)(ctx)).collect()
}

/// Outcome of the last rule whose condition holds
pub fn last_match<'r, C, T>(rules: &'r [Rule<C, T>], ctx: &C) -> Option<&'r Rule<C, T>> {
    rules.iter().rev().find(|rule| (rule.applies)(ctx))
}
