//! Rule engine for process selection.
//!
//! Composes dispatching rules in sequence (primary rule, then
//! tie-breakers). Processes still tied after every rule keep their
//! input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::ProcessInput;

/// A composable rule engine for process prioritization.
///
/// Rules are applied in sequence; the next rule is consulted only when
/// the previous one ties.
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sorts processes by priority (highest priority first).
    ///
    /// Returns indices into `processes`. The sort is stable, so equal
    /// processes keep their input order.
    pub fn sort_indices(&self, processes: &[ProcessInput]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    /// Returns the index of the highest-priority of `count` candidates,
    /// fetched by index through `candidate`.
    ///
    /// Scans indices in order and keeps the first minimum.
    pub fn select_best<'a, F>(&self, count: usize, candidate: F) -> Option<usize>
    where
        F: Fn(usize) -> &'a ProcessInput,
    {
        let mut best: Option<usize> = None;
        for i in 0..count {
            match best {
                Some(b) if self.compare(candidate(i), candidate(b)) != Ordering::Less => {}
                _ => best = Some(i),
            }
        }
        best
    }

    fn compare(&self, a: &ProcessInput, b: &ProcessInput) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
