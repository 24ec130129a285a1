//! Dependency tracking between calculated parameters

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{FormulaError, FormulaResult};

/// Dependency graph for formula parameters
///
/// Tracks which parameters depend on which other parameters so that a
/// configuration can be checked for circular formulas and ordered for
/// calculation. Ordered maps keep every traversal deterministic.
#[derive(Debug, Default, Clone)]
pub struct FormulaGraph {
    /// Parameter → parameters whose formulas reference it (dependents)
    dependents: BTreeMap<String, BTreeSet<String>>,
    /// Parameter → parameters its formula references (precedents)
    precedents: BTreeMap<String, BTreeSet<String>>,
    /// Parameters that have a formula
    targets: BTreeSet<String>,
}

impl FormulaGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(target, depends_on)` pairs
    pub fn from_formulas<'a, I, D>(formulas: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, D)>,
        D: IntoIterator<Item = &'a str>,
    {
        let mut graph = Self::new();
        for (target, depends_on) in formulas {
            graph.add_formula(target, depends_on);
        }
        graph
    }

    /// Register the formula of `target`, replacing any previous one
    pub fn add_formula<'a, D>(&mut self, target: &str, depends_on: D)
    where
        D: IntoIterator<Item = &'a str>,
    {
        self.clear_formula(target);
        self.targets.insert(target.to_string());
        for precedent in depends_on {
            self.add_dependency(precedent, target);
        }
    }

    /// Add a dependency: dependent depends on precedent
    pub fn add_dependency(&mut self, precedent: &str, dependent: &str) {
        self.dependents
            .entry(precedent.to_string())
            .or_default()
            .insert(dependent.to_string());
        self.precedents
            .entry(dependent.to_string())
            .or_default()
            .insert(precedent.to_string());
    }

    /// Remove the formula of a parameter (its outgoing references)
    pub fn clear_formula(&mut self, target: &str) {
        self.targets.remove(target);
        if let Some(precedents) = self.precedents.remove(target) {
            for precedent in precedents {
                if let Some(deps) = self.dependents.get_mut(&precedent) {
                    deps.remove(target);
                    if deps.is_empty() {
                        self.dependents.remove(&precedent);
                    }
                }
            }
        }
    }

    /// Parameters whose formulas reference `name`
    pub fn dependents(&self, name: &str) -> impl Iterator<Item = &str> + '_ {
        self.dependents
            .get(name)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Parameters referenced by the formula of `name`
    pub fn precedents(&self, name: &str) -> impl Iterator<Item = &str> + '_ {
        self.precedents
            .get(name)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Number of parameters with a formula
    pub fn formula_count(&self) -> usize {
        self.targets.len()
    }

    /// Detect a circular reference reachable from `name`
    pub fn has_cycle(&self, name: &str) -> bool {
        let mut visited = BTreeSet::new();
        self.detect_cycle(name, &mut visited).is_some()
    }

    /// Find one circular reference in the whole graph
    ///
    /// The returned path starts and ends with the same parameter, e.g.
    /// `["a", "b", "a"]`.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let mut visited = BTreeSet::new();
        self.targets
            .iter()
            .find_map(|target| self.detect_cycle(target, &mut visited))
    }

    /// Depth-first search from `start` over precedents
    ///
    /// Iterative, so chain length is bounded by memory rather than the call
    /// stack. Nodes already in `visited` are not searched again.
    fn detect_cycle<'a>(
        &'a self,
        start: &'a str,
        visited: &mut BTreeSet<&'a str>,
    ) -> Option<Vec<String>> {
        if !visited.insert(start) {
            return None;
        }

        // Current search path, with each entry's position in it
        let mut path = vec![start];
        let mut on_path: BTreeMap<&'a str, usize> = BTreeMap::from([(start, 0)]);
        let mut frames = vec![self.precedents(start)];

        while let Some(frame) = frames.last_mut() {
            match frame.next() {
                Some(next) => {
                    if let Some(&pos) = on_path.get(next) {
                        let mut cycle: Vec<String> =
                            path[pos..].iter().map(|n| n.to_string()).collect();
                        cycle.push(next.to_string());
                        return Some(cycle);
                    }
                    if visited.insert(next) {
                        on_path.insert(next, path.len());
                        path.push(next);
                        frames.push(self.precedents(next));
                    }
                }
                None => {
                    frames.pop();
                    if let Some(done) = path.pop() {
                        on_path.remove(done);
                    }
                }
            }
        }

        None
    }

    /// Order the parameters with formulas so that every formula comes after
    /// the formulas it references
    ///
    /// Ties are broken by name.
    pub fn evaluation_order(&self) -> FormulaResult<Vec<String>> {
        if let Some(cycle) = self.find_cycle() {
            return Err(FormulaError::CircularReference(cycle));
        }

        let mut pending: BTreeMap<&str, usize> = self
            .targets
            .iter()
            .map(|t| {
                let count = self
                    .precedents(t)
                    .filter(|p| self.targets.contains(*p))
                    .count();
                (t.as_str(), count)
            })
            .collect();
        let mut ready: BTreeSet<&str> = pending
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(name, _)| *name)
            .collect();

        let mut order = Vec::with_capacity(pending.len());
        while let Some(next) = ready.pop_first() {
            pending.remove(next);
            for dependent in self.dependents(next) {
                if let Some(count) = pending.get_mut(dependent) {
                    *count -= 1;
                    if *count == 0 {
                        ready.insert(dependent);
                    }
                }
            }
            order.push(next.to_string());
        }

        Ok(order)
    }

    /// Clear the entire graph
    pub fn clear(&mut self) {
        self.dependents.clear();
        self.precedents.clear();
        self.targets.clear();
    }
}
