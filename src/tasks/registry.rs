// src/tasks/registry.rs - Catalogue of available drills

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Numbers,
    Text,
    Sequences,
    Matrix,
    Combinatorics,
    Coins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskInfo {
    pub name: &'static str,
    pub family: Family,
    pub summary: &'static str,
    /// Shape of the expected input.
    pub input: &'static str,
}

const fn task(
    name: &'static str,
    family: Family,
    summary: &'static str,
    input: &'static str,
) -> TaskInfo {
    TaskInfo {
        name,
        family,
        summary,
        input,
    }
}

pub const TASKS: &[TaskInfo] = &[
    task("prime", Family::Numbers, "Primality by trial division up to the square root", "n"),
    task("divisors", Family::Numbers, "All positive divisors, ascending", "n"),
    task("digits", Family::Numbers, "Recursive digit sum (digital root)", "n"),
    task("stairs", Family::Numbers, "Ways to climb n stairs with the given step sizes", "n"),
    task("words", Family::Text, "Word frequencies in sorted order", "text"),
    task("chars", Family::Text, "Character frequencies in sorted order", "text"),
    task("caesar", Family::Text, "Caesar shift of ASCII letters", "text"),
    task("dedup", Family::Sequences, "Drop repeats, keeping first occurrences", "integers"),
    task("prefix-sum", Family::Sequences, "Running totals", "integers"),
    task("second-largest", Family::Sequences, "Largest value below the maximum", "integers"),
    task("duplicate", Family::Sequences, "First value seen twice", "integers"),
    task("max-subarray", Family::Sequences, "Kadane's maximum subarray sum", "integers"),
    task("lis", Family::Sequences, "Longest strictly increasing subsequence", "integers"),
    task("sort", Family::Sequences, "Insertion sort", "integers"),
    task("flatten", Family::Sequences, "Flatten a nested list", "JSON array"),
    task("transpose", Family::Matrix, "Swap rows and columns", "matrix"),
    task("diagonal", Family::Matrix, "Sum of the diagonal of a square matrix", "matrix"),
    task("permutations", Family::Combinatorics, "Every ordering of the input", "integers"),
    task("combinations", Family::Combinatorics, "Every k-element selection", "integers"),
    task("subsets", Family::Combinatorics, "Every subset, by size", "integers"),
    task("coins", Family::Coins, "Greedy coin change", "amount"),
];

pub fn get_by_name(name: &str) -> Option<&'static TaskInfo> {
    TASKS.iter().find(|t| t.name == name)
}

pub fn get_by_family(family: Family) -> Vec<&'static TaskInfo> {
    TASKS.iter().filter(|t| t.family == family).collect()
}

/// One aligned line per task: name, summary and expected input.
pub fn render_table(tasks: &[TaskInfo]) -> String {
    let width = tasks.iter().map(|t| t.name.len()).max().unwrap_or(0);
    tasks
        .iter()
        .map(|t| format!("{:<width$}  {} (input: {})", t.name, t.summary, t.input))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let names: HashSet<&str> = TASKS.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), TASKS.len());
    }

    #[test]
    fn test_get_by_name() {
        assert_eq!(get_by_name("lis").unwrap().family, Family::Sequences);
        assert!(get_by_name("nonexistent").is_none());
    }

    #[test]
    fn test_render_table() {
        let out = render_table(TASKS);
        assert_eq!(out.lines().count(), TASKS.len());
        assert!(out.starts_with("prime "));
        assert!(out.contains("max-subarray"));
        assert_eq!(render_table(&[]), "");
    }

    #[test]
    fn test_every_family_populated() {
        for family in [
            Family::Numbers,
            Family::Text,
            Family::Sequences,
            Family::Matrix,
            Family::Combinatorics,
            Family::Coins,
        ] {
            assert!(!get_by_family(family).is_empty(), "{family:?} has no tasks");
        }
    }
}
