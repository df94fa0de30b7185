// Directory view state machine
use super::supervisor::Supervisor;
use std::collections::HashSet;

/// `Loading` until the single list fetch resolves, then `Ready`. A failed
/// fetch resolves to `Ready` with no rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DirectoryState {
    #[default]
    Loading,
    Ready(Vec<Supervisor>),
}

impl DirectoryState {
    pub fn resolve<E>(self, outcome: Result<Vec<Supervisor>, E>) -> Self {
        match self {
            DirectoryState::Loading => DirectoryState::Ready(outcome.unwrap_or_default()),
            ready @ DirectoryState::Ready(_) => ready,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DirectoryState::Loading)
    }

    pub fn rows(&self) -> &[Supervisor] {
        match self {
            DirectoryState::Loading => &[],
            DirectoryState::Ready(rows) => rows,
        }
    }
}

/// Identification numbers that appear more than once. Rows are keyed by
/// this field, so any hit here is an upstream data problem.
pub fn duplicate_keys(rows: &[Supervisor]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for row in rows {
        let key = row.identification_number.as_str();
        if !seen.insert(key) && !duplicates.contains(&key) {
            duplicates.push(key);
        }
    }
    duplicates
}
