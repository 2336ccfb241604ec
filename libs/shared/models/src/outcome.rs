//! Closed result sets returned by the service layer.
//!
//! Services catch and log every storage fault themselves, so handlers only
//! ever see one of these variants and map it to a transport status.

#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum ListOutcome<T> {
    Listed(Vec<T>),
    Error,
}

#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum FetchOutcome<T> {
    Found(T),
    NotFound,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum CreateOutcome<K> {
    Created(K),
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum UpdateOutcome {
    Updated,
    NotFound,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RemoveOutcome {
    Removed,
    NotFound,
    /// Other rows still reference the entity.
    InUse,
    Error,
}

impl<T> FetchOutcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            FetchOutcome::Found(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for FetchOutcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => FetchOutcome::Found(value),
            None => FetchOutcome::NotFound,
        }
    }
}

impl UpdateOutcome {
    /// Interpret an affected-row count from a keyed `UPDATE`.
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            UpdateOutcome::NotFound
        } else {
            UpdateOutcome::Updated
        }
    }
}

impl RemoveOutcome {
    /// Interpret an affected-row count from a keyed `DELETE`.
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            RemoveOutcome::NotFound
        } else {
            RemoveOutcome::Removed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_affected_mapping() {
        assert_eq!(UpdateOutcome::from_rows_affected(0), UpdateOutcome::NotFound);
        assert_eq!(UpdateOutcome::from_rows_affected(1), UpdateOutcome::Updated);
        assert_eq!(RemoveOutcome::from_rows_affected(0), RemoveOutcome::NotFound);
        assert_eq!(RemoveOutcome::from_rows_affected(1), RemoveOutcome::Removed);
    }

    #[test]
    fn test_fetch_outcome_from_option() {
        assert_eq!(FetchOutcome::from(Some(3)), FetchOutcome::Found(3));
        assert_eq!(FetchOutcome::<i32>::from(None), FetchOutcome::NotFound);
        assert_eq!(FetchOutcome::Found("x").found(), Some("x"));
        assert_eq!(FetchOutcome::<&str>::Error.found(), None);
    }
}
