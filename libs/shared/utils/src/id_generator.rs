//! Human-readable sequential identifiers (`P1`, `P2`, `D7`, ...).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdGenerationError {
    #[error("Identifier '{0}' does not start with prefix '{1}'")]
    MissingPrefix(String, char),

    #[error("Identifier '{0}' has a non-numeric suffix")]
    InvalidSuffix(String),

    #[error("Identifier sequence for prefix '{0}' is exhausted")]
    Exhausted(char),
}

/// Compute the identifier following the highest one in `existing_ids`.
///
/// Each id is the prefix followed by an unsigned integer, possibly padded with
/// trailing whitespace (fixed-width columns). With no existing ids the result
/// is `<prefix>1`. The whole set must be scanned on every call, so callers run
/// this inside the same write transaction as the insert that uses the result.
pub fn next_id<I, S>(prefix: char, existing_ids: I) -> Result<String, IdGenerationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut highest: u32 = 0;

    for id in existing_ids {
        let id = id.as_ref();
        let suffix = id
            .strip_prefix(prefix)
            .ok_or_else(|| IdGenerationError::MissingPrefix(id.to_string(), prefix))?;

        let number: u32 = suffix
            .trim_end()
            .parse()
            .map_err(|_| IdGenerationError::InvalidSuffix(id.to_string()))?;

        highest = highest.max(number);
    }

    let next = highest
        .checked_add(1)
        .ok_or(IdGenerationError::Exhausted(prefix))?;

    Ok(format!("{}{}", prefix, next))
}
