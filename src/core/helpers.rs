use std::sync::{LockResult, PoisonError};

/// Case-insensitive substring match. An empty pattern matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Hand out the current value of `counter` as an id and advance it.
pub fn next_id(counter: &mut u64) -> String {
    let id = counter.to_string();
    *counter += 1;
    id
}

/// Take a guard even if a previous holder panicked. Every store operation
/// completes its writes before any point that could unwind, so the data
/// behind a poisoned lock is still consistent.
pub fn recover<G>(result: LockResult<G>) -> G {
    result.unwrap_or_else(PoisonError::into_inner)
}
