use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns a process-wide unique counter value for default test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Returns a unique, well-formed 24 character hexadecimal document key.
pub fn next_object_id() -> String {
    format!("{:024x}", next_id())
}
