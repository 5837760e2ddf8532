use std::sync::atomic::{AtomicUsize, Ordering};

pub mod format;
pub mod notice;
pub mod persistence;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Short process-local id, used for transient objects such as notices.
pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Collision-resistant id for durable records (random 128-bit UUID).
pub fn generate_item_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
