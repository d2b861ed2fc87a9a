use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

pub mod assets;
pub mod version;

/// Ids for line items. Random UUIDs, so removed ids are never handed out
/// again within or across sessions.
pub fn generate_item_id() -> String {
    Uuid::new_v4().to_string()
}

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Cheap sequential ids for transient UI artifacts (toasts). Not stable
/// across sessions; use [`generate_item_id`] for anything domain-visible.
pub fn generate_ui_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}
