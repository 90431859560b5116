use crate::storage::{KvStore, TASKS_KEY};

/// Derives a category slug from a panel title: trimmed, lower-cased, runs
/// of whitespace collapsed to single hyphens. A blank title has no slug.
pub fn category_slug(title: &str) -> Option<String> {
    let slug = title
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() { None } else { Some(slug) }
}

/// Storage key for a category's pending list. Panels without a usable title
/// fall back to a positional key.
pub fn storage_key(category: &str, position: usize) -> String {
    match category_slug(category) {
        Some(slug) => format!("{TASKS_KEY}-{slug}"),
        None => format!("{TASKS_KEY}-list-{}", position + 1),
    }
}

pub fn load(store: &KvStore, key: &str) -> Vec<String> {
    store.get(key, Vec::new())
}

/// Appends trimmed task text to the pending list and re-stores it. Blank
/// input stores nothing and returns `None`.
pub fn add(store: &mut KvStore, key: &str, text: &str) -> Option<Vec<String>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let mut tasks = load(store, key);
    tasks.push(text.to_string());
    store.set(key, &tasks);
    Some(tasks)
}

/// Drops the first pending entry matching `text` and re-stores the list.
/// Reports whether anything was removed.
pub fn remove(store: &mut KvStore, key: &str, text: &str) -> (Vec<String>, bool) {
    let mut tasks = load(store, key);
    let found = match tasks.iter().position(|task| task == text) {
        Some(index) => {
            tasks.remove(index);
            store.set(key, &tasks);
            true
        }
        None => false,
    };
    (tasks, found)
}
