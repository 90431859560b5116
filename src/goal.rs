use crate::storage::{KvStore, GOAL_COUNT_KEY, GOAL_DESCRIPTION_KEY};

pub const DEFAULT_TARGET: u32 = 3;
pub const DEFAULT_DESCRIPTION: &str = "task completion progress";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub target: u32,
    pub description: String,
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

/// Reads the stored goal. A target that is absent, malformed, or zero loads
/// as the default; an absent or empty description likewise.
pub fn load(store: &KvStore) -> Goal {
    let target = match store.get(GOAL_COUNT_KEY, DEFAULT_TARGET) {
        0 => DEFAULT_TARGET,
        value => value,
    };
    Goal {
        target,
        description: store.get_text(GOAL_DESCRIPTION_KEY, DEFAULT_DESCRIPTION),
    }
}

/// Trimmed integer parse of the target field; unparseable input falls back
/// to the default target rather than failing.
pub fn parse_target(input: &str) -> i64 {
    input.trim().parse().unwrap_or(i64::from(DEFAULT_TARGET))
}

/// Strips quote characters and trims; an empty result falls back to the
/// default description.
pub fn sanitize_description(input: &str) -> String {
    let cleaned: String = input.chars().filter(|c| *c != '\'' && *c != '"').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Applies a goal update. A parsed target below 1 is rejected with no state
/// change; otherwise both fields are stored (the description as plain text)
/// and the new goal returned.
pub fn set(store: &mut KvStore, target_input: &str, description_input: &str) -> Option<Goal> {
    let target = parse_target(target_input);
    if target < 1 {
        return None;
    }
    let target = target as u32;
    let description = sanitize_description(description_input);
    store.set(GOAL_COUNT_KEY, &target);
    store.set_text(GOAL_DESCRIPTION_KEY, &description);
    Some(Goal { target, description })
}
