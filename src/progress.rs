use crate::goal;
use crate::models::ProgressResponse;
use crate::records;
use crate::storage::KvStore;

/// Recomputes the aggregate completed count from the full record set and
/// renders it against the goal. Recompute and render are one operation,
/// taken after every mutation that can move either side.
pub fn snapshot(store: &KvStore) -> ProgressResponse {
    let goal = goal::load(store);
    let completed = records::count_all(store) as u64;
    let percentage = ((completed as f64 / f64::from(goal.target)) * 100.0).min(100.0);
    let description = goal::sanitize_description(&goal.description);
    let label = format!("{completed} / {} {description}", goal.target);

    ProgressResponse {
        completed,
        target: goal.target,
        description,
        percentage,
        label,
        goal_reached: completed >= u64::from(goal.target),
    }
}
