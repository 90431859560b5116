use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    pub category: String,
    #[serde(default)]
    pub position: usize,
}

#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    pub category: String,
    #[serde(default)]
    pub position: usize,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveRecordRequest {
    pub date: String,
    pub text: String,
}

/// Raw input-field values; the target is parsed server-side so that a
/// garbled number can fall back to the default instead of failing the
/// request outright.
#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub target: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub category: String,
    pub slug_key: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub date: String,
    pub records: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub completed: u64,
    pub target: u32,
    pub description: String,
    pub percentage: f64,
    pub label: String,
    pub goal_reached: bool,
}

#[derive(Debug, Serialize)]
pub struct GoalResponse {
    pub target: u32,
    pub description: String,
    pub progress: ProgressResponse,
}

#[derive(Debug, Serialize)]
pub struct CompleteResponse {
    pub tasks: Vec<String>,
    pub date: String,
    pub records: Vec<String>,
    pub progress: ProgressResponse,
}

#[derive(Debug, Serialize)]
pub struct RemoveRecordResponse {
    pub date: String,
    pub records: Vec<String>,
    pub progress: ProgressResponse,
}
