use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct TaskListResponse {
    slug_key: String,
    tasks: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ProgressResponse {
    completed: u64,
    target: u32,
    label: String,
    goal_reached: bool,
}

#[derive(Debug, Deserialize)]
struct CompleteResponse {
    tasks: Vec<String>,
    date: String,
    records: Vec<String>,
    progress: ProgressResponse,
}

#[derive(Debug, Deserialize)]
struct RecordsResponse {
    records: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RemoveRecordResponse {
    records: Vec<String>,
    progress: ProgressResponse,
}

#[derive(Debug, Deserialize)]
struct GoalResponse {
    target: u32,
    description: String,
    progress: ProgressResponse,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("task_board_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/progress")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_task_board"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_tasks(client: &Client, base_url: &str, category: &str) -> TaskListResponse {
    client
        .get(format!("{base_url}/api/tasks"))
        .query(&[("category", category), ("position", "0")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn fetch_progress(client: &Client, base_url: &str) -> ProgressResponse {
    client
        .get(format!("{base_url}/api/progress"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_added_task_appears_in_category_list() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let added: TaskListResponse = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({
            "category": "Daily Chores",
            "text": "  water plants  "
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(added.slug_key, "todo-items-daily-chores");
    assert!(added.tasks.contains(&"water plants".to_string()));

    let listed = fetch_tasks(&client, &server.base_url, "Daily Chores").await;
    assert!(listed.tasks.contains(&"water plants".to_string()));
}

#[tokio::test]
async fn http_blank_task_text_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "category": "Daily Chores", "text": "   " }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_complete_moves_task_into_today_records() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_progress(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "category": "Deep Work", "text": "draft outline" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let completed: CompleteResponse = client
        .post(format!("{}/api/tasks/complete", server.base_url))
        .json(&serde_json::json!({ "category": "Deep Work", "text": "draft outline" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(!completed.tasks.contains(&"draft outline".to_string()));
    assert!(completed.records.contains(&"draft outline".to_string()));
    assert!(!completed.date.is_empty());
    assert_eq!(completed.progress.completed, before.completed + 1);

    let records: RecordsResponse = client
        .get(format!("{}/api/records", server.base_url))
        .query(&[("date", completed.date.as_str())])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(records.records.contains(&"draft outline".to_string()));
}

#[tokio::test]
async fn http_completing_unknown_task_is_not_found() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/tasks/complete", server.base_url))
        .json(&serde_json::json!({ "category": "Deep Work", "text": "never added" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_removing_a_record_shrinks_the_aggregate_count() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "category": "Errands", "text": "post letter" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let completed: CompleteResponse = client
        .post(format!("{}/api/tasks/complete", server.base_url))
        .json(&serde_json::json!({ "category": "Errands", "text": "post letter" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let removed: RemoveRecordResponse = client
        .post(format!("{}/api/records/remove", server.base_url))
        .json(&serde_json::json!({ "date": completed.date, "text": "post letter" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(!removed.records.contains(&"post letter".to_string()));
    assert_eq!(removed.progress.completed, completed.progress.completed - 1);
}

#[tokio::test]
async fn http_goal_below_one_is_rejected_and_state_kept() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: GoalResponse = client
        .get(format!("{}/api/goal", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let response = client
        .post(format!("{}/api/goal", server.base_url))
        .json(&serde_json::json!({ "target": "0", "description": "pages read" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let after: GoalResponse = client
        .get(format!("{}/api/goal", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after.target, before.target);
    assert_eq!(after.description, before.description);
}

#[tokio::test]
async fn http_goal_update_changes_progress_label() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let updated: GoalResponse = client
        .post(format!("{}/api/goal", server.base_url))
        .json(&serde_json::json!({ "target": "4", "description": "\"pages\" read" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(updated.target, 4);
    assert_eq!(updated.description, "pages read");
    assert_eq!(updated.progress.target, 4);
    assert!(updated.progress.label.ends_with("/ 4 pages read"));
    assert!(!updated.progress.goal_reached);
}
