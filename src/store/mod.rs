//! In-memory task store.
//!
//! One store instance backs each API generation; the generations never share
//! records. Lookup is a linear scan; the expected working set is a handful
//! of records.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

// ── Task ─────────────────────────────────────────────────────────────────────

/// A single task record. Field names on the wire follow the public API
/// contract (`task_id`, `task_title`, `task_desc`, `is_finished`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task_id")]
    pub id: i64,
    #[serde(rename = "task_title")]
    pub title: String,
    #[serde(rename = "task_desc")]
    pub description: String,
    #[serde(rename = "is_finished")]
    pub finished: bool,
}

// ── Store ────────────────────────────────────────────────────────────────────

struct StoreInner {
    tasks: Vec<Task>,
    /// Next id to hand out. Monotonic: ids are never reused, even after
    /// deletions.
    next_id: i64,
}

/// Ordered in-memory collection of tasks behind a single RwLock.
///
/// Mutations are short and never await anything while holding the lock.
pub struct TaskStore {
    inner: RwLock<StoreInner>,
}

impl TaskStore {
    /// Empty store; first created task gets id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Store pre-populated with the single record the service has always
    /// shipped with, so a fresh daemon answers `GET …/tasks/1`.
    pub fn seeded() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                tasks: vec![Task {
                    id: 1,
                    title: "Laboratory Activity".to_string(),
                    description: "Create Lab Act 2".to_string(),
                    finished: false,
                }],
                next_id: 2,
            }),
        }
    }

    /// First task whose id matches, or `None`. Absence is not an error.
    pub async fn find(&self, id: i64) -> Option<Task> {
        let inner = self.inner.read().await;
        inner.tasks.iter().find(|t| t.id == id).cloned()
    }

    /// Snapshot of all tasks in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.inner.read().await.tasks.clone()
    }

    /// Append a new task with the next monotonic id and return it.
    pub async fn create(&self, title: String, description: String, finished: bool) -> Task {
        let mut inner = self.inner.write().await;
        let task = Task {
            id: inner.next_id,
            title,
            description,
            finished,
        };
        inner.next_id += 1;
        inner.tasks.push(task.clone());
        debug!(id = task.id, "task created");
        task
    }

    /// Overwrite all three mutable fields of the task with the given id.
    ///
    /// There are no partial-patch semantics: whatever the caller supplies
    /// replaces the stored values wholesale. Returns the updated record, or
    /// `None` if no task has that id.
    pub async fn update(
        &self,
        id: i64,
        title: String,
        description: String,
        finished: bool,
    ) -> Option<Task> {
        let mut inner = self.inner.write().await;
        let task = inner.tasks.iter_mut().find(|t| t.id == id)?;
        task.title = title;
        task.description = description;
        task.finished = finished;
        debug!(id, "task updated");
        Some(task.clone())
    }

    /// Remove the first task with the given id. Returns `false` if absent.
    pub async fn delete(&self, id: i64) -> bool {
        let mut inner = self.inner.write().await;
        let Some(pos) = inner.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        inner.tasks.remove(pos);
        debug!(id, "task deleted");
        true
    }

    /// Current number of stored tasks.
    pub async fn len(&self) -> usize {
        self.inner.read().await.tasks.len()
    }

    /// Returns `true` if the store holds no tasks.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.tasks.is_empty()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe wrapper for use in `AppContext`.
pub type SharedTaskStore = Arc<TaskStore>;
