//! Persistent task list with single-slot edit state.
//!
//! `TaskList` owns the ordered list of tasks and writes the whole list
//! through to its key-value store after every mutation. At most one task
//! can be in the middle of an edit: `begin_edit` marks it and seeds a
//! scratch string, `commit_edit` writes the scratch back into the record.
//!
//! Mutations are total over the list state. An unknown ID or blank add
//! text is a silent no-op, never an error; the only errors that surface
//! are storage failures.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::msg_warning;
use crate::store::kv::{FileKv, KvStore};
use anyhow::Result;
use chrono::Utc;

/// Fixed key the task list is stored under.
pub const STORAGE_KEY: &str = "tasks";

pub struct TaskList {
    store: Box<dyn KvStore>,
    tasks: Vec<Task>,
    edit_target: Option<i64>,
    edit_scratch: String,
}

impl TaskList {
    /// Opens the task list over the default file-backed store, honoring a
    /// configured data directory override.
    pub fn new() -> Result<Self> {
        let config = Config::read()?;
        let store = match config.storage.and_then(|storage| storage.dir) {
            Some(dir) => FileKv::in_dir(dir),
            None => FileKv::new(),
        };
        Self::with_store(Box::new(store))
    }

    /// Opens the task list over an injected store.
    ///
    /// A missing key starts the list empty. Stored data that does not
    /// parse is dropped with a warning and the list also starts empty;
    /// the unreadable value is left in place until the next write.
    pub fn with_store(store: Box<dyn KvStore>) -> Result<Self> {
        let tasks: Vec<Task> = match store.get(STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(tasks) => tasks,
                Err(err) => {
                    msg_warning!(Message::StoreUnreadable(err.to_string()));
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(TaskList {
            store,
            tasks,
            edit_target: None,
            edit_scratch: String::new(),
        })
    }

    /// Appends a new pending task and returns its ID, or `None` when the
    /// trimmed text is empty. The stored text keeps its whitespace; the
    /// trim is for validation only. Nothing is written for blank input.
    pub fn add(&mut self, text: &str) -> Result<Option<i64>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let id = self.next_id();
        self.tasks.push(Task::new(id, text));
        self.save()?;
        Ok(Some(id))
    }

    /// Removes the task with `id` and reports whether one was removed.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        self.save()?;
        Ok(removed)
    }

    /// Flips the completion flag of the task with `id` and returns the new
    /// value, or `None` for an unknown ID.
    pub fn toggle_done(&mut self, id: i64) -> Result<Option<bool>> {
        let done = match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.done = !task.done;
                Some(task.done)
            }
            None => None,
        };
        self.save()?;
        Ok(done)
    }

    /// Marks `id` as the task being edited and seeds the scratch text.
    /// Any prior uncommitted edit is discarded.
    pub fn begin_edit(&mut self, id: i64, current_text: &str) {
        self.edit_target = Some(id);
        self.edit_scratch = current_text.to_string();
    }

    /// Replaces the in-progress edit text.
    pub fn update_edit_scratch(&mut self, text: &str) {
        self.edit_scratch = text.to_string();
    }

    /// Writes the scratch into the task with `id` and clears the edit
    /// state. The scratch is committed as-is, empty included. The edit
    /// state clears even when `id` is unknown.
    pub fn commit_edit(&mut self, id: i64) -> Result<()> {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.text = self.edit_scratch.clone();
        }
        self.edit_target = None;
        self.edit_scratch.clear();
        self.save()
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn fetch(&self, filter: TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| match filter {
                TaskFilter::All => true,
                TaskFilter::Done => task.done,
                TaskFilter::Pending => !task.done,
            })
            .cloned()
            .collect()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn edit_target(&self) -> Option<i64> {
        self.edit_target
    }

    pub fn edit_scratch(&self) -> &str {
        &self.edit_scratch
    }

    /// Millisecond timestamp, bumped past the current maximum so IDs stay
    /// unique and increasing when tasks land in the same millisecond.
    fn next_id(&self) -> i64 {
        let id = Utc::now().timestamp_millis();
        match self.tasks.iter().map(|task| task.id).max() {
            Some(max) if id <= max => max + 1,
            _ => id,
        }
    }

    fn save(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.tasks)?;
        self.store.set(STORAGE_KEY, &raw)?;
        tracing::debug!("wrote {} tasks to store", self.tasks.len());
        Ok(())
    }
}
