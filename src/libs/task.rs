use serde::{Deserialize, Serialize};

/// A single to-do item, in the shape it is stored in.
///
/// Records missing any of the three fields make the stored payload
/// unreadable as a whole; unknown extra fields are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: i64, text: &str) -> Self {
        Task {
            id,
            text: text.to_string(),
            done: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Done,
    Pending,
}
