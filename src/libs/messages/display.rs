//! Display implementation for application messages.
//!
//! All user-facing text lives here, in one place, so the wording stays
//! consistent and the call sites work with typed `Message` values.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task created with ID {}", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskCompleted(id) => format!("Task {} completed", id),
            Message::TaskReopened(id) => format!("Task {} reopened", id),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TaskTextEmpty => "Task text is empty, nothing added".to_string(),
            Message::TasksHeader => "Tasks".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::EditingTask(text) => format!("Editing task: {}", text),
            Message::ConfirmDeleteTask(text) => format!("Delete task '{}'?", text),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::PromptTaskText => "Task text".to_string(),

            // === STORAGE MESSAGES ===
            Message::StoreUnreadable(err) => {
                format!("Stored task data is unreadable ({}), starting with an empty list", err)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigRemoved => "Configuration removed".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigModuleStorage => "Storage configuration".to_string(),
            Message::ConfigModuleView => "View configuration".to_string(),
            Message::PromptStorageDir => "Data directory (leave empty for the platform default)".to_string(),
            Message::PromptShowDone => "Show completed tasks in the default listing?".to_string(),
        };
        write!(f, "{}", text)
    }
}
