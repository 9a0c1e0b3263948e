#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskCompleted(i64),
    TaskReopened(i64),
    TaskNotFound(i64),
    TaskTextEmpty,
    TasksHeader,
    NoTasksFound,
    EditingTask(String),
    ConfirmDeleteTask(String),
    OperationCancelled,
    PromptTaskText,

    // === STORAGE MESSAGES ===
    StoreUnreadable(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigRemoved,
    PromptSelectModules,
    ConfigModuleStorage,
    ConfigModuleView,
    PromptStorageDir,
    PromptShowDone,
}
