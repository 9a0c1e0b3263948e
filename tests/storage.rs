#[cfg(test)]
mod tests {
    use tudo::store::kv::{FileKv, KvStore, MemoryKv};
    use tudo::store::tasks::{TaskList, STORAGE_KEY};

    #[test]
    fn test_get_missing_key_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::in_dir(dir.path());

        assert_eq!(kv.get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv = FileKv::in_dir(dir.path());

        kv.set(STORAGE_KEY, "[]").unwrap();

        assert_eq!(kv.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv = FileKv::in_dir(dir.path());

        kv.set(STORAGE_KEY, "first").unwrap();
        kv.set(STORAGE_KEY, "second").unwrap();

        assert_eq!(kv.get(STORAGE_KEY).unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_task_list_survives_reload() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut tasks = TaskList::with_store(Box::new(FileKv::in_dir(dir.path()))).unwrap();
            let milk = tasks.add("buy milk").unwrap().unwrap();
            tasks.add("walk dog").unwrap();
            tasks.toggle_done(milk).unwrap();
        }

        let tasks = TaskList::with_store(Box::new(FileKv::in_dir(dir.path()))).unwrap();
        assert_eq!(tasks.tasks().len(), 2);
        assert_eq!(tasks.tasks()[0].text, "buy milk");
        assert!(tasks.tasks()[0].done);
        assert_eq!(tasks.tasks()[1].text, "walk dog");
        assert!(!tasks.tasks()[1].done);
    }

    #[test]
    fn test_blank_add_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();

        let mut tasks = TaskList::with_store(Box::new(FileKv::in_dir(dir.path()))).unwrap();
        tasks.add("   ").unwrap();

        let kv = FileKv::in_dir(dir.path());
        assert_eq!(kv.get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_store_falls_back_to_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv = FileKv::in_dir(dir.path());
        kv.set(STORAGE_KEY, "{definitely not json").unwrap();

        let tasks = TaskList::with_store(Box::new(FileKv::in_dir(dir.path()))).unwrap();

        assert!(tasks.tasks().is_empty());
    }

    #[test]
    fn test_record_missing_field_rejects_payload() {
        let mut kv = MemoryKv::new();
        kv.set(STORAGE_KEY, r#"[{"id": 1, "text": "no done flag"}]"#).unwrap();

        let tasks = TaskList::with_store(Box::new(kv)).unwrap();

        assert!(tasks.tasks().is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut kv = MemoryKv::new();
        kv.set(STORAGE_KEY, r#"[{"id": 1, "text": "carried over", "done": true, "color": "red"}]"#)
            .unwrap();

        let tasks = TaskList::with_store(Box::new(kv)).unwrap();

        assert_eq!(tasks.tasks().len(), 1);
        assert_eq!(tasks.tasks()[0].text, "carried over");
        assert!(tasks.tasks()[0].done);
    }

    #[test]
    fn test_stored_shape_is_an_array_of_records() {
        let dir = tempfile::tempdir().unwrap();

        let mut tasks = TaskList::with_store(Box::new(FileKv::in_dir(dir.path()))).unwrap();
        tasks.add("inspect me").unwrap();

        let kv = FileKv::in_dir(dir.path());
        let raw = kv.get(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0]["id"].is_i64());
        assert_eq!(records[0]["text"], "inspect me");
        assert_eq!(records[0]["done"], false);
    }
}
