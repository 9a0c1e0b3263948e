use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TEXT"]);
        for task in tasks {
            table.add_row(row![task.id, if task.done { "x" } else { "" }, task.text]);
        }
        table.printstd();

        Ok(())
    }
}
