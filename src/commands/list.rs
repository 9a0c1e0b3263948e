use crate::{
    libs::{config::Config, messages::Message, task::TaskFilter, view::View},
    msg_info, msg_print,
    store::tasks::TaskList,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show completed tasks only
    #[arg(long)]
    done: bool,
    /// Show pending tasks only
    #[arg(long, conflicts_with = "done")]
    pending: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let tasks = TaskList::new()?;

    let filter = if args.done {
        TaskFilter::Done
    } else if args.pending {
        TaskFilter::Pending
    } else if Config::read()?.view.unwrap_or_default().show_done {
        TaskFilter::All
    } else {
        TaskFilter::Pending
    };

    let records = tasks.fetch(filter);
    if records.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&records)?;
    Ok(())
}
