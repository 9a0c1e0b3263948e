use crate::{libs::messages::Message, msg_error, msg_success, store::tasks::TaskList};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut tasks = TaskList::new()?;
    match tasks.toggle_done(args.id)? {
        Some(true) => msg_success!(Message::TaskCompleted(args.id)),
        Some(false) => msg_success!(Message::TaskReopened(args.id)),
        None => msg_error!(Message::TaskNotFound(args.id)),
    }
    Ok(())
}
