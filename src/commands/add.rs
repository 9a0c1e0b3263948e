use crate::{libs::messages::Message, msg_success, msg_warning, store::tasks::TaskList};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text
    #[arg(required = true)]
    text: String,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut tasks = TaskList::new()?;
    match tasks.add(&args.text)? {
        Some(id) => msg_success!(Message::TaskCreated(id)),
        None => msg_warning!(Message::TaskTextEmpty),
    }
    Ok(())
}
