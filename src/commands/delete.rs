use crate::{
    libs::messages::Message,
    msg_error, msg_info, msg_success,
    store::tasks::TaskList,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
    /// Delete without confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = TaskList::new()?;

    let task = match tasks.get(args.id) {
        Some(task) => task.clone(),
        None => {
            msg_error!(Message::TaskNotFound(args.id));
            return Ok(());
        }
    };

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.text.clone()).to_string())
            .default(false)
            .interact()?;

    if confirmed {
        tasks.delete(args.id)?;
        msg_success!(Message::TaskDeleted(args.id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}
