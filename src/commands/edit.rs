use crate::{
    libs::messages::Message,
    msg_error, msg_print, msg_success,
    store::tasks::TaskList,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    #[arg(required = true)]
    id: i64,
    /// New task text; prompts interactively when omitted
    #[arg(short, long)]
    text: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks = TaskList::new()?;

    let task = match tasks.get(args.id) {
        Some(task) => task.clone(),
        None => {
            msg_error!(Message::TaskNotFound(args.id));
            return Ok(());
        }
    };

    msg_print!(Message::EditingTask(task.text.clone()), true);
    tasks.begin_edit(task.id, &task.text);

    let new_text = match args.text {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskText.to_string())
            .default(task.text.clone())
            .allow_empty(true)
            .interact_text()?,
    };

    tasks.update_edit_scratch(&new_text);
    tasks.commit_edit(task.id)?;

    msg_success!(Message::TaskUpdated(args.id));
    Ok(())
}
