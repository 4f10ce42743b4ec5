//! Interactive terminal host for the book list controller.

use shelf_client::{
    BookListController, ClientError, Field, HttpBookApi, LinePrompter, Outcome, Prompter,
    ReloadFlag,
};
use shelf_shared::BookId;

const PROMPT: &str = "shelf> ";
const HELP: &str = "\
commands:
  list            show the rendered list
  add             fill in the form and submit it
  edit <id>       replace a book's fields
  delete <id>     delete a book after confirmation
  reset           restore the seeded catalogue and reload
  reload          re-render from the server
  help            show this text
  quit            leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Add,
    Edit(BookId),
    Delete(BookId),
    Reset,
    Reload,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err("empty command".to_string());
    };

    let id = |word: Option<&str>| -> Result<BookId, String> {
        let raw = word.ok_or_else(|| format!("'{verb}' needs a book id"))?;
        raw.parse().map_err(|_| format!("'{raw}' is not a book id"))
    };

    let command = match verb {
        "list" | "ls" => ShellCommand::List,
        "add" => ShellCommand::Add,
        "edit" => ShellCommand::Edit(id(words.next())?),
        "delete" | "rm" => ShellCommand::Delete(id(words.next())?),
        "reset" => ShellCommand::Reset,
        "reload" => ShellCommand::Reload,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{other}'")),
    };

    if let Some(extra) = words.next() {
        return Err(format!("unexpected argument '{extra}'"));
    }
    Ok(command)
}

type Shell = BookListController<HttpBookApi, LinePrompter, ReloadFlag>;

pub async fn run(base_url: &str) -> anyhow::Result<()> {
    let mut controller: Shell = BookListController::new(
        HttpBookApi::new(base_url),
        LinePrompter::new()?,
        ReloadFlag::default(),
    );

    report(controller.load().await);
    println!("{HELP}");

    loop {
        let Some(line) = controller.prompter_mut().read_line(PROMPT)? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        let result = match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                println!("{HELP}");
                continue;
            }
            ShellCommand::List => {
                for item in controller.list().items() {
                    println!("{}", item.html());
                }
                continue;
            }
            ShellCommand::Add => {
                fill_form(&mut controller);
                controller.submit_form().await
            }
            ShellCommand::Edit(id) => controller.edit(id).await,
            ShellCommand::Delete(id) => controller.delete(id).await,
            ShellCommand::Reset => controller.reset().await,
            ShellCommand::Reload => controller.load().await,
        };
        report(result);

        if controller.host_mut().take() {
            report(controller.load().await);
        }
    }

    Ok(())
}

fn fill_form(controller: &mut Shell) {
    for field in Field::ALL {
        let value = controller
            .prompter_mut()
            .prompt(&format!("{}:", field.label()))
            .unwrap_or_default();
        controller.form_mut().set(field, value);
    }
}

fn report(result: Result<Outcome, ClientError>) {
    match result {
        Ok(Outcome::Created(id)) => println!("added book {id}"),
        Ok(Outcome::Updated(id)) => println!("updated book {id}"),
        Ok(Outcome::Deleted(id)) => println!("deleted book {id}"),
        Ok(Outcome::Reset) => println!("catalogue reset"),
        Ok(Outcome::Loaded(count)) => println!("{count} books"),
        Ok(Outcome::Aborted) => {}
        // Already logged by the controller.
        Err(_) => {}
    }
}
