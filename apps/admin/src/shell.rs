//! Interactive list view over one record kind.

use client_core::{DialogKind, RecordListController};
use tokio::io::AsyncBufRead;
use tracing::debug;

use crate::{
    commands::{failure, load_reporting, print_view},
    console::{print_customer_options, Console},
    render::{render_details, TableRow},
};

const HELP: &str = "\
commands:
  search <text>   filter the list (reloads from the server)
  clear           drop the search text
  next | prev     move between pages
  page <n>        jump to page n
  reload          fetch the current query again
  show <id>       details of one record
  add             create a record
  edit <id>       change a record
  delete <id>     remove a record
  help            this text
  quit            leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Clear,
    Next,
    Previous,
    Page(usize),
    Reload,
    Show(i64),
    Add,
    Edit(i64),
    Delete(i64),
    Help,
    Quit,
    Nothing,
    Invalid(String),
}

pub fn parse_command(line: &str) -> ShellCommand {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" => ShellCommand::Nothing,
        "search" | "s" => ShellCommand::Search(rest.to_string()),
        "clear" => ShellCommand::Clear,
        "next" | "n" => ShellCommand::Next,
        "prev" | "previous" | "p" => ShellCommand::Previous,
        "page" => match rest.parse::<usize>() {
            Ok(page) if page > 0 => ShellCommand::Page(page),
            _ => ShellCommand::Invalid("usage: page <n>, n >= 1".into()),
        },
        "reload" | "r" => ShellCommand::Reload,
        "show" => with_id(rest, "show", ShellCommand::Show),
        "add" => ShellCommand::Add,
        "edit" => with_id(rest, "edit", ShellCommand::Edit),
        "delete" | "del" => with_id(rest, "delete", ShellCommand::Delete),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => ShellCommand::Invalid(format!("unknown command '{other}'; try help")),
    }
}

fn with_id(raw: &str, verb: &str, make: fn(i64) -> ShellCommand) -> ShellCommand {
    match raw.parse::<i64>() {
        Ok(id) => make(id),
        Err(_) => ShellCommand::Invalid(format!("usage: {verb} <id>")),
    }
}

/// Runs until `quit` or end of input.
pub async fn run<R, I>(
    controller: &mut RecordListController<R>,
    console: &mut Console<I>,
) -> anyhow::Result<()>
where
    R: TableRow,
    I: AsyncBufRead + Unpin,
{
    load_reporting(controller).await?;
    print_view(controller);

    let prompt = format!("{}> ", R::LABEL);
    while let Some(line) = console.ask(&prompt).await? {
        let command = parse_command(&line);
        debug!(?command, "shell command");

        match command {
            ShellCommand::Nothing => {}
            ShellCommand::Quit => break,
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Invalid(message) => println!("{message}"),
            ShellCommand::Search(text) => {
                controller.set_search(text);
                controller.go_to_page(1);
                reload(controller).await;
            }
            ShellCommand::Clear => {
                controller.set_search("");
                controller.go_to_page(1);
                reload(controller).await;
            }
            ShellCommand::Reload => reload(controller).await,
            ShellCommand::Next => {
                if controller.next_page() {
                    print_view(controller);
                } else {
                    println!("Already on the last page.");
                }
            }
            ShellCommand::Previous => {
                if controller.previous_page() {
                    print_view(controller);
                } else {
                    println!("Already on the first page.");
                }
            }
            ShellCommand::Page(page) => {
                if controller.go_to_page(page) {
                    print_view(controller);
                } else {
                    println!(
                        "Page {page} is out of range (1-{}).",
                        controller.window().page_count.max(1)
                    );
                }
            }
            ShellCommand::Show(id) => {
                if let Some(record) = listed(controller, id) {
                    controller.open_detail(record);
                    if let Some(record) = controller.dialog().selected() {
                        print!("{}", render_details(record));
                    }
                    controller.close_dialog();
                }
            }
            ShellCommand::Add => {
                controller.open_create().await;
                edit_form(controller, console).await?;
            }
            ShellCommand::Edit(id) => {
                if let Some(record) = listed(controller, id) {
                    controller.open_edit(record).await;
                    edit_form(controller, console).await?;
                }
            }
            ShellCommand::Delete(id) => {
                if let Some(record) = listed(controller, id) {
                    confirm_delete(controller, console, record).await?;
                }
            }
        }
    }

    Ok(())
}

async fn reload<R: TableRow>(controller: &mut RecordListController<R>) {
    match load_reporting(controller).await {
        Ok(()) => print_view(controller),
        Err(err) => println!("{err:#}"),
    }
}

fn listed<R: TableRow>(controller: &RecordListController<R>, id: i64) -> Option<R> {
    let record = controller.find(R::id_from(id)).cloned();
    if record.is_none() {
        println!("No {} with id {id} on the current list.", R::RESOURCE);
    }
    record
}

async fn edit_form<R, I>(
    controller: &mut RecordListController<R>,
    console: &mut Console<I>,
) -> anyhow::Result<()>
where
    R: TableRow,
    I: AsyncBufRead + Unpin,
{
    if controller.has_customer_selector() {
        print_customer_options(controller.customer_options());
    }

    loop {
        let kind = controller.dialog().kind();
        let Some(form) = controller.form_mut() else {
            return Ok(());
        };
        if !console.fill_form(form).await? {
            controller.close_dialog();
            return Ok(());
        }

        let result = match kind {
            DialogKind::Creating => controller.save_create().await,
            _ => controller.save_edit().await,
        };
        match result {
            Ok(()) => {
                println!("Saved.");
                print_view(controller);
                return Ok(());
            }
            Err(err) => {
                println!("{:#}", failure("saving", &err));
                if !console.confirm("Edit the form again?").await? {
                    controller.close_dialog();
                    println!("Discarded.");
                    return Ok(());
                }
            }
        }
    }
}

async fn confirm_delete<R, I>(
    controller: &mut RecordListController<R>,
    console: &mut Console<I>,
    record: R,
) -> anyhow::Result<()>
where
    R: TableRow,
    I: AsyncBufRead + Unpin,
{
    let question = format!("Delete {}?", record.summary());
    controller.open_delete(record);

    loop {
        if !console.confirm(&question).await? {
            controller.close_dialog();
            println!("Cancelled.");
            return Ok(());
        }
        match controller.confirm_delete().await {
            Ok(()) => {
                println!("Deleted.");
                print_view(controller);
                return Ok(());
            }
            Err(err) => println!("{:#}; answer y to retry", failure("deleting", &err)),
        }
    }
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
