//! One-shot subcommands and the wiring shared with the interactive shell.

use std::sync::Arc;

use anyhow::{anyhow, Context};
use client_core::{
    AuthClient, ClientError, CustomerOptions, FileSessionStore, FormFields, HttpRecordStore,
    HttpTransport, LoadStatus, RecordListController, Session, SessionProvider,
};
use shared::{
    domain::{Customer, Order},
    protocol::RegisterRequest,
};
use tracing::info;

use crate::{
    cli::{CustomerCommand, FieldArgs, ListArgs, LookupArgs, OrderCommand},
    config::{resolve_session_path, Settings},
    console::Console,
    render::{render_details, render_pager, render_server_summary, render_table, TableRow},
};

pub struct App {
    settings: Settings,
    transport: HttpTransport,
    sessions: FileSessionStore,
}

impl App {
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let transport = HttpTransport::new(&settings.api_base_url)?;
        let sessions = FileSessionStore::new(resolve_session_path(&settings)?);
        info!(
            api = %transport.base_url(),
            session = %sessions.path().display(),
            "admin client configured"
        );
        Ok(Self {
            settings,
            transport,
            sessions,
        })
    }

    fn auth(&self) -> AuthClient {
        AuthClient::new(self.transport.clone())
    }

    fn store(&self) -> Arc<HttpRecordStore> {
        Arc::new(HttpRecordStore::new(self.transport.clone()))
    }

    pub fn require_session(&self) -> anyhow::Result<Session> {
        self.sessions.require().map_err(|err| failure("reading the session", &err))
    }

    pub fn customer_controller(&self, session: Session) -> RecordListController<Customer> {
        RecordListController::<Customer>::with_page_size(
            self.store(),
            session,
            self.settings.page_size,
        )
    }

    /// Order list whose add/edit dialogs load the customer selector.
    pub fn order_controller(&self, session: Session) -> RecordListController<Order> {
        let options =
            CustomerOptions::with_limit(self.store(), self.settings.customer_option_limit);
        RecordListController::<Order>::with_page_size(
            self.store(),
            session,
            self.settings.page_size,
        )
        .with_customer_options(options)
    }

    pub async fn login(&self, username: &str, password: &str) -> anyhow::Result<()> {
        let session = self
            .auth()
            .login(&self.sessions, username, password)
            .await
            .map_err(|err| failure("logging in", &err))?;
        println!("Logged in as {} ({}).", session.name, session.username);
        Ok(())
    }

    pub async fn register(&self, request: RegisterRequest) -> anyhow::Result<()> {
        let account = self
            .auth()
            .register(&request)
            .await
            .map_err(|err| failure("registering", &err))?;
        println!(
            "Registered {} as account #{}. Log in to continue.",
            account.username, account.id
        );
        Ok(())
    }

    pub fn logout(&self) -> anyhow::Result<()> {
        self.auth()
            .logout(&self.sessions)
            .context("failed to clear the stored session")?;
        println!("Logged out.");
        Ok(())
    }

    pub fn whoami(&self) -> anyhow::Result<()> {
        match self.sessions.load()? {
            Some(session) => println!(
                "{} ({}), account #{}",
                session.name, session.username, session.id
            ),
            None => println!("Not logged in."),
        }
        Ok(())
    }

    pub async fn customers(&self, command: CustomerCommand) -> anyhow::Result<()> {
        let mut controller = self.customer_controller(self.require_session()?);
        match command {
            CustomerCommand::List(args) => list(&mut controller, &args).await,
            CustomerCommand::Add(fields) => add(&mut controller, &fields).await,
            CustomerCommand::Edit { lookup, fields } => edit(&mut controller, &lookup, &fields).await,
            CustomerCommand::Delete { lookup, yes } => delete(&mut controller, &lookup, yes).await,
        }
    }

    pub async fn orders(&self, command: OrderCommand) -> anyhow::Result<()> {
        let mut controller = self.order_controller(self.require_session()?);
        match command {
            OrderCommand::List(args) => list(&mut controller, &args).await,
            OrderCommand::Add(fields) => add(&mut controller, &fields).await,
            OrderCommand::Edit { lookup, fields } => edit(&mut controller, &lookup, &fields).await,
            OrderCommand::Delete { lookup, yes } => delete(&mut controller, &lookup, yes).await,
        }
    }
}

/// Turns a client error into a message, pointing at `admin login` when the
/// session is missing or was rejected.
pub fn failure(action: &str, err: &ClientError) -> anyhow::Error {
    if err.requires_login() {
        anyhow!("{action} failed: {err}. Run `admin login` to start a new session.")
    } else {
        anyhow!("{action} failed: {err}")
    }
}

/// Loads the current query and keeps the error instead of only logging it.
pub async fn load_reporting<R: TableRow>(
    controller: &mut RecordListController<R>,
) -> anyhow::Result<()> {
    let ticket = controller.begin_load();
    let result = controller.fetch(&ticket).await;
    let error = result
        .as_ref()
        .err()
        .map(|err| failure(&format!("loading {}", R::LABEL), err));

    match controller.apply_load(ticket, result) {
        LoadStatus::Applied | LoadStatus::Stale => Ok(()),
        LoadStatus::Failed => Err(error.unwrap_or_else(|| anyhow!("loading {} failed", R::LABEL))),
    }
}

pub fn print_view<R: TableRow>(controller: &RecordListController<R>) {
    print!("{}", render_table(controller.visible()));
    println!("{}", render_pager(&controller.window(), controller.filtered().len()));
    if let Some(summary) = render_server_summary(controller.record_page()) {
        println!("{summary}");
    }
}

async fn list<R: TableRow>(
    controller: &mut RecordListController<R>,
    args: &ListArgs,
) -> anyhow::Result<()> {
    controller.set_search(args.search.as_str());
    load_reporting(controller).await?;
    if !controller.go_to_page(args.page) {
        return Err(anyhow!(
            "page {} is out of range (1-{})",
            args.page,
            controller.window().page_count.max(1)
        ));
    }
    print_view(controller);
    Ok(())
}

async fn add<R: TableRow>(
    controller: &mut RecordListController<R>,
    fields: &impl FieldArgs,
) -> anyhow::Result<()> {
    controller.open_create().await;
    apply_fields(controller, fields)?;
    controller
        .save_create()
        .await
        .map_err(|err| failure(&format!("adding to {}", R::LABEL), &err))?;
    println!("Added.");
    print_view(controller);
    Ok(())
}

async fn edit<R: TableRow>(
    controller: &mut RecordListController<R>,
    lookup: &LookupArgs,
    fields: &impl FieldArgs,
) -> anyhow::Result<()> {
    let record = find_listed(controller, lookup).await?;
    controller.open_edit(record).await;
    apply_fields(controller, fields)?;
    controller
        .save_edit()
        .await
        .map_err(|err| failure(&format!("updating {} #{}", R::LABEL, lookup.id), &err))?;
    println!("Updated #{}.", lookup.id);
    print_view(controller);
    Ok(())
}

async fn delete<R: TableRow>(
    controller: &mut RecordListController<R>,
    lookup: &LookupArgs,
    yes: bool,
) -> anyhow::Result<()> {
    let record = find_listed(controller, lookup).await?;
    print!("{}", render_details(&record));
    let question = format!("Delete {}?", record.summary());
    controller.open_delete(record);

    if !yes && !Console::stdin().confirm(&question).await? {
        controller.close_dialog();
        println!("Cancelled.");
        return Ok(());
    }

    controller
        .confirm_delete()
        .await
        .map_err(|err| failure(&format!("deleting {} #{}", R::LABEL, lookup.id), &err))?;
    println!("Deleted #{}.", lookup.id);
    Ok(())
}

async fn find_listed<R: TableRow>(
    controller: &mut RecordListController<R>,
    lookup: &LookupArgs,
) -> anyhow::Result<R> {
    controller.set_search(lookup.search.as_str());
    load_reporting(controller).await?;
    controller
        .find(R::id_from(lookup.id))
        .cloned()
        .ok_or_else(|| {
            anyhow!(
                "no listed {} record with id {}; narrow the listing with --search",
                R::RESOURCE,
                lookup.id
            )
        })
}

fn apply_fields<R: TableRow>(
    controller: &mut RecordListController<R>,
    fields: &impl FieldArgs,
) -> anyhow::Result<()> {
    let form = controller
        .form_mut()
        .ok_or_else(|| anyhow!("no form dialog is open"))?;
    for (name, value) in fields.assignments() {
        if !form.set_field(name, value) {
            return Err(anyhow!("unknown field '{name}'"));
        }
    }
    Ok(())
}
