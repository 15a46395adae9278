mod cli;
mod commands;
mod config;
mod console;
mod render;
mod shell;

use anyhow::Result;
use clap::Parser;
use shared::protocol::RegisterRequest;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Command, Resource},
    commands::App,
    console::Console,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = config::load_settings(&cli.config)?;
    let app = App::new(settings)?;

    match cli.command {
        Command::Login { username, password } => app.login(&username, &password).await,
        Command::Register {
            name,
            phone,
            username,
            password,
        } => {
            app.register(RegisterRequest {
                name,
                phone,
                username,
                password,
            })
            .await
        }
        Command::Logout => app.logout(),
        Command::Whoami => app.whoami(),
        Command::Customers(command) => app.customers(command).await,
        Command::Orders(command) => app.orders(command).await,
        Command::Shell { resource } => {
            let session = app.require_session()?;
            let mut console = Console::stdin();
            match resource {
                Resource::Customers => {
                    shell::run(&mut app.customer_controller(session), &mut console).await
                }
                Resource::Orders => {
                    shell::run(&mut app.order_controller(session), &mut console).await
                }
            }
        }
    }
}
