use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "admin", version, about = "Customer and order administration client")]
pub struct Cli {
    /// TOML settings file; skipped when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account. Does not log in.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show who the stored session belongs to.
    Whoami,
    #[command(subcommand)]
    Customers(CustomerCommand),
    #[command(subcommand)]
    Orders(OrderCommand),
    /// Interactive list view.
    Shell {
        #[arg(value_enum)]
        resource: Resource,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Customers,
    Orders,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(long, default_value = "")]
    pub search: String,
    /// Page of the filtered list to show.
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

/// Narrows the listing an edit or delete looks the record up in.
#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    pub id: i64,
    #[arg(long, default_value = "")]
    pub search: String,
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommand {
    List(ListArgs),
    Add(CustomerFields),
    Edit {
        #[command(flatten)]
        lookup: LookupArgs,
        #[command(flatten)]
        fields: CustomerFields,
    },
    Delete {
        #[command(flatten)]
        lookup: LookupArgs,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    List(ListArgs),
    Add(OrderFields),
    Edit {
        #[command(flatten)]
        lookup: LookupArgs,
        #[command(flatten)]
        fields: OrderFields,
    },
    Delete {
        #[command(flatten)]
        lookup: LookupArgs,
        #[arg(long)]
        yes: bool,
    },
}

/// Field values given as flags, in form field names.
pub trait FieldArgs {
    fn assignments(&self) -> Vec<(&'static str, &str)>;
}

#[derive(Args, Debug, Clone, Default)]
pub struct CustomerFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

impl FieldArgs for CustomerFields {
    fn assignments(&self) -> Vec<(&'static str, &str)> {
        [("name", &self.name), ("phone", &self.phone)]
            .into_iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
            .collect()
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OrderFields {
    #[arg(long)]
    pub customer_id: Option<String>,
    #[arg(long)]
    pub service: Option<String>,
    #[arg(long)]
    pub amount: Option<String>,
    #[arg(long)]
    pub unit: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
}

impl FieldArgs for OrderFields {
    fn assignments(&self) -> Vec<(&'static str, &str)> {
        [
            ("customer_id", &self.customer_id),
            ("service", &self.service),
            ("amount", &self.amount),
            ("unit", &self.unit),
            ("price", &self.price),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }
}
