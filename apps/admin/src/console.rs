//! Line-oriented prompts on stdin.

use std::io::Write;

use client_core::FormFields;
use shared::domain::Customer;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

pub struct Console<I> {
    lines: Lines<I>,
}

impl Console<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<I: AsyncBufRead + Unpin> Console<I> {
    pub fn new(input: I) -> Self {
        Self {
            lines: input.lines(),
        }
    }

    /// Prints `prompt` and reads one trimmed line. `None` at end of input.
    pub async fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        Ok(self
            .lines
            .next_line()
            .await?
            .map(|line| line.trim().to_string()))
    }

    /// Yes only for an explicit `y` or `yes`.
    pub async fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        let answer = self.ask(&format!("{question} [y/N] ")).await?;
        Ok(matches!(
            answer.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("y" | "yes")
        ))
    }

    /// An empty answer keeps the current value. False if input ended early.
    pub async fn fill_form<F: FormFields>(&mut self, form: &mut F) -> anyhow::Result<bool> {
        let fields: Vec<(&'static str, String)> = form
            .fields()
            .into_iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect();

        for (name, current) in fields {
            let Some(answer) = self.ask(&format!("{name} [{current}]: ")).await? else {
                return Ok(false);
            };
            if !answer.is_empty() {
                form.set_field(name, &answer);
            }
        }
        Ok(true)
    }
}

/// Lists the customers an order can be assigned to.
pub fn print_customer_options(customers: &[Customer]) {
    if customers.is_empty() {
        println!("(no customers available to choose from)");
        return;
    }
    println!("Customers:");
    for customer in customers {
        println!("  {:>4}  {} ({})", customer.id, customer.name, customer.phone);
    }
}
