/*
[INPUT]:  Parsed CLI subcommand and a configured PlatformClient
[OUTPUT]: JSON value describing the operation result
[POS]:    CLI layer - maps subcommands onto client operations
[UPDATE]: When client operations or their arguments change
*/

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashSet;
use tracing::warn;

use river_platform_client::{Currency, Network, PlatformClient, Sats, WithdrawalRequest};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check that the API answers
    Ping,
    /// Show balance, available and reserved balance
    Balance,
    /// List settled deposits
    Deposits(PageArgs),
    /// List deposit invoices
    Invoices(PageArgs),
    /// Create a deposit invoice
    CreateInvoice {
        #[arg(long)]
        amount: i64,
        #[arg(long, default_value = "LN")]
        network: String,
    },
    /// Pay an invoice from the account
    Withdraw {
        #[arg(long)]
        amount: i64,
        #[arg(long)]
        destination: String,
        #[arg(long)]
        fee_limit: Option<i64>,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        network: Option<String>,
    },
    /// Look up a withdrawal by id
    Withdrawal { id: String },
    /// Decode a Lightning invoice
    Decode { invoice: String },
    /// Estimate the Lightning fee for an invoice
    EstimateFee { invoice: String },
    /// Manage the account webhook
    #[command(subcommand)]
    Webhook(WebhookCommand),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PageArgs {
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
    /// Cursor from a previous page
    #[arg(long, default_value_t = 0)]
    pub next_timestamp: i64,
    /// Keep fetching until the server reports no further page
    #[arg(long)]
    pub all: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum WebhookCommand {
    Subscribe { url: String },
    Get,
    Delete,
}

/// Run one subcommand and describe its result as JSON
pub async fn run(client: &PlatformClient, command: Command) -> Result<Value> {
    match command {
        Command::Ping => {
            if !client.ping().await {
                bail!("ping failed");
            }
            Ok(json!({ "ping": true }))
        }
        Command::Balance => {
            let summary = client.account_balance().await.context("query balance")?;
            Ok(json!({
                "id": summary.id,
                "balance": summary.balance,
                "available_balance": summary.available_balance,
                "reserved_balance": summary.reserved_balance(),
            }))
        }
        Command::Deposits(page) => {
            let mut current = client
                .deposits(page.limit, page.next_timestamp)
                .await
                .context("query deposits")?;
            let mut deposits = std::mem::take(&mut current.deposits);
            let mut seen = HashSet::from([page.next_timestamp]);
            while page.all
                && current.has_more()
                && cursor_advanced(&mut seen, current.next_timestamp)
            {
                current = client
                    .next_deposits(&current, page.limit)
                    .await
                    .context("query next deposits page")?;
                deposits.append(&mut current.deposits);
            }
            Ok(json!({
                "count": deposits.len(),
                "deposits": deposits,
                "next_timestamp": current.next_timestamp,
            }))
        }
        Command::Invoices(page) => {
            let mut current = client
                .deposit_invoices(page.limit, page.next_timestamp)
                .await
                .context("query deposit invoices")?;
            let mut invoices = std::mem::take(&mut current.invoices);
            let mut seen = HashSet::from([page.next_timestamp]);
            while page.all
                && current.has_more()
                && cursor_advanced(&mut seen, current.next_timestamp)
            {
                current = client
                    .next_deposit_invoices(&current, page.limit)
                    .await
                    .context("query next deposit invoices page")?;
                invoices.append(&mut current.invoices);
            }
            Ok(json!({
                "count": invoices.len(),
                "deposit_intents": invoices,
                "next_timestamp": current.next_timestamp,
            }))
        }
        Command::CreateInvoice { amount, network } => {
            let invoice = client
                .create_deposit_invoice(Sats(amount), Network::from(network.as_str()))
                .await
                .context("create deposit invoice")?;
            to_json(&invoice)
        }
        Command::Withdraw {
            amount,
            destination,
            fee_limit,
            currency,
            network,
        } => {
            let mut request = WithdrawalRequest::new(Sats(amount), destination);
            if let Some(fee_limit) = fee_limit {
                request = request.with_fee_limit(Sats(fee_limit));
            }
            if let Some(currency) = currency {
                request = request.with_currency(Currency::from(currency.as_str()));
            }
            if let Some(network) = network {
                request = request.with_network(Network::from(network.as_str()));
            }
            let withdrawal = client
                .submit_withdrawal(&request)
                .await
                .context("initiate withdrawal")?;
            to_json(&withdrawal)
        }
        Command::Withdrawal { id } => {
            let withdrawal = client
                .withdrawal(&id)
                .await
                .with_context(|| format!("query withdrawal {id}"))?;
            to_json(&withdrawal)
        }
        Command::Decode { invoice } => {
            let decoded = client
                .decode_invoice(&invoice)
                .await
                .context("decode invoice")?;
            to_json(&decoded)
        }
        Command::EstimateFee { invoice } => {
            let estimate = client
                .estimate_fee(&invoice)
                .await
                .context("estimate fee")?;
            to_json(&estimate)
        }
        Command::Webhook(WebhookCommand::Subscribe { url }) => {
            let webhook = client
                .subscribe_webhook(&url)
                .await
                .context("subscribe webhook")?;
            to_json(&webhook)
        }
        Command::Webhook(WebhookCommand::Get) => {
            let webhook = client.webhook().await.context("query webhook")?;
            to_json(&webhook)
        }
        Command::Webhook(WebhookCommand::Delete) => {
            client.delete_webhook().await.context("delete webhook")?;
            Ok(json!({ "deleted": true }))
        }
    }
}

/// Records a page cursor; false when it was already fetched
fn cursor_advanced(seen: &mut HashSet<i64>, next_timestamp: i64) -> bool {
    let advanced = seen.insert(next_timestamp);
    if !advanced {
        warn!(next_timestamp, "page cursor repeated, stopping pagination");
    }
    advanced
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("serialize result")
}
