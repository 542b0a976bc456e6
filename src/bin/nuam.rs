//! `nuam`: command-line front-end for the NUAM Exchange.
//!
//! Restores the persisted session, resolves the role route, and only runs
//! commands reachable from that route's dashboard.

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use nuam_exchange_client::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "nuam", version, about = "NUAM Exchange trading client")]
struct Cli {
    /// Backend origin, e.g. http://localhost:8000
    #[arg(long, env = "NUAM_API_URL")]
    api_url: Option<String>,

    /// Directory holding the persisted session
    #[arg(long)]
    session_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and persist the session
    Login { username: String, password: String },
    /// Close the session
    Logout,
    /// Show the signed-in user and dashboard
    Whoami,
    /// Backend health
    Health,
    /// Operator dashboard: orders
    #[command(subcommand)]
    Orders(OrdersCommand),
    /// Admin dashboard: fee tariffs
    #[command(subcommand)]
    Tariffs(TariffsCommand),
    /// Admin dashboard: executed transactions
    Reports {
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
enum OrdersCommand {
    /// List your latest orders
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Place a buy or sell order (omit --limit-price for a market order)
    Place {
        instrument: String,
        side: Side,
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
        #[arg(long, value_parser = parse_decimal)]
        limit_price: Option<Decimal>,
    },
}

#[derive(Subcommand, Debug)]
enum TariffsCommand {
    /// Show the rate table
    List,
    /// Set the base rate for an exchange (CL, PE, CO)
    Set {
        exchange: Exchange,
        #[arg(allow_hyphen_values = true, value_parser = parse_decimal)]
        base_rate: Decimal,
    },
}

fn parse_decimal(s: &str) -> Result<Decimal, String> {
    Decimal::from_str(s.trim()).map_err(|e| e.to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let session_dir = cli
        .session_dir
        .or_else(FileSessionStore::default_location)
        .ok_or("no session directory available; pass --session-dir")?;

    let mut builder =
        NuamClient::builder().session_store(Arc::new(FileSessionStore::new(session_dir)));
    if let Some(url) = cli.api_url.as_deref() {
        builder = builder.base_url(url);
    }
    let client = builder.build().map_err(|e| e.user_message())?;

    let route = RouteState::from_session(client.auth().restore().await);

    match cli.command {
        Command::Login { username, password } => {
            if let Some(user) = route.user() {
                return Err(RouteError::AlreadyAuthenticated(user.name.clone()).to_string());
            }
            let user = client
                .auth()
                .login(&username, &password)
                .await
                .map_err(|e| e.user_message())?;
            let route = route.login(user).map_err(|e| e.to_string())?;
            print_route(&route);
        }
        Command::Logout => {
            client.auth().logout().await;
            let route = route.logout();
            print_route(&route);
        }
        Command::Whoami => print_route(&route),
        Command::Health => {
            let report = client.health().check().await.map_err(|e| e.user_message())?;
            println!("status: {}", report.status);
            for (name, state) in &report.dependencies {
                println!("  {name}: {}", state.as_str().unwrap_or("?"));
            }
        }
        Command::Orders(cmd) => {
            require(&route, Dashboard::Operator)?;
            run_orders(&client, cmd).await?;
        }
        Command::Tariffs(cmd) => {
            require(&route, Dashboard::Admin)?;
            run_tariffs(&client, cmd).await?;
        }
        Command::Reports { limit } => {
            require(&route, Dashboard::Admin)?;
            let txs = client
                .reports()
                .list(limit)
                .await
                .map_err(|e| e.user_message())?;
            println!(
                "{:<8} {:<10} {:<16} {:<16} {:>8} {:>12} {:>14}  {}",
                "ID", "EXCHANGE", "BUY ORDER", "SELL ORDER", "QTY", "PRICE", "AMOUNT", "EXECUTED"
            );
            for t in txs {
                println!(
                    "{:<8} {:<10} {:<16} {:<16} {:>8} {:>12} {:>14}  {}",
                    t.id,
                    t.exchange,
                    t.buy_order_id,
                    t.sell_order_id,
                    t.quantity,
                    t.execution_price,
                    t.total_amount,
                    t.executed_at.format("%Y-%m-%d %H:%M:%S")
                );
            }
        }
    }
    Ok(())
}

async fn run_orders(client: &NuamClient, cmd: OrdersCommand) -> Result<(), String> {
    match cmd {
        OrdersCommand::List { limit } => {
            let orders = client
                .orders()
                .list(limit)
                .await
                .map_err(|e| e.user_message())?;
            print_orders(&orders);
        }
        OrdersCommand::Place {
            instrument,
            side,
            quantity,
            limit_price,
        } => {
            let placed = client
                .orders()
                .place(&instrument, side, quantity, limit_price)
                .await
                .map_err(|e| e.user_message())?;
            println!("{}", placed.message);
            if let Some(exec) = &placed.execution {
                println!(
                    "executed {} @ {} (amount {})",
                    exec.quantity, exec.price, exec.amount
                );
            }
            print_orders(client.orders().cached().await.orders());
        }
    }
    Ok(())
}

async fn run_tariffs(client: &NuamClient, cmd: TariffsCommand) -> Result<(), String> {
    if let TariffsCommand::Set {
        exchange,
        base_rate,
    } = cmd
    {
        let mut form = TariffForm::new(exchange, Some(base_rate));
        let confirmation = client
            .tariffs()
            .submit_form(&mut form)
            .await
            .map_err(|e| e.user_message())?;
        println!("{}", confirmation.message);
    } else {
        client.tariffs().list().await.map_err(|e| e.user_message())?;
    }

    let table = client.tariffs().cached().await;
    println!("{:<9} {:<10} {:>12}  {}", "EXCHANGE", "COUNTRY", "BASE RATE", "UPDATED");
    for t in table.iter() {
        println!(
            "{:<9} {:<10} {:>12}  {}",
            t.exchange,
            t.exchange.country(),
            t.base_rate,
            t.updated_at
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default()
        );
    }
    for e in table.unconfigured() {
        println!("{:<9} {:<10} {:>12}", e, e.country(), "-");
    }
    Ok(())
}

fn require(route: &RouteState, needed: Dashboard) -> Result<(), String> {
    match route.dashboard() {
        d if d == needed => Ok(()),
        Dashboard::Login => Err("not signed in; run `nuam login <username> <password>`".into()),
        Dashboard::UnknownRole => Err(unknown_role_message(route)),
        _ => Err(format!("this command is not available on the {:?} dashboard", route.dashboard())),
    }
}

fn unknown_role_message(route: &RouteState) -> String {
    let role = route.user().map(|u| u.role.to_string()).unwrap_or_default();
    format!("your user role \"{role}\" is not recognized; run `nuam logout` to go back to login")
}

fn print_route(route: &RouteState) {
    match route {
        RouteState::Unauthenticated => println!("not signed in"),
        RouteState::Operator(u) => {
            println!("{} ({}) [{}] operator dashboard", u.name, u.role, u.exchange_profile)
        }
        RouteState::Admin(u) => {
            println!("{} ({}) [{}] admin dashboard", u.name, u.role, u.exchange_profile)
        }
        RouteState::UnknownRole(_) => println!("{}", unknown_role_message(route)),
    }
}

fn print_orders(orders: &[Order]) {
    println!(
        "{:<8} {:<12} {:<5} {:>8} {:>12} {:<10} {}",
        "ID", "INSTRUMENT", "SIDE", "QTY", "PRICE", "STATUS", "CREATED"
    );
    for o in orders {
        println!(
            "{:<8} {:<12} {:<5} {:>8} {:>12} {:<10} {}",
            o.id,
            o.instrument,
            o.side,
            o.quantity,
            o.price_label(),
            o.status,
            o.created_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
}
