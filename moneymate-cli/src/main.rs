use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use moneymate_advice::{AdviceClient, build_prompt};
use moneymate_core::{CategoryBudget, Transaction, WeeklyReport};
use moneymate_ingest::load_transactions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod config;
mod credential;
mod logging;
mod render;
mod state;

use config::Config;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("MONEYMATE_BUILD_SHA"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "moneymate",
    version,
    long_version = LONG_VERSION,
    about = "Weekly spending check-ins with coaching tips"
)]
struct Cli {
    /// Config file (default: ~/.moneymate/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct WeekArgs {
    /// Transaction CSV with Date, Description, Category, Amount columns
    #[arg(long)]
    csv: PathBuf,

    /// Reference date (YYYY-MM-DD) instead of today
    #[arg(long)]
    today: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full check-in: load, classify, ask for advice, print the report
    Advise {
        #[command(flatten)]
        week: WeekArgs,

        /// API key for the advice service (never saved)
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Read the API key from stdin
        #[arg(long)]
        ask_key: bool,

        /// Emit one JSON object instead of tables
        #[arg(long)]
        json: bool,

        /// Leave the raw transaction table out of the report
        #[arg(long)]
        hide_transactions: bool,
    },

    /// Print the advice prompt without calling the service
    Prompt {
        #[command(flatten)]
        week: WeekArgs,
    },

    /// Weekly spend-vs-budget table only
    Summary {
        #[command(flatten)]
        week: WeekArgs,

        #[arg(long)]
        json: bool,
    },

    /// List the weekly budget table in effect
    Budgets,

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file (never overwrites)
    Init,

    /// Print the effective configuration
    Show,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Advise {
            week,
            api_key,
            ask_key,
            json,
            hide_transactions,
        } => {
            let cfg = config::load_config(config_path)?;
            let budget = cfg.budget()?;
            let (txns, report) = weekly_report(&cfg, &budget, &week)?;

            let prompt = build_prompt(&report.classification);
            tracing::debug!("prompt:\n{}", prompt);

            let key = credential::resolve_api_key(api_key, ask_key)?;
            let client = AdviceClient::new(cfg.llm_settings());
            let advice = client.advise(key.as_deref(), &prompt).await;

            if json {
                let txns = (!hide_transactions).then_some(txns.as_slice());
                let out = render::JsonReport::new(&report, txns, Some(&advice));
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!(
                    "{}",
                    render::format_report(&report, &txns, Some(&advice), !hide_transactions)
                );
            }
        }

        Command::Prompt { week } => {
            let cfg = config::load_config(config_path)?;
            let budget = cfg.budget()?;
            let (_, report) = weekly_report(&cfg, &budget, &week)?;
            println!("{}", build_prompt(&report.classification));
        }

        Command::Summary { week, json } => {
            let cfg = config::load_config(config_path)?;
            let budget = cfg.budget()?;
            let (txns, report) = weekly_report(&cfg, &budget, &week)?;

            if json {
                let out = render::JsonReport::new(&report, None, None);
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", render::format_report(&report, &txns, None, false));
            }
        }

        Command::Budgets => {
            let cfg = config::load_config(config_path)?;
            print!("{}", render::format_budgets(&cfg.budget()?));
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(config_path)?,
            ConfigCommand::Show => {
                let cfg = config::load_config(config_path)?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn weekly_report(
    cfg: &Config,
    budget: &CategoryBudget,
    args: &WeekArgs,
) -> Result<(Vec<Transaction>, WeeklyReport)> {
    let today = reference_date(cfg, args.today.as_deref())?;
    let txns = load_csv(&args.csv)?;
    let report = WeeklyReport::build(&txns, budget, today);
    Ok((txns, report))
}

fn load_csv(path: &Path) -> Result<Vec<Transaction>> {
    if !path.exists() {
        bail!("CSV not found: {} (pass --csv <path>)", path.display());
    }
    load_transactions(path).context("Error reading CSV")
}

fn reference_date(cfg: &Config, today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => moneymate_core::time::parse_reference_date(s),
        None => moneymate_core::time::today(cfg.week.timezone.as_deref()),
    }
}
