//! itpgen command line
//!
//! Generates ITP and MOS documents for a project held in a JSON store file.

mod commands;

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn store_arg() -> Arg {
    Arg::new("store")
        .long("store")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Project store file (JSON array of projects)")
}

fn project_arg() -> Arg {
    Arg::new("project")
        .long("project")
        .required(true)
        .help("Project id")
}

fn document_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(store_arg())
        .arg(project_arg())
        .arg(
            Arg::new("config")
                .long("config")
                .value_parser(value_parser!(PathBuf))
                .help("Engine config file (TOML)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Output as JSON instead of Markdown"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_parser(value_parser!(PathBuf))
                .help("Write to file instead of stdout"),
        )
}

fn cli() -> Command {
    Command::new("itpgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Commissioning ITP / MOS generator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(document_command("itp", "Generate the Inspection and Test Plan"))
        .subcommand(document_command("mos", "Generate the Method of Statement"))
        .subcommand(
            Command::new("validate")
                .about("Report selected values missing from their catalogs")
                .arg(store_arg())
                .arg(project_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List projects in a store")
                .arg(store_arg())
                .arg(
                    Arg::new("status")
                        .long("status")
                        .help("Only projects with this status"),
                )
                .arg(
                    Arg::new("customer")
                        .long("customer")
                        .help("Only customers containing this text"),
                ),
        )
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("log-json"));

    let outcome = match matches.subcommand() {
        Some(("itp", args)) => commands::document(commands::DocumentKind::Itp, args).await?,
        Some(("mos", args)) => commands::document(commands::DocumentKind::Mos, args).await?,
        Some(("validate", args)) => commands::validate(args).await?,
        Some(("list", args)) => commands::list(args).await?,
        _ => anyhow::bail!("no command given"),
    };

    outcome.emit().await
}
