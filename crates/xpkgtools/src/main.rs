use std::{
    io::stderr,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use tracing::Level;
use xpkgtools::NamingConfig;
mod commands;

use commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a TOML file overriding the naming limits and extension
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the friendly identifier of a package
    Id {
        /// Name of the package
        #[arg(short, long)]
        package: String,

        /// Content hash of the package, usually an image digest
        #[arg(long)]
        hash: String,
    },
    /// Build the output path of a compiled package
    ///
    /// Any extension on the name (or on the directory, when no name is given)
    /// is replaced with the package extension.
    Path {
        /// Path to the output directory
        #[arg(short, long)]
        directory: String,

        /// Base name of the package file
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Convert a package reference into a DNS label
    DnsLabel {
        /// Reference to convert
        input: String,
    },
    /// Find the single compiled package in a directory
    Find {
        /// Path to the directory to search
        root: PathBuf,
    },
    /// Print the package name from its metadata file
    MetaName {
        /// Path to the metadata file or the package root
        path: PathBuf,
    },
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    initialize_tracing(if args.verbose { Level::DEBUG } else { Level::INFO })?;

    run(args)
}

fn run(args: Args) -> eyre::Result<()> {
    let config = args.config.as_deref();

    match args.command {
        Commands::Id { package, hash } => id(IdArgs { package, hash }, &load_config(config)?),
        Commands::Path { directory, name } => {
            path(PathArgs { directory, name }, &load_config(config)?)
        }
        Commands::DnsLabel { input } => dns_label(DnsLabelArgs { input }),
        Commands::Find { root } => find(FindArgs { root }),
        Commands::MetaName { path } => meta_name(MetaNameArgs { path }),
    }
}

fn load_config(path: Option<&Path>) -> eyre::Result<NamingConfig> {
    match path {
        Some(path) => NamingConfig::load(path),
        None => Ok(NamingConfig::default()),
    }
}

fn initialize_tracing(level: Level) -> eyre::Result<()> {
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(stderr)
        .event_format(
            tracing_subscriber::fmt::format()
                .with_ansi(true)
                .with_level(true)
                .with_source_location(false)
                .with_line_number(false)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::time()),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
