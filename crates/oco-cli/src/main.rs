//! OCO CLI - Command-line interface for Open Cut-Out rig files
//!
//! This binary provides commands for inspecting, validating and creating OCO
//! files, extracting their icons, and editing the OCO config.

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

// Use modules from the library crate
use oco_cli::commands;
use oco_cli::commands::new::{NewOptions, Template, ENCODING_NAMES, TEMPLATE_NAMES};

/// OCO - Open Cut-Out rig tools
#[derive(Parser)]
#[command(name = "oco")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log more details to stderr (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of an OCO file
    Inspect {
        /// Path to the OCO file
        file: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check that an OCO file loads
    Validate {
        /// Path to the OCO file
        file: String,
    },

    /// Create an OCO file from a rig template
    New {
        /// Path of the OCO file to create
        out: String,

        /// Character name (default: the file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Rig template
        #[arg(short, long, default_value = "biped", value_parser = TEMPLATE_NAMES)]
        template: String,

        /// Character height in centimeters
        #[arg(long)]
        height: Option<f64>,

        /// How to store the icon
        #[arg(long, default_value = "path", value_parser = ENCODING_NAMES)]
        encoding: String,

        /// Path to a PNG icon
        #[arg(long)]
        icon: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Extract the icon of an OCO file
    ExtractIcon {
        /// Path to the OCO file
        file: String,

        /// Where to write an embedded icon (default: next to the file)
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Read or write the OCO config
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the value stored at a key path such as `library/path`
    Get {
        key: String,

        /// Path to the config file (default: the user's OCO config)
        #[arg(long)]
        config: Option<String>,
    },

    /// Store a value at a key path
    Set {
        key: String,
        value: String,

        /// Path to the config file (default: the user's OCO config)
        #[arg(long)]
        config: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Inspect { file, json } => commands::inspect::run(&file, json),
        Commands::Validate { file } => commands::validate::run(&file),
        Commands::New {
            out,
            name,
            template,
            height,
            encoding,
            icon,
            force,
        } => {
            let template = template
                .parse::<Template>()
                .expect("clap should have validated template");
            commands::new::parse_encoding(&encoding).and_then(|encoding| {
                let options = NewOptions {
                    name: name.as_deref(),
                    template,
                    height,
                    encoding,
                    icon: icon.as_deref(),
                    force,
                };
                commands::new::run(&out, &options)
            })
        }
        Commands::ExtractIcon { file, out } => commands::extract_icon::run(&file, out.as_deref()),
        Commands::Config { command } => match command {
            ConfigCommands::Get { key, config } => commands::config::get(&key, config.as_deref()),
            ConfigCommands::Set { key, value, config } => {
                commands::config::set(&key, &value, config.as_deref())
            }
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
