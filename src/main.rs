use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_shapes::{FillStyle, ShapeKind, ShapeRequest};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Greets you and draws ASCII shapes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path (default: ~/.hello-shapes/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Never colorize output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fixed greeting
    Greet,

    /// Greet someone by name
    Hello {
        /// Name to greet (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Draw a rectangle or pyramid
    Shape {
        /// Shape to draw (default from config)
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,

        /// Width in characters (rectangles only)
        #[arg(short, long)]
        width: Option<u32>,

        /// Height in rows
        #[arg(short = 'H', long)]
        height: Option<u32>,

        /// Character to draw with
        #[arg(short, long)]
        fill: Option<char>,

        /// Fill the interior or only the border
        #[arg(short, long, value_enum)]
        style: Option<StyleArg>,
    },

    /// Show or create the config file
    Config {
        /// Print the effective config as TOML
        #[arg(long, conflicts_with = "init")]
        show: bool,

        /// Write a default config file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing file (requires --init)
        #[arg(long, requires = "init")]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Rectangle,
    Pyramid,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Solid,
    Hollow,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so drawn shapes stay clean on stdout
    let log_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("hello_shapes={log_level}")),
        ))
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(hello_shapes::paths::config_path);

    let exit_code = match cli.command {
        None => {
            let ctx = commands::Context::load(config_path, cli.no_color)?;
            commands::run::execute(&ctx)?
        }
        Some(Commands::Greet) => {
            let ctx = commands::Context::load(config_path, cli.no_color)?;
            commands::greet::execute(&ctx)?
        }
        Some(Commands::Hello { name }) => {
            let ctx = commands::Context::load(config_path, cli.no_color)?;
            commands::hello::execute(&ctx, name)?
        }
        Some(Commands::Shape {
            kind,
            width,
            height,
            fill,
            style,
        }) => {
            let ctx = commands::Context::load(config_path, cli.no_color)?;
            let request = ShapeRequest {
                kind: kind.map(|k| match k {
                    KindArg::Rectangle => ShapeKind::Rectangle,
                    KindArg::Pyramid => ShapeKind::Pyramid,
                }),
                width,
                height,
                fill,
                style: style.map(|s| match s {
                    StyleArg::Solid => FillStyle::Solid,
                    StyleArg::Hollow => FillStyle::Hollow,
                }),
            };
            commands::shape::execute(&ctx, request)?
        }
        Some(Commands::Config { show, init, force }) => {
            // Loading is skipped for --init so a broken file can be replaced
            commands::config::execute(&config_path, show || !init, init, force)?
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
