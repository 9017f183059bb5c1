//! CLI entry point for sakamichi-render

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sakamichi_render::{commands, ContentRenderer, Group, RenderConfig};

#[derive(Parser)]
#[command(name = "sakamichi-render")]
#[command(version)]
#[command(about = "Render translated idol-group blog bodies to HTML", long_about = None)]
struct Cli {
    /// Renderer config file (.yml or .toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a body to HTML
    #[command(alias = "r")]
    Render {
        /// Body file, or - for stdin
        path: PathBuf,

        /// Group key or display name (nogizaka, 櫻坂46, ...)
        #[arg(short, long, default_value = "")]
        group: String,

        /// Image URL for [IMAGE:n] tokens when the body has none (repeatable)
        #[arg(short, long = "image")]
        images: Vec<String>,

        /// Input is a blog API record instead of a bare body
        #[arg(long)]
        json: bool,
    },

    /// Show format, images and preview of a body
    Inspect {
        /// Body file, or - for stdin
        path: PathBuf,
    },

    /// Convert a Markdown body to structured tokens
    Convert {
        /// Body file, or - for stdin
        path: PathBuf,
    },

    /// Render every body in a directory
    Batch {
        input: PathBuf,
        output: PathBuf,

        /// Group key or display name
        #[arg(short, long, default_value = "")]
        group: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "sakamichi_render=debug,info"
    } else {
        "sakamichi_render=info"
    };

    // Logs go to stderr so rendered HTML on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    let preview_length = config.preview_length;
    let renderer = ContentRenderer::new(config);

    match cli.command {
        Commands::Render {
            path,
            group,
            images,
            json,
        } => {
            let group = Group::resolve(&group);
            let html = commands::render::run(&renderer, &path, group, &images, json)?;
            println!("{}", html);
        }

        Commands::Inspect { path } => {
            println!("{}", commands::inspect::run(&path, preview_length)?);
        }

        Commands::Convert { path } => {
            println!("{}", commands::convert::run(&path)?);
        }

        Commands::Batch {
            input,
            output,
            group,
        } => {
            let group = Group::resolve(&group);
            tracing::info!("Rendering {:?} into {:?}", input, output);
            let count = commands::batch::run(&renderer, &input, &output, group)?;
            println!("Rendered {} files", count);
        }
    }

    Ok(())
}
