//! CLI entry point for devportal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devportal::{FooterMode, Portal, RenderOptions};

#[derive(Parser)]
#[command(name = "devportal")]
#[command(version)]
#[command(about = "Renders the blog index and footer of a developer portal", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the blog index page
    Blog {
        /// Language to render in
        #[arg(short, long)]
        lang: Option<String>,

        /// Path prefix for internal links
        #[arg(short, long)]
        prefix: Option<String>,

        /// Uncheck a category (repeatable)
        #[arg(long = "hide", value_name = "CATEGORY")]
        hidden: Vec<String>,

        /// Render the mobile filter dropdown open
        #[arg(long)]
        open_filters: bool,
    },

    /// Print the footer
    Footer {
        /// Footer variant
        #[arg(short, long, value_enum, default_value = "site")]
        mode: Mode,

        /// Language to render in
        #[arg(short, long)]
        lang: Option<String>,

        /// Path prefix for internal links
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// List feed content
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Language of the feed
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Display version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Site,
    Blog,
}

impl From<Mode> for FooterMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Site => FooterMode::Site,
            Mode::Blog => FooterMode::Blog,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for markup
    let filter = if cli.debug {
        "devportal=debug,info"
    } else {
        "devportal=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::Blog {
            lang,
            prefix,
            hidden,
            open_filters,
        } => {
            let portal = Portal::new(&base_dir)?;
            let options = RenderOptions {
                lang,
                prefix,
                hidden,
                open_filters,
            };
            println!("{}", portal.render_blog(&options)?);
        }

        Commands::Footer { mode, lang, prefix } => {
            let portal = Portal::new(&base_dir)?;
            let options = RenderOptions {
                lang,
                prefix,
                ..RenderOptions::default()
            };
            println!("{}", portal.render_footer(mode.into(), &options)?);
        }

        Commands::List { r#type, lang } => {
            let portal = Portal::new(&base_dir)?;
            devportal::commands::list::run(&portal, &r#type, lang.as_deref())?;
        }

        Commands::Version => {
            println!("devportal version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
