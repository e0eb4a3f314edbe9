//! CLI entry point for blogr

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogr")]
#[command(version)]
#[command(about = "A minimal static site generator for personal blogs", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
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
    /// Initialize a new blog site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// Build the static site
    #[command(alias = "b")]
    Build,

    /// Build the site, then serve it locally
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (overrides config and the PORT variable)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Remove the output directory
    Clean,

    /// List posts
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "blogr=debug,info"
    } else {
        "blogr=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            blogr::commands::init::init_site(&target_dir)?;
            println!("Initialized new blog in {:?}", target_dir);
        }

        Commands::New { title } => {
            let site = blogr::Site::new(&base_dir)?;
            blogr::commands::new::run(&site, &title)?;
        }

        Commands::Build => {
            let site = blogr::Site::new(&base_dir)?;
            site.build()?;
        }

        Commands::Serve { port, host, open } => {
            let site = blogr::Site::new(&base_dir)?;

            // Serve the freshest output
            site.build()?;

            let port = blogr::server::resolve_port(port, site.config.dev.port);
            let host = host.unwrap_or_else(|| site.config.dev.host.clone());
            let open = open || site.config.dev.open_browser;
            blogr::server::start(&site, &host, port, open).await?;
        }

        Commands::Clean => {
            let site = blogr::Site::new(&base_dir)?;
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let site = blogr::Site::new(&base_dir)?;
            blogr::commands::list::run(&site)?;
        }
    }

    Ok(())
}
