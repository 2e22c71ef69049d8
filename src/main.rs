//! CLI entry point for headless-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "headless-blog")]
#[command(version)]
#[command(about = "A server-rendered blog front-end for headless GraphQL content APIs", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Override the content API endpoint
    #[arg(long, global = true)]
    api: Option<String>,

    /// Serve content from a JSON fixture file instead of the API
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter _config.yml
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Start the server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Print a summary of the node at a URI
    Show {
        /// Node URI, e.g. /hello-world/
        uri: String,
    },

    /// Render the page for a URI to HTML
    Render {
        /// Node URI, e.g. /hello-world/
        uri: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "headless_blog=debug,tower_http=debug,info"
    } else {
        "headless_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let load_site = || -> Result<headless_blog::Site> {
        let mut site = headless_blog::Site::new(&base_dir)?;
        if let Some(endpoint) = &cli.api {
            site.config.api.endpoint = endpoint.clone();
        }
        Ok(site)
    };

    match cli.command {
        Commands::Init { ref folder } => {
            let target_dir = if folder.is_absolute() {
                folder.clone()
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            headless_blog::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Serve { port, ref ip, open } => {
            let site = load_site()?;
            let api = site.content_api(cli.fixtures.as_deref())?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            headless_blog::server::start(&site, api, ip, port, open).await?;
        }

        Commands::Show { ref uri } => {
            let site = load_site()?;
            let api = site.content_api(cli.fixtures.as_deref())?;
            headless_blog::commands::show::run(&site, api.as_ref(), uri).await?;
        }

        Commands::Render {
            ref uri,
            ref output,
        } => {
            let site = load_site()?;
            let api = site.content_api(cli.fixtures.as_deref())?;
            headless_blog::commands::render::run(&site, api.as_ref(), uri, output.as_deref())
                .await?;
        }

        Commands::Version => {
            println!("headless-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
