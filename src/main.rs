//! CLI entry point for codewcaro

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "codewcaro")]
#[command(version)]
#[command(about = "Render the CodewCaro blog from DatoCMS post records", long_about = None)]
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
    /// Generate a static page for every post
    #[command(alias = "g")]
    Generate,

    /// Render one query response (or post record) to HTML
    Render {
        /// JSON file with the CMS response
        input: PathBuf,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start a preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Remove the public folder
    Clean,

    /// List posts
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "codewcaro=debug,info"
    } else {
        "codewcaro=info"
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
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate => {
            let blog = codewcaro::Blog::new(&base_dir)?;
            tracing::info!("Generating static files...");
            blog.generate()?;
            println!("Generated successfully!");
        }

        Commands::Render { input, output } => {
            let blog = codewcaro::Blog::new(&base_dir)?;
            let input = if input.is_absolute() {
                input
            } else {
                base_dir.join(input)
            };
            if let Some(html) =
                codewcaro::commands::render::run(&blog, &input, output.as_deref())?
            {
                print!("{}", html);
            }
        }

        Commands::Server { port, ip } => {
            let blog = codewcaro::Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            codewcaro::server::start(&blog, &ip, port).await?;
        }

        Commands::Clean => {
            let blog = codewcaro::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let blog = codewcaro::Blog::new(&base_dir)?;
            codewcaro::commands::list::run(&blog)?;
        }

        Commands::Version => {
            println!("codewcaro version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
