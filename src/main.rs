use clap::{Parser, Subcommand};
use fieldguide::{config, generate, output, serve, site};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once.
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "fieldguide")]
#[command(about = "Static site generator for developer field guides")]
#[command(long_about = "\
Static site generator for developer field guides

Your crate is the data source. The outline, the pages, and the code samples
are Rust modules compiled into this binary; building renders them to a
self-contained static tree.

Output structure:

  dist/
  ├── index.html                   # Redirect to the first topic
  ├── intro/
  │   └── index.html               # One directory per topic path
  ├── authoring/
  │   ├── pages/index.html
  │   └── ...
  └── ...

Every page embeds its stylesheet and navigation script, so the output can
be served by any static host or opened straight from disk.

Run 'fieldguide gen-config' to generate a documented fieldguide.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file
    #[arg(long, default_value = "fieldguide.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page and write the site
    Build,
    /// Render every page without writing anything
    Check,
    /// Show the outline and its reading order
    Outline {
        /// Emit JSON instead of the human-readable tree
        #[arg(long)]
        json: bool,
    },
    /// Preview the built output directory over HTTP
    Serve {
        /// Port to listen on (loopback only)
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Print a stock fieldguide.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.config)?;
            init_thread_pool(&config.processing);
            let summary = generate::generate(&site::outline(), &config, &cli.output)?;
            output::print_generate_output(&summary);
        }
        Command::Check => {
            let config = config::load_config(&cli.config)?;
            init_thread_pool(&config.processing);
            let count = generate::check(&site::outline(), &config)?;
            output::print_check_output(count);
        }
        Command::Outline { json } => {
            let outline = site::outline();
            if json {
                println!("{}", generate::outline_json(&outline)?);
            } else {
                output::print_outline_output(&outline);
            }
        }
        Command::Serve { port } => {
            serve::serve(&cli.output, port)?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores: users can constrain down,
/// not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
