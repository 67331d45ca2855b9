//! bk-extract
//!
//! Runs the branding extraction pipeline for one URL and prints the result
//! as JSON.

use clap::Parser;

use brandkit::Error;

/// Brandkit extraction CLI
#[derive(Parser, Debug)]
#[command(name = "bk-extract")]
#[command(author = "Brandkit Team <team@brandkit.dev>")]
#[command(version)]
#[command(about = "Extract logo, colors, fonts, and metadata from a website")]
struct Args {
    /// URL of the site to extract branding from
    url: String,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let branding = match brandkit::extract_branding(&args.url).await {
        Ok(branding) => branding,
        Err(err @ Error::InvalidUrl(_)) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let json = if args.compact {
        serde_json::to_string(&branding)?
    } else {
        serde_json::to_string_pretty(&branding)?
    };
    println!("{json}");

    Ok(())
}
