// src/main.rs
// =============================================================================
// Entry point of the playmap CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Dispatch to the fetch or layout handler
// 4. Exit with 0 on success, 1 on any reported error
//    (clap itself exits with 2 on usage errors)
//
// Interactive prompts for `fetch --download` live here too, so the fetch
// module never touches the console.
// =============================================================================

mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - fetch settings
mod fetch;    // src/fetch/ - listing and downloading keymaps
mod layout;   // src/layout/ - keyboard layout conversion
mod logging;  // src/logging.rs - tracing setup
mod prompt;   // src/prompt.rs - console questions

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use cli::{Cli, Commands, FetchArgs, LayoutArgs};
use config::FetchConfig;
use fetch::{Fetcher, Source};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Fetch(args) => handle_fetch(args).await,
        Commands::Layout(args) => handle_layout(&args),
    }
}

// Handles the 'fetch' subcommand
async fn handle_fetch(args: FetchArgs) -> Result<()> {
    let config = FetchConfig::from_args(&args)?;
    let source = Source::resolve(args.source.as_deref(), &config.default_repo)?;
    let bundle_id = args.bundle_id();
    debug!(%source, bundle_id, "fetching keymaps");

    let fetcher = Fetcher::new(&config)?;

    // Nothing is printed unless the listing succeeds
    let entries = fetcher
        .list(&source, bundle_id)
        .await
        .context("Failed to fetch or parse keymaps")?;

    println!("Contents of directory {}:", bundle_id);
    for entry in &entries {
        println!("{}", entry.name);
    }

    if args.readme {
        match fetch::find_readme(&entries) {
            Some(readme) => {
                let text = fetcher
                    .read_text(readme)
                    .await
                    .context("Failed to fetch README.md")?;
                println!("\nREADME.md contents:\n");
                println!("{}", text);
            }
            None => println!("README.md not found in directory {}.", bundle_id),
        }
    }

    if args.wants_download() {
        let file_name = match &args.file {
            Some(name) => name.clone(),
            None => prompt::ask_stdin("\nEnter the name of the file you want to download:")?,
        };
        let entry = fetch::find_entry(&entries, &file_name)?;

        let dest_dir = match &args.output_dir {
            Some(dir) => dir.clone(),
            None => ask_download_dir()?,
        };

        let saved = fetcher.download(entry, &dest_dir).await?;
        println!("File downloaded to {}", saved.display());
    }

    Ok(())
}

// Asks for a custom download directory; an empty answer picks the default
fn ask_download_dir() -> Result<PathBuf> {
    let default_dir = fetch::default_download_dir()?;
    let answer = prompt::ask_stdin(&format!(
        "Enter custom download location or press Enter to use default location ({}):",
        default_dir.display()
    ))?;

    let answer = answer.trim();
    Ok(if answer.is_empty() {
        default_dir
    } else {
        PathBuf::from(answer)
    })
}

// Handles the 'layout' subcommand
fn handle_layout(args: &LayoutArgs) -> Result<()> {
    layout::convert_file(&args.input_file, &args.output_file, args.from_layout, args.to_layout)?;

    println!(
        "Layout changed from {} to {} and saved to {}",
        args.from_layout,
        args.to_layout,
        args.output_file.display()
    );
    Ok(())
}
