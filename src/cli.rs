// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - fetch:  list (and optionally download) keymaps for an app bundle
// - layout: convert a .playmap file between keyboard layouts
//
// Everything the fetch command needs from the environment (API base URL,
// access token) is read here too, through clap's `env` support, so the rest
// of the program only ever sees plain values.
// =============================================================================

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::layout::Layout;

#[derive(Parser, Debug)]
#[command(
    name = "playmap",
    version,
    about = "A CLI tool to fetch and modify PlayCover's Playmap files",
    long_about = "playmap lists and downloads keymaps from the PlayCover keymaps repository \
                  (or a local checkout of it) and converts .playmap files between the \
                  QWERTY, AZERTY and QWERTZ keyboard layouts."
)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and handle Playmap files from GitHub or a local directory
    ///
    /// Example: playmap fetch com.miHoYo.GenshinImpact --readme
    Fetch(FetchArgs),

    /// Modify the layout of a Playmap file
    ///
    /// Reads a Playmap file, rewrites its key codes from one layout to
    /// another and writes the result to the output file.
    ///
    /// Example: playmap layout in.playmap out.playmap QWERTY AZERTY
    Layout(LayoutArgs),
}

#[derive(clap::Args, Debug)]
pub struct FetchArgs {
    /// The bundle ID of the keymap (omit to list every bundle)
    pub bundle_id: Option<String>,

    /// Fetch and print the README.md file if available
    #[arg(long)]
    pub readme: bool,

    /// Download a file (prompts for the name unless --file is given)
    #[arg(long)]
    pub download: bool,

    /// Name of the file to download; implies --download
    #[arg(long, value_name = "NAME")]
    pub file: Option<String>,

    /// Directory to download into (prompts when --download is used without it)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// GitHub repository (USERNAME/REPOSITORY) or local path (file:///path/to/keymapping/)
    #[arg(long)]
    pub source: Option<String>,

    /// Base URL of the GitHub API
    #[arg(
        long,
        env = "PLAYMAP_API_URL",
        default_value = crate::config::DEFAULT_API_URL,
        hide_env_values = true
    )]
    pub api_url: String,

    /// Token sent as a bearer credential to the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long,
        default_value_t = crate::config::DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}

impl FetchArgs {
    pub fn bundle_id(&self) -> &str {
        self.bundle_id.as_deref().unwrap_or("")
    }

    /// True when the user asked for a download in any form
    pub fn wants_download(&self) -> bool {
        self.download || self.file.is_some()
    }
}

#[derive(clap::Args, Debug)]
pub struct LayoutArgs {
    /// Path to the input file
    pub input_file: PathBuf,

    /// Path to the output file
    pub output_file: PathBuf,

    /// Current layout of the file: QWERTY, AZERTY, or QWERTZ
    #[arg(value_enum, ignore_case = true)]
    pub from_layout: Layout,

    /// Desired layout of the file: QWERTY, AZERTY, or QWERTZ
    #[arg(value_enum, ignore_case = true)]
    pub to_layout: Layout,
}
