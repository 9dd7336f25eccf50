//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for hubview.

mod init;
mod profile;
mod users;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use hubview_core::ColorMode;

/// Top-level CLI command for hubview
#[derive(Parser)]
#[command(name = "hubview")]
#[command(display_name = "🐙 hubview")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Browse GitHub users and their public activity")]
#[command(
  long_about = "hubview pages through the GitHub user directory and shows a user's\n\
        profile next to their recent public activity.\n\n\
        Set GITHUB_TOKEN to raise the API rate limit."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for hubview
#[derive(Subcommand)]
pub enum Commands {
  /// Page through the GitHub user directory
  #[command(long_about = "Page through the GitHub user directory in sign-up order.\n\n\
            Pages are fetched one after another, each continuing after the last user\n\
            already shown, until the requested number of pages is shown or the\n\
            directory is exhausted.")]
  #[command(alias = "ls")]
  Users(users::UsersArgs),

  /// Show a user's profile and recent public activity
  #[command(long_about = "Show a user's profile and recent public activity.\n\n\
            The profile and the activity feed are fetched at the same time and\n\
            reported separately, so one failing does not hide the other.")]
  #[command(alias = "show")]
  Profile(profile::ProfileArgs),

  /// Initialize hubview configuration
  #[command(long_about = "Initialize hubview configuration.\n\n\
            Creates the configuration directory and writes a default config.toml\n\
            if none exists yet. Existing settings are left untouched.")]
  Init,
}

/// Handle the parsed CLI command
pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  match cli.command {
    Commands::Users(users) => users::handle_users_command(users),
    Commands::Profile(profile) => profile::handle_profile_command(profile),
    Commands::Init => init::handle_init_command(),
  }
}
