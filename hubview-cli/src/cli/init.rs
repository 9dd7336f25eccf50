//! # Init Command
//!
//! Creates the configuration directory and a default settings file.

use anyhow::Result;
use hubview_core::get_config_dirs;
use hubview_core::output::{format_url, print_success};

pub(crate) fn handle_init_command() -> Result<()> {
  let config_path = get_config_dirs()?.init()?;
  print_success(&format!(
    "Configuration ready at {}",
    format_url(&config_path.display().to_string())
  ));
  Ok(())
}
