use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

mod cli;
mod commit;
mod error;
mod gitio;
mod model;
mod range_processor;
mod render;
mod service_messages;
mod util;

use crate::cli::{normalize, Cli};

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  util::init_logging(cli.verbose);

  // Phase 1: normalize CLI
  let stdout = std::io::stdout();
  let cfg = normalize(cli, stdout.is_terminal())?;
  debug!(config = %serde_json::to_string(&cfg)?, "effective configuration");

  // Phase 2: fetch the range and report it
  range_processor::process_range(&cfg, stdout.lock()).with_context(|| format!("checking repository {}", cfg.repo))?;
  Ok(())
}
