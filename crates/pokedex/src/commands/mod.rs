//! Command handlers. Each takes a connected [`Pokedex`] and the resolved
//! presentation settings.

pub mod config_cmd;
pub mod list;
pub mod types;

use pokedex_core::Pokedex;

use crate::cli::Command;
use crate::config::Presentation;
use crate::error::CliError;

/// Route a catalog-backed command to its handler.
pub async fn dispatch(
    cmd: Command,
    dex: &Pokedex,
    presentation: Presentation,
) -> Result<(), CliError> {
    match cmd {
        Command::List(args) => list::handle(dex, args, presentation).await,
        Command::Types => types::handle(dex, presentation).await,
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "command does not use the catalog".into(),
        )),
    }
}
