//! Command dispatch and handler modules.

mod export;
mod render;
mod tree;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render {
            file,
            output,
            depth,
            levels,
            pdf,
            index_url,
        } => render::exec(file, output, depth, levels, pdf, index_url).await,
        Command::Tree {
            file,
            depth,
            why,
            index_url,
        } => tree::exec(file, depth, why, index_url).await,
        Command::Export {
            format,
            file,
            output,
            depth,
            index_url,
        } => export::exec(&format, file, &output, depth, index_url).await,
    }
}
