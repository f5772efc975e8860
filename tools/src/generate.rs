use crate::board::BoardArgs;
use clap::Args;
use hyperlines::emit::{render, write_output, OutputFormat};
use hyperlines::encoding::CellEncoding;
use hyperlines::games::hypercube::hypercube_lines;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    board: BoardArgs,

    /// Cell encoding: auto, reference, bits or flat
    #[arg(long, value_name = "encoding", default_value = "auto")]
    encoding: CellEncoding,

    /// Output format: json or rust
    #[arg(long, value_name = "format", default_value = "json")]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o', value_name = "path")]
    output: Option<PathBuf>,
}

pub fn generate(cmd: GenerateCommand) -> Result<(), Box<dyn Error>> {
    let config = cmd.board.config()?;
    // reject the encoding before spending time on the lines
    cmd.encoding.check(&config)?;

    let lines = hypercube_lines(&config);
    let rendered = render(&config, &lines, cmd.encoding, cmd.format)?;

    write_output(cmd.output.as_deref(), &rendered)?;
    if let Some(path) = &cmd.output {
        info!(path = %path.display(), lines = lines.len(), "wrote winning lines");
    }

    Ok(())
}
