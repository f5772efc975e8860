use crate::board::BoardArgs;
use clap::Args;
use hyperlines::encoding::CellEncoding;
use std::error::Error;

#[derive(Args)]
pub struct DecodeCommand {
    #[command(flatten)]
    board: BoardArgs,

    /// Cell encoding the codes were written with
    #[arg(long, value_name = "encoding", default_value = "auto")]
    encoding: CellEncoding,

    /// Packed cell codes
    #[arg(required = true)]
    codes: Vec<u64>,
}

pub fn decode(cmd: DecodeCommand) -> Result<(), Box<dyn Error>> {
    let config = cmd.board.config()?;

    // decode everything first so an invalid code prints nothing
    let cells = cmd
        .codes
        .iter()
        .map(|&code| cmd.encoding.decode(&config, code))
        .collect::<Result<Vec<_>, _>>()?;

    for (code, cell) in cmd.codes.iter().zip(cells) {
        println!("{} {}", code, cell);
    }

    Ok(())
}
