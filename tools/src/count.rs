use crate::board::BoardArgs;
use clap::Args;
use hyperlines::games::hypercube::{expected_line_count, hypercube_lines};
use std::error::Error;

#[derive(Args)]
pub struct CountCommand {
    #[command(flatten)]
    board: BoardArgs,

    /// Only print the closed-form count, without enumerating the lines
    #[arg(long)]
    closed_form: bool,
}

pub fn count(cmd: CountCommand) -> Result<(), Box<dyn Error>> {
    let config = cmd.board.config()?;
    let expected = expected_line_count(&config);

    if cmd.closed_form {
        match expected {
            Some(n) => println!("{}", n),
            None => return Err("the line count does not fit in a u128".into()),
        }
        return Ok(());
    }

    let enumerated = hypercube_lines(&config).len();
    println!("{}", enumerated);

    if expected != Some(enumerated as u128) {
        return Err(format!(
            "enumerated {} lines but the closed form gives {:?}",
            enumerated, expected
        )
        .into());
    }

    Ok(())
}
