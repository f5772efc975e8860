use clap::Args;
use hyperlines::core::config::BoardConfig;
use hyperlines::core::error::Result;

#[derive(Args)]
pub struct BoardArgs {
    /// Number of axes of the board
    #[arg(long, short = 'd', value_name = "D", default_value_t = 4)]
    dimensions: usize,

    /// Length of every axis
    #[arg(long, short = 's', value_name = "S", default_value_t = 4)]
    side: usize,
}

impl BoardArgs {
    pub fn config(&self) -> Result<BoardConfig> {
        BoardConfig::new(self.dimensions, self.side)
    }
}
