//! Renders a single frame of the clock and prints it line by line, without
//! entering raw mode or the alternate screen.
//!
//! Run with: cargo run --example snapshot

use std::io::{self, Write};

use crossterm::{queue, style};
use segment_clock::{
    clock::SystemClock,
    config::AppConfig,
    player::{Player, to_content_style},
    types::Frame,
};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();
    let mut player = Player::new(&config, SystemClock);

    let Frame::Full { cells } = player.frame() else {
        anyhow::bail!("first frame should be a full frame");
    };

    let mut stdout = io::stdout();
    for row in &cells {
        for cell in row {
            let cs = to_content_style(&cell.style);
            queue!(
                stdout,
                style::PrintStyledContent(style::StyledContent::new(cs, cell.ch))
            )?;
        }
        queue!(stdout, style::ResetColor, style::Print("\n"))?;
    }
    stdout.flush()?;
    Ok(())
}
