use std::process;

use anyhow::Result;
use env_logger::Env;

use segment_clock::{
    clock::SystemClock,
    config::AppConfig,
    player::{Player, TerminalEvents},
};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// The clock takes no arguments; anything passed is reported and ignored.
fn extra_args(args: impl IntoIterator<Item = String>) -> Option<String> {
    let extra: Vec<String> = args.into_iter().skip(1).collect();
    (!extra.is_empty()).then(|| extra.join(" "))
}

fn run() -> Result<()> {
    if let Some(extra) = extra_args(std::env::args()) {
        log::warn!("ignoring unexpected arguments: {extra}");
    }

    let config = AppConfig::load();
    let mut player = Player::new(&config, SystemClock);
    log::info!(
        "starting clock at {} fps on a {}x{} canvas",
        config.fps,
        config.canvas.width,
        config.canvas.height,
    );
    player.play(&mut TerminalEvents)?;
    log::info!("clock stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_has_no_extra_args() {
        assert_eq!(extra_args(args(&["segment-clock"])), None);
        assert_eq!(extra_args(Vec::new()), None);
    }

    #[test]
    fn extra_args_are_collected_not_rejected() {
        assert_eq!(
            extra_args(args(&["segment-clock", "--help", "now"])),
            Some("--help now".to_string())
        );
    }
}
