use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use self::play::PlayArg;

mod logging;
mod play;

/// Falling-block puzzle game for the terminal.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    play: PlayArg,
    /// Append log records to this file (logging is off otherwise)
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Most verbose level written to the log file
    #[clap(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    if let Some(path) = &args.log_file {
        logging::init(path, args.log_level)?;
    }
    play::run(&args.play)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CommandArgs::try_parse_from(["blockfall"]).unwrap();
        assert_eq!(args.log_file, None);
        assert_eq!(args.log_level, LevelFilter::INFO);
    }

    #[test]
    fn test_log_options() {
        let args = CommandArgs::try_parse_from([
            "blockfall",
            "--log-file",
            "blockfall.log",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.log_file, Some(PathBuf::from("blockfall.log")));
        assert_eq!(args.log_level, LevelFilter::DEBUG);
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(CommandArgs::try_parse_from(["blockfall", "--log-level", "loud"]).is_err());
    }
}
