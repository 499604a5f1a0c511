//! Command-line interface for the headless driver.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};

/// Connect-five engine driver
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Drive the connect-five engine from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Match settings (TOML). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Both sides follow the hint advisor
    Selfplay {
        /// Stop after this many rounds even without a match winner
        #[arg(short, long, default_value = "5")]
        rounds: u32,
    },

    /// Feed a scripted sequence of actions and print every outcome
    Replay {
        /// Space-separated steps: `row,col`, `timeout`, `undo`, `reset`
        #[arg(short, long)]
        moves: String,
    },

    /// Replay a sequence, then print the suggested next cell
    Hint {
        /// Same format as `replay --moves`
        #[arg(short, long, default_value = "")]
        moves: String,
    },
}

/// One scripted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Place { row: usize, col: usize },
    Timeout,
    Undo,
    Reset,
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "timeout" => Ok(Step::Timeout),
            "undo" => Ok(Step::Undo),
            "reset" => Ok(Step::Reset),
            _ => {
                let (row, col) = token
                    .split_once(',')
                    .ok_or_else(|| anyhow!("expected `row,col`, got `{token}`"))?;
                let row = row
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("bad row in `{token}`"))?;
                let col = col
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("bad column in `{token}`"))?;
                Ok(Step::Place { row, col })
            }
        }
    }
}

/// Parse a whitespace-separated script.
pub fn parse_steps(script: &str) -> anyhow::Result<Vec<Step>> {
    script.split_whitespace().map(str::parse::<Step>).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let steps = parse_steps("0,0 1,2 timeout undo reset").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Place { row: 0, col: 0 },
                Step::Place { row: 1, col: 2 },
                Step::Timeout,
                Step::Undo,
                Step::Reset,
            ]
        );
    }

    #[test]
    fn test_parse_empty_script() {
        assert!(parse_steps("  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_steps("0,0 skip").is_err());
        assert!(parse_steps("a,1").is_err());
        assert!(parse_steps("-1,1").is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["gomoku", "selfplay", "--rounds", "2"]).unwrap();
        assert!(matches!(cli.command, Command::Selfplay { rounds: 2 }));

        let cli =
            Cli::try_parse_from(["gomoku", "--config", "m.toml", "replay", "--moves", "0,0"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("m.toml")));
    }
}
