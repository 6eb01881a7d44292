//! CLI command parsing.

use clap::{Parser, Subcommand};

/// ImageAI - terminal studio for text-to-image generation.
#[derive(Parser)]
#[command(name = "imageai")]
#[command(about = "Terminal studio for text-to-image generation")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether this invocation hands the terminal to the TUI.
    #[must_use]
    pub fn launches_tui(&self) -> bool {
        matches!(self.command, None | Some(Commands::Tui { .. }))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the TUI interface.
    Tui {
        /// View to open: home, generate, history, profile, or settings.
        #[arg(long)]
        view: Option<String>,
    },

    /// Generate an image without the TUI.
    #[command(visible_alias = "g")]
    Generate {
        /// Description of the image.
        prompt: String,

        /// Print the image record as JSON.
        #[arg(long)]
        json: bool,

        /// Copy the image link to the clipboard.
        #[arg(short, long)]
        copy: bool,

        /// Override the simulated latency in milliseconds.
        #[arg(long, env = "IMAGEAI_GENERATION_DELAY_MS")]
        delay_ms: Option<u64>,
    },

    /// Manage configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration.
    Show,

    /// Show the configuration file path.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["imageai"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn generate_parses_flags() {
        let cli =
            Cli::try_parse_from(["imageai", "generate", "a red fox", "--json", "--delay-ms", "5"])
                .unwrap();
        match cli.command {
            Some(Commands::Generate {
                prompt,
                json,
                copy,
                delay_ms,
            }) => {
                assert_eq!(prompt, "a red fox");
                assert!(json);
                assert!(!copy);
                assert_eq!(delay_ms, Some(5));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn tui_accepts_any_view_string() {
        let cli = Cli::try_parse_from(["imageai", "tui", "--view", "gallery"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Tui { view: Some(ref v) }) if v == "gallery"
        ));
    }

    #[test]
    fn only_tui_invocations_take_the_terminal() {
        for argv in [&["imageai"][..], &["imageai", "tui", "--view", "history"]] {
            assert!(Cli::try_parse_from(argv).unwrap().launches_tui());
        }
        for argv in [&["imageai", "generate", "fox"][..], &["imageai", "config", "show"]] {
            assert!(!Cli::try_parse_from(argv).unwrap().launches_tui());
        }
    }

    #[test]
    fn verbose_is_counted() {
        let cli = Cli::try_parse_from(["imageai", "-vv", "config", "path"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
