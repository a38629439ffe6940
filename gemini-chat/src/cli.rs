use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gemini-chat",
    about = "Gemini Chat - ask a generative-language endpoint from the terminal",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    #[arg(
        long,
        global = true,
        help = "Request timeout in seconds, overrides GEMINI_TIMEOUT_SECS (0 disables it)"
    )]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Send a single message and print the reply")]
    Ask {
        #[arg(required = true, help = "Message to send (words are joined with spaces)")]
        prompt: Vec<String>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Interactive chat on stdin (/history shows the transcript, /quit exits)")]
    Chat,

    #[command(about = "Show the resolved client configuration")]
    Config {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_joins_words() {
        let cli = Cli::try_parse_from(["gemini-chat", "ask", "what", "is", "rust"])
            .expect("args should parse");
        match cli.command {
            Commands::Ask { prompt, json } => {
                assert_eq!(prompt.join(" "), "what is rust");
                assert!(!json);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn ask_requires_a_prompt() {
        assert!(Cli::try_parse_from(["gemini-chat", "ask"]).is_err());
    }

    #[test]
    fn global_timeout_after_subcommand() {
        let cli = Cli::try_parse_from(["gemini-chat", "chat", "--timeout-secs", "30"])
            .expect("args should parse");
        assert_eq!(cli.timeout_secs, Some(30));
        assert!(matches!(cli.command, Commands::Chat));
    }

    #[test]
    fn timeout_env_is_left_to_client_config() {
        for value in ["", " 15 "] {
            std::env::set_var("GEMINI_TIMEOUT_SECS", value);
            let parsed = Cli::try_parse_from(["gemini-chat", "chat"]);
            std::env::remove_var("GEMINI_TIMEOUT_SECS");

            let cli = parsed.unwrap_or_else(|e| panic!("value {value:?} should not fail: {e}"));
            assert_eq!(cli.timeout_secs, None);
        }
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
