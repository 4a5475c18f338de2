use crate::adapters::broadcast::DEFAULT_EVENT_CHANNEL_CAPACITY;
use crate::domain::DEFAULT_THEATER_CAPACITY;
use clap::{Args, Parser, Subcommand};

/// Cinema booking - seat reservation service
#[derive(Parser, Debug)]
#[command(name = "cinema-booking")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub config: AppConfig,
}

/// 起動モード
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Run the interactive text menu on stdin/stdout
    Menu,
}

impl Cli {
    /// サブコマンド省略時は `serve`
    pub fn mode(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}

/// アプリケーション設定
///
/// 各値はコマンドライン引数、環境変数、デフォルトの順に解決される。
///
/// | 引数 | 変数 | デフォルト |
/// |---|---|---|
/// | `--bind-addr` | `BIND_ADDR` | `0.0.0.0` |
/// | `--port` | `PORT` | `3000` |
/// | `--event-channel-capacity` | `EVENT_CHANNEL_CAPACITY` | `256` |
/// | `--seats-per-theater` | `SEATS_PER_THEATER` | `20` |
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0", global = true)]
    pub bind_addr: String,

    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 3000, global = true)]
    pub port: u16,

    /// Events buffered per subscriber before it starts lagging
    #[arg(
        long,
        env = "EVENT_CHANNEL_CAPACITY",
        default_value_t = DEFAULT_EVENT_CHANNEL_CAPACITY,
        global = true
    )]
    pub event_channel_capacity: usize,

    /// Seats created for every theater and movie
    #[arg(
        long,
        env = "SEATS_PER_THEATER",
        default_value_t = DEFAULT_THEATER_CAPACITY,
        global = true
    )]
    pub seats_per_theater: u32,
}

impl AppConfig {
    /// サーバーの待ち受けアドレス
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    const ALL_FLAGS: [&str; 8] = [
        "--bind-addr",
        "127.0.0.1",
        "--port",
        "8080",
        "--event-channel-capacity",
        "16",
        "--seats-per-theater",
        "40",
    ];

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("cinema-booking").chain(args.iter().copied()))
    }

    #[test]
    fn test_serve_is_the_default_command() {
        let cli = parse(&ALL_FLAGS).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.mode(), Command::Serve);
    }

    #[test]
    fn test_flags_override_everything() {
        let cli = parse(&ALL_FLAGS).unwrap();

        assert_eq!(cli.config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(cli.config.event_channel_capacity, 16);
        assert_eq!(cli.config.seats_per_theater, 40);
    }

    #[test]
    fn test_subcommands() {
        assert_eq!(parse(&["serve"]).unwrap().mode(), Command::Serve);

        let mut args = vec!["menu"];
        args.extend(ALL_FLAGS);
        let cli = parse(&args).unwrap();
        assert_eq!(cli.mode(), Command::Menu);
        assert_eq!(cli.config.seats_per_theater, 40);
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        let err = parse(&["menu2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_help_is_not_mistaken_for_serve() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_invalid_number_is_reported() {
        let err = parse(&["--port", "eighty"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
