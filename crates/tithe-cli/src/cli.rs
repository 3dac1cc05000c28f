use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tithe",
    about = "Tithe — tamper-evident donation ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the ledger store file
    #[arg(long, global = true, default_value = "./data/ledger.json")]
    pub store: String,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record a donation as a new chained entry
    Record(RecordArgs),
    /// List entries, oldest first
    Log(LogArgs),
    /// Show a specific entry by id
    Show(ShowArgs),
    /// Show the chain tail
    Last,
    /// Verify chain integrity
    Verify,
}

#[derive(Args)]
pub struct RecordArgs {
    /// Donor label
    pub name: String,
    /// Donated amount
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
}

#[derive(Args)]
pub struct LogArgs {
    /// Show at most this many of the newest entries
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
    #[arg(long)]
    pub oneline: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_record() {
        let cli = Cli::try_parse_from(["tithe", "record", "Alice", "10.5"]).unwrap();
        if let Command::Record(args) = cli.command {
            assert_eq!(args.name, "Alice");
            assert_eq!(args.amount, 10.5);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_record_negative_amount() {
        let cli = Cli::try_parse_from(["tithe", "record", "Refund", "-5"]).unwrap();
        if let Command::Record(args) = cli.command {
            assert_eq!(args.amount, -5.0);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_log_oneline() {
        let cli = Cli::try_parse_from(["tithe", "log", "--oneline", "-n", "5"]).unwrap();
        if let Command::Log(args) = cli.command {
            assert!(args.oneline);
            assert_eq!(args.limit, 5);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_show() {
        let cli = Cli::try_parse_from(["tithe", "show", "some-id"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.id, "some-id");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_last() {
        let cli = Cli::try_parse_from(["tithe", "last"]).unwrap();
        assert!(matches!(cli.command, Command::Last));
    }

    #[test]
    fn parse_verify() {
        let cli = Cli::try_parse_from(["tithe", "verify"]).unwrap();
        assert!(matches!(cli.command, Command::Verify));
    }

    #[test]
    fn parse_store_path() {
        let cli =
            Cli::try_parse_from(["tithe", "verify", "--store", "/tmp/other.json"]).unwrap();
        assert_eq!(cli.store, "/tmp/other.json");
    }

    #[test]
    fn store_path_has_a_default() {
        let cli = Cli::try_parse_from(["tithe", "last"]).unwrap();
        assert_eq!(cli.store, "./data/ledger.json");
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["tithe", "--verbose", "verify"]).unwrap();
        assert!(cli.verbose);
    }
}
