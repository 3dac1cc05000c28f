use colored::Colorize;

use tithe_ledger::Ledger;
use tithe_store::JsonFileStore;
use tithe_types::{Donation, Entry, EntryId};

use crate::cli::{Cli, Command, LogArgs, RecordArgs, ShowArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let ledger = Ledger::new(JsonFileStore::new(&cli.store));
    match cli.command {
        Command::Record(args) => cmd_record(&ledger, args).await,
        Command::Log(args) => cmd_log(&ledger, args).await,
        Command::Show(args) => cmd_show(&ledger, args).await,
        Command::Last => cmd_last(&ledger).await,
        Command::Verify => cmd_verify(&ledger).await,
    }
}

async fn cmd_record(ledger: &Ledger<JsonFileStore>, args: RecordArgs) -> anyhow::Result<()> {
    let entry = ledger
        .append(&Donation::new(args.name, args.amount))
        .await?;
    println!("{} Donation recorded", "✓".green().bold());
    print_entry(&entry);
    Ok(())
}

async fn cmd_log(ledger: &Ledger<JsonFileStore>, args: LogArgs) -> anyhow::Result<()> {
    let entries = ledger.find_all().await;
    if entries.is_empty() {
        println!("Ledger is empty.");
        return Ok(());
    }

    let skip = entries.len().saturating_sub(args.limit);
    for entry in entries.iter().skip(skip) {
        if args.oneline {
            println!(
                "{} {} {} {}",
                entry.hash.short_hex().yellow(),
                entry.id.short_id().dimmed(),
                entry.name,
                entry.amount
            );
        } else {
            print_entry(entry);
            println!();
        }
    }
    Ok(())
}

async fn cmd_show(ledger: &Ledger<JsonFileStore>, args: ShowArgs) -> anyhow::Result<()> {
    match ledger.find_by_id(&EntryId::from(args.id.as_str())).await {
        Some(entry) => {
            print_entry(&entry);
            Ok(())
        }
        None => {
            println!("{} No entry with id {}", "✗".red(), args.id.bold());
            Ok(())
        }
    }
}

async fn cmd_last(ledger: &Ledger<JsonFileStore>) -> anyhow::Result<()> {
    match ledger.find_last().await {
        Some(entry) => {
            print_entry(&entry);
            Ok(())
        }
        None => {
            println!("Ledger is empty.");
            Ok(())
        }
    }
}

async fn cmd_verify(ledger: &Ledger<JsonFileStore>) -> anyhow::Result<()> {
    if ledger.verify().await {
        println!("{} Chain integrity verified", "✓".green().bold());
        Ok(())
    } else {
        println!("{} Chain integrity violated", "✗".red().bold());
        anyhow::bail!("ledger failed verification")
    }
}

fn print_entry(entry: &Entry) {
    println!("  Id:     {}", entry.id.to_string().cyan());
    println!("  Name:   {}", entry.name.bold());
    println!("  Amount: {}", entry.amount);
    println!("  Date:   {}", entry.date);
    println!("  Hash:   {}", entry.hash.to_hex().yellow());
}
