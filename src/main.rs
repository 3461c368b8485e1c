use clap::Parser;
use kwdash::cli::{Cli, Command, ListArgs, ShowArgs};
use kwdash::config::Config;
use kwdash::dashboard::Dashboard;
use kwdash::report;
use kwdash::selector::{self, Selection};
use kwdash::session::Session;
use kwdash::shell::Shell;
use kwdash::store::sqlite::SqliteStore;
use kwdash::store::{ArchiveStore, SnapshotRepository};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "kwdash=debug" } else { "kwdash=warn" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn open_store(config: &Config) -> Result<ArchiveStore<SqliteStore>, Box<dyn std::error::Error>> {
    let backend = match &config.db_path {
        Some(path) => SqliteStore::open(path)?,
        None => SqliteStore::open_default()?,
    };
    Ok(ArchiveStore::new(backend))
}

fn list(store: &impl SnapshotRepository, args: &ListArgs) {
    let archive = store.load();

    if args.json {
        println!("{}", report::json::render_archive(&archive));
        return;
    }

    if archive.is_empty() {
        println!("No snapshots found. Run 'kwdash session' and analyze some keywords.");
        return;
    }

    println!("Snapshots:");
    println!("{:<8} {:<20} {:<10}", "Index", "Date", "Keywords");
    println!("{}", "-".repeat(40));
    for entry in selector::list(&archive).iter().skip(1) {
        let Some(index) = entry.index else { continue };
        println!("{:<8} {:<20} {:<10}", index, entry.label, archive[index].keyword_analysis.len());
    }
}

fn show(store: &impl SnapshotRepository, args: &ShowArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let archive = store.load();

    let index = match args.index {
        Some(index) => index,
        None if archive.is_empty() => {
            return Err("No snapshots found. Run 'kwdash session' and analyze some keywords.".into());
        }
        None => archive.len() - 1,
    };

    // one-shot commands have no in-memory current result
    let snapshot = selector::resolve(Selection::Index(index), None, &archive)?
        .ok_or("snapshot not found")?;

    if args.format() == report::Format::Table {
        println!("snapshot {index} ({})", snapshot.label());
    }
    println!("{}", report::render(snapshot, args.format(), &config.currency));
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    let store = match open_store(&config) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error opening snapshot store: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::Session(_) => {
            let dashboard = Dashboard::new(Session::new(config.initial_quota), store);
            let mut shell = Shell::new(dashboard, &config);

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            if let Err(e) = shell.run(stdin.lock(), &mut stdout).await {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Command::List(args) => list(&store, &args),
        Command::Show(args) => {
            if let Err(e) = show(&store, &args, &config) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
