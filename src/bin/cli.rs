//! bookstock CLI Client
//!
//! Command-line interface for a running bookstock server.

use bookstock::{Client, Config};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// bookstock CLI
#[derive(Parser, Debug)]
#[command(name = "bookstock-cli")]
#[command(about = "CLI for the bookstock inventory server")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    server: String,

    /// Request timeout in milliseconds (0 = none)
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every book
    List,

    /// Show a book
    Find {
        /// The book ID
        id: String,
    },

    /// Show the number of copies in stock
    Getcopies {
        /// The book ID
        id: String,
    },

    /// Add copies to stock
    Addcopies {
        /// The book ID
        id: String,

        /// How many copies
        #[arg(allow_negative_numbers = true)]
        copies: i64,
    },

    /// Remove copies from stock
    Subcopies {
        /// The book ID
        id: String,

        /// How many copies
        #[arg(allow_negative_numbers = true)]
        copies: i64,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();

    let config = Config::builder()
        .listen_addr(&args.server)
        .client_timeout_ms(args.timeout_ms)
        .build();

    if let Err(e) = run(&config, args.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config, command: Commands) -> bookstock::Result<()> {
    let client = Client::from_config(config)?;

    match command {
        Commands::List => {
            for book in client.get_all_books()? {
                println!("{}: {}", book.id, book);
            }
        }
        Commands::Find { id } => println!("{}", client.get_book(&id)?),
        Commands::Getcopies { id } => {
            println!("{} copies in stock", client.get_copies(&id)?)
        }
        Commands::Addcopies { id, copies } => {
            println!("{} copies in stock", client.add_copies(&id, copies)?)
        }
        Commands::Subcopies { id, copies } => {
            println!("{} copies in stock", client.sub_copies(&id, copies)?)
        }
    }

    Ok(())
}
