//! Demonstration binary: produces a pile of books, organizes it into
//! category shelves, sorts every shelf by title and prints the catalog.
//!
//! Usage: `shelver [settings-file]`. See [`shelver::settings`] for the keys.

use std::io;
use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shelver::construct::Book;
use shelver::listing::{Console, present};
use shelver::sample::{fixed_books, load_books, random_books};
use shelver::settings::{BookSource, Settings};

fn produce_books(settings: &Settings) -> shelver::Result<Vec<Book>> {
    match settings.source {
        BookSource::Fixed => Ok(fixed_books()),
        BookSource::Random => {
            let mut rng = match settings.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Ok(random_books(settings.sample_size, &mut rng))
        }
        // validated when the settings were loaded
        BookSource::File => match &settings.books_path {
            Some(path) => load_books(path),
            None => Ok(Vec::new()),
        },
    }
}

fn run(settings: &Settings) -> shelver::Result<()> {
    let books = produce_books(settings)?;
    info!(source = ?settings.source, books = books.len(), "books produced");

    let mut console = Console::new(io::stdout().lock());
    let output = settings.output();
    let published = present(&mut console, books, settings.preview, output.as_deref())?;
    info!(printed = published.printed, written = published.written, "listing published");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shelver=info")),
        )
        .with_writer(io::stderr)
        .init();

    let file = std::env::args().nth(1);
    let settings = match Settings::load(file.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            error!(%e, "invalid settings");
            return ExitCode::FAILURE;
        }
    };

    match run(&settings) {
        Ok(()) => {
            info!("catalog complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(%e, "catalog failed");
            ExitCode::FAILURE
        }
    }
}
