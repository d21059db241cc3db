//! Output side of the catalog: printing a rendered listing and dumping it to
//! a plain-text file. The file is not meant to be read back.
//!
//! Output failures never abort a run: they are logged with `warn!` and the
//! remaining work carries on.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::construct::{Book, Catalog};
use crate::error::Result;

/// Console sink that goes quiet after its first failed write, e.g. when
/// stdout is piped into a program that exits early.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    open: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out, open: true }
    }
    /// Writes `text` as is. Returns whether the console is still open.
    pub fn say(&mut self, text: &str) -> bool {
        if self.open {
            if let Err(e) = print_listing(&mut self.out, text) {
                warn!(error = %e, "console output stopped");
                self.open = false;
            }
        }
        self.open
    }
    pub fn line(&mut self, text: &str) -> bool {
        self.say(&format!("{}\n", text))
    }
    pub fn is_open(&self) -> bool {
        self.open
    }
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// What [`publish`] managed to deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Published {
    pub printed: bool,
    pub written: bool,
}

/// Prints the listing to the console and, when `path` is given, writes it
/// to that file. Neither failure is fatal.
pub fn publish<W: Write>(console: &mut Console<W>, listing: &str, path: Option<&Path>) -> Published {
    let printed = console.say(listing);
    let written = match path {
        Some(path) => match write_listing(path, listing) {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not write listing");
                false
            }
        },
        None => false,
    };
    Published { printed, written }
}

/// The whole demonstration: preview the pile, organize it, summarize the
/// shelves, sort them and publish the final listing. Only a catalog error
/// fails the run; console and file problems are logged and skipped.
pub fn present<W: Write>(
    console: &mut Console<W>,
    books: Vec<Book>,
    preview: usize,
    path: Option<&Path>,
) -> Result<Published> {
    console.line("=== BEFORE ORGANIZATION ===");
    for book in books.iter().take(preview) {
        console.line(&format!("  - {}", book));
    }
    if books.len() > preview {
        console.line(&format!("  ... and {} more", books.len() - preview));
    }

    console.line("\n=== STEP 1: Organizing books by category ===");
    let mut catalog = Catalog::new();
    catalog.add_books(books)?;
    console.say(&shelf_summary(&catalog));

    console.line("\n=== STEP 2: Sorting books by title ===");
    catalog.sort_all_shelves();

    console.line("\n=== FINAL ORGANIZED CATALOG ===");
    Ok(publish(console, &catalog.render(), path))
}

/// Writes `listing` to any sink, e.g. a locked stdout.
pub fn print_listing<W: Write>(out: &mut W, listing: &str) -> io::Result<()> {
    out.write_all(listing.as_bytes())?;
    out.flush()
}

/// Creates (or truncates) `path` and writes the listing into it. The file
/// handle lives only for the duration of this call.
pub fn write_listing(path: &Path, listing: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(listing.as_bytes())?;
    writer.flush()?;
    info!(path = %path.display(), bytes = listing.len(), "listing written");
    Ok(())
}

/// One line per shelf, as shown right after organizing.
pub fn shelf_summary(catalog: &Catalog) -> String {
    catalog
        .shelves()
        .iter()
        .enumerate()
        .map(|(number, shelf)| format!("  Shelf {}: {}\n", number + 1, shelf))
        .collect()
}
