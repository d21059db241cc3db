use std::io::{self, Write};

use shelver::construct::{Book, Catalog};
use shelver::listing::{Console, Published, present, print_listing, publish, shelf_summary, write_listing};
use shelver::sample::fixed_books;

/// Accepts `budget` bytes, then fails like a pipe whose reader went away.
struct ClosingPipe {
    taken: Vec<u8>,
    budget: usize,
}

impl Write for ClosingPipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.taken.len() + buf.len() > self.budget {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        self.taken.extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn small_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_book(Book::new("Animal Farm", "George Orwell", "Fiction")).unwrap();
    catalog.add_book(Book::new("Dune", "Frank Herbert", "Science Fiction").with_id("9780441172719")).unwrap();
    catalog.add_book(Book::new("1984", "George Orwell", "Fiction")).unwrap();
    catalog.sort_all_shelves();
    catalog
}

#[test]
fn listing_layout() {
    let expected = "\
=== BOOK CATALOG ===

Shelf 1: Shelf - Category: Fiction, Books: 2
  - '1984' by George Orwell (Fiction)
  - 'Animal Farm' by George Orwell (Fiction)

Shelf 2: Shelf - Category: Science Fiction, Books: 1
  - 'Dune' by Frank Herbert (Science Fiction) [ISBN 9780441172719]

==================================================
";
    assert_eq!(small_catalog().render(), expected);
}

#[test]
fn empty_listing() {
    let expected = "=== BOOK CATALOG ===\nNo books in catalog\n\n==================================================\n";
    assert_eq!(Catalog::new().render(), expected);
}

#[test]
fn rendering_is_repeatable() {
    let catalog = small_catalog();
    assert_eq!(catalog.render(), catalog.render());
}

#[test]
fn summary_lists_each_shelf() {
    assert_eq!(
        shelf_summary(&small_catalog()),
        "  Shelf 1: Shelf - Category: Fiction, Books: 2\n  Shelf 2: Shelf - Category: Science Fiction, Books: 1\n"
    );
}

#[test]
fn printed_listing_matches_render() {
    let listing = small_catalog().render();
    let mut out = Vec::new();
    print_listing(&mut out, &listing).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), listing);
}

#[test]
fn listing_file_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("book_catalog.txt");
    let listing = small_catalog().render();
    write_listing(&path, &listing).expect("writable path");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), listing);
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("book_catalog.txt");
    let result = write_listing(&path, "anything");
    assert!(matches!(result, Err(shelver::CatalogError::Io(_))));
}

#[test]
fn unwritable_path_still_prints_listing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("book_catalog.txt");
    let listing = small_catalog().render();
    let mut console = Console::new(Vec::new());
    let published = publish(&mut console, &listing, Some(&path));
    assert_eq!(published, Published { printed: true, written: false });
    assert_eq!(String::from_utf8(console.into_inner()).unwrap(), listing);
}

#[test]
fn presentation_survives_bad_output_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("book_catalog.txt");
    let mut console = Console::new(Vec::new());
    let published = present(&mut console, fixed_books(), 5, Some(&path)).expect("no catalog error");
    assert!(published.printed);
    assert!(!published.written);
    let printed = String::from_utf8(console.into_inner()).unwrap();
    assert!(printed.starts_with("=== BEFORE ORGANIZATION ===\n"));
    assert!(printed.contains("  ... and 10 more\n"));
    assert!(printed.contains("  Shelf 6: Shelf - Category: History, Books: 1\n"));
    assert!(printed.ends_with(&format!("{}\n", "=".repeat(50))));
}

#[test]
fn closed_console_does_not_stop_the_file_dump() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("book_catalog.txt");
    let mut console = Console::new(ClosingPipe { taken: Vec::new(), budget: 10 });
    let published = present(&mut console, fixed_books(), 5, Some(&path)).expect("no catalog error");
    assert_eq!(published, Published { printed: false, written: true });
    assert!(!console.is_open(), "console closes after the first failed write");
    assert!(console.into_inner().taken.is_empty(), "header did not fit in the pipe");
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("=== BOOK CATALOG ===\n"));
}

#[test]
fn written_file_matches_printed_listing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("book_catalog.txt");
    let listing = small_catalog().render();
    let mut console = Console::new(Vec::new());
    assert_eq!(publish(&mut console, &listing, Some(&path)), Published { printed: true, written: true });
    assert_eq!(std::fs::read_to_string(&path).unwrap(), listing);
    assert_eq!(String::from_utf8(console.into_inner()).unwrap(), listing);
}
