//! Shelver – groups book records into category shelves and keeps each shelf
//! sorted by title.
//!
//! The model is deliberately small:
//! * A [`construct::Book`] is an immutable record of title, author, category
//!   and an optional identifier (usually an ISBN).
//! * A [`construct::Shelf`] holds books of exactly one category, in order.
//! * A [`construct::Catalog`] owns the shelves, at most one per category, and
//!   routes every incoming book to the shelf of its category.
//!
//! ## Modules
//! * [`construct`] – Books, shelves and the catalog, including rendering.
//! * [`sample`] – Book sources: fixed classics, random books, JSON files.
//! * [`listing`] – Printing the rendered catalog and writing it to a file.
//! * [`settings`] – Layered configuration for the `shelver` binary.
//! * [`error`] – The crate wide [`error::CatalogError`].
//!
//! ## Quick Start
//! ```
//! use shelver::construct::{Book, Catalog};
//! let mut catalog = Catalog::new();
//! catalog.add_book(Book::new("Animal Farm", "George Orwell", "Fiction")).unwrap();
//! catalog.add_book(Book::new("1984", "George Orwell", "Fiction")).unwrap();
//! catalog.add_book(Book::new("Dune", "Frank Herbert", "Science Fiction")).unwrap();
//! catalog.sort_all_shelves();
//! assert_eq!(catalog.shelf_count(), 2);
//! assert_eq!(catalog.shelf("Fiction").unwrap().titles(), vec!["1984", "Animal Farm"]);
//! ```
//!
//! ## Rendering
//! [`construct::Catalog::render`] produces a deterministic listing with one
//! block per shelf in the order the categories were first seen. Shelf
//! numbers in the listing are positions only; a shelf is identified by its
//! category.

pub mod construct;
pub mod error;
pub mod listing;
pub mod sample;
pub mod settings;

pub use error::{CatalogError, Result};
