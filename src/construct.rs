// used for the category index
use core::hash::BuildHasherDefault;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use seahash::SeaHasher;

// used to print out readable forms of a construct
use std::fmt;

// books can be read from and written to JSON
use serde::{Deserialize, Serialize};

use tracing::{debug, info};

// our own stuff that we need
use crate::error::{CatalogError, Result};

pub type CategoryHasher = BuildHasherDefault<SeaHasher>;

pub const CATALOG_HEADER: &str = "=== BOOK CATALOG ===";
pub const EMPTY_CATALOG: &str = "No books in catalog";
pub const RULE_WIDTH: usize = 50;

// ------------- Book -------------
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category: category.into(),
            id: None,
        }
    }
    /// Attaches an identifier (usually an ISBN). Only usable while the book
    /// is still being built, since it consumes the value.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
    // Fields are only exposed through getters so that a book stays
    // immutable once it has been created.
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn author(&self) -> &str {
        &self.author
    }
    pub fn category(&self) -> &str {
        &self.category
    }
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' by {} ({})", self.title, self.author, self.category)?;
        if let Some(id) = &self.id {
            write!(f, " [ISBN {}]", id)?;
        }
        Ok(())
    }
}

// ------------- Shelf -------------
#[derive(Debug, Default, Clone)]
pub struct Shelf {
    category: Option<String>,
    books: Vec<Book>,
}

impl Shelf {
    /// A shelf without a category, which adopts the category of the first
    /// book placed on it.
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            books: Vec::new(),
        }
    }
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        match &self.category {
            Some(category) if category != book.category() => {
                return Err(CatalogError::CategoryMismatch {
                    shelf: category.clone(),
                    book: book.category().to_owned(),
                });
            }
            Some(_) => (),
            None => self.category = Some(book.category().to_owned()),
        }
        self.books.push(book);
        Ok(())
    }
    /// Case-insensitive ascending sort. Stable, so equal titles keep their
    /// insertion order.
    pub fn sort_by_title(&mut self) {
        self.books.sort_by_cached_key(|book| book.title().to_lowercase());
    }
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
    pub fn books(&self) -> &[Book] {
        &self.books
    }
    pub fn titles(&self) -> Vec<&str> {
        self.books.iter().map(Book::title).collect()
    }
    pub fn len(&self) -> usize {
        self.books.len()
    }
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
impl fmt::Display for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Shelf - Category: {}, Books: {}",
            self.category().unwrap_or("(unassigned)"),
            self.books.len()
        )
    }
}

// ------------- Catalog -------------
#[derive(Debug, Default)]
pub struct Catalog {
    shelves: Vec<Shelf>, // in order of first seen category
    index: HashMap<String, usize, CategoryHasher>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        let position = match self.index.entry(book.category().to_owned()) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                debug!(category = e.key().as_str(), shelf = self.shelves.len() + 1, "new shelf");
                self.shelves.push(Shelf::with_category(e.key().clone()));
                *e.insert(self.shelves.len() - 1)
            }
        };
        self.shelves[position].add_book(book)
    }
    pub fn add_books<I>(&mut self, books: I) -> Result<()>
    where
        I: IntoIterator<Item = Book>,
    {
        for book in books {
            self.add_book(book)?;
        }
        Ok(())
    }
    pub fn sort_all_shelves(&mut self) {
        for shelf in self.shelves.iter_mut() {
            shelf.sort_by_title();
        }
        info!(shelves = self.shelves.len(), books = self.book_count(), "shelves sorted");
    }
    pub fn shelf(&self, category: &str) -> Option<&Shelf> {
        self.index.get(category).map(|&position| &self.shelves[position])
    }
    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }
    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }
    pub fn book_count(&self) -> usize {
        self.shelves.iter().map(Shelf::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty()
    }
    /// Renders the whole catalog, one block per shelf in creation order.
    /// Shelf numbers are 1-based positions and carry no identity.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", CATALOG_HEADER);
        if self.shelves.is_empty() {
            out.push_str(EMPTY_CATALOG);
            out.push('\n');
        }
        for (number, shelf) in self.shelves.iter().enumerate() {
            out.push_str(&format!("\nShelf {}: {}\n", number + 1, shelf));
            for book in shelf.books() {
                out.push_str(&format!("  - {}\n", book));
            }
        }
        out.push('\n');
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push('\n');
        out
    }
}
