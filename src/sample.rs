//! Book sources feeding the catalog: a fixed shelf of classics, a random
//! generator and JSON files of book records.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::construct::Book;
use crate::error::Result;

pub const CATEGORIES: [&str; 9] = [
    "Fiction",
    "Science Fiction",
    "Mystery",
    "Romance",
    "Biography",
    "History",
    "Science",
    "Fantasy",
    "Thriller",
];

const WORDS: [&str; 40] = [
    "shadow", "river", "silent", "garden", "empire", "winter", "letter", "stone",
    "burning", "city", "forgotten", "light", "ocean", "hidden", "crown", "night",
    "glass", "memory", "iron", "storm", "distant", "house", "golden", "road",
    "broken", "sky", "last", "mountain", "secret", "fire", "wild", "island",
    "quiet", "star", "lost", "harbor", "evening", "machine", "paper", "song",
];

const FIRST_NAMES: [&str; 16] = [
    "Alice", "Bruno", "Clara", "Daniel", "Elena", "Farid", "Grace", "Hugo",
    "Ines", "Jonas", "Keiko", "Liam", "Maya", "Nikolai", "Olivia", "Pedro",
];

const LAST_NAMES: [&str; 16] = [
    "Anders", "Bishop", "Castillo", "Dumont", "Ellison", "Fischer", "Garner", "Hale",
    "Ivanova", "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Price",
];

/// Fifteen well known titles spread over six categories.
pub fn fixed_books() -> Vec<Book> {
    [
        ("The Great Gatsby", "F. Scott Fitzgerald", "Fiction"),
        ("To Kill a Mockingbird", "Harper Lee", "Fiction"),
        ("1984", "George Orwell", "Fiction"),
        ("Pride and Prejudice", "Jane Austen", "Fiction"),
        ("The Catcher in the Rye", "J.D. Salinger", "Fiction"),
        ("The Hobbit", "J.R.R. Tolkien", "Fantasy"),
        ("Harry Potter and the Sorcerer's Stone", "J.K. Rowling", "Fantasy"),
        ("The Lord of the Rings", "J.R.R. Tolkien", "Fantasy"),
        ("Dune", "Frank Herbert", "Science Fiction"),
        ("Neuromancer", "William Gibson", "Science Fiction"),
        ("The Da Vinci Code", "Dan Brown", "Mystery"),
        ("The Girl with the Dragon Tattoo", "Stieg Larsson", "Mystery"),
        ("A Brief History of Time", "Stephen Hawking", "Science"),
        ("The Selfish Gene", "Richard Dawkins", "Science"),
        ("Sapiens", "Yuval Noah Harari", "History"),
    ]
    .into_iter()
    .map(|(title, author, category)| Book::new(title, author, category))
    .collect()
}

/// Generates `count` books with made-up titles and authors, a category
/// drawn from [`CATEGORIES`] and a valid ISBN-13.
pub fn random_books<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Book> {
    (0..count)
        .map(|_| {
            // the lists are non-empty so choose never returns None
            let category = CATEGORIES.choose(rng).copied().unwrap_or(CATEGORIES[0]);
            Book::new(random_title(rng), random_author(rng), category).with_id(random_isbn(rng))
        })
        .collect()
}

fn random_title<R: Rng + ?Sized>(rng: &mut R) -> String {
    let length = rng.gen_range(2..=4);
    let mut title = String::new();
    for word in WORDS.choose_multiple(rng, length) {
        if title.is_empty() {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                title.extend(first.to_uppercase());
                title.push_str(chars.as_str());
            }
        } else {
            title.push(' ');
            title.push_str(word);
        }
    }
    title
}

fn random_author<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{} {}", first, last)
}

/// A 978-prefixed ISBN-13 with a correct check digit.
pub fn random_isbn<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits: Vec<u32> = vec![9, 7, 8];
    digits.extend((0..9).map(|_| rng.gen_range(0..10u32)));
    digits.push(isbn13_check_digit(&digits));
    digits.iter().map(|d| char::from(b'0' + *d as u8)).collect()
}

/// Check digit for the first twelve digits of an ISBN-13 (weights 1,3,1,3...).
pub fn isbn13_check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .take(12)
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    (10 - sum % 10) % 10
}

/// Reads a JSON array of book records, e.g.
/// `[{"title": "Dune", "author": "Frank Herbert", "category": "Science Fiction"}]`.
pub fn load_books(path: &Path) -> Result<Vec<Book>> {
    let reader = BufReader::new(File::open(path)?);
    let books: Vec<Book> = serde_json::from_reader(reader)?;
    debug!(path = %path.display(), books = books.len(), "books loaded");
    Ok(books)
}
