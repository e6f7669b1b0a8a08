use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::query::{ensure_in_range, CatalogQuery, Predicate};

use super::Catalog;

/// A book suggestion
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Decade of publication (e.g., 1960)
    pub decade: i32,
}

impl Book {
    fn new(title: &str, author: &str, genre: &str, decade: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            decade,
        }
    }
}

/// Query parameters for `/suggest-books`
#[derive(Debug, Default, Deserialize)]
pub struct BookQuery {
    /// Matched exactly, ignoring case
    pub genre: Option<String>,
    /// Matched as a substring of the author name
    pub author: Option<String>,
    pub decade: Option<i32>,
    pub limit: Option<u32>,
}

impl CatalogQuery for BookQuery {
    type Record = Book;

    const ITEMS: &'static str = "books";
    const NOT_FOUND: &'static str = "No books found for given filters.";

    fn records(catalog: &Catalog) -> &[Book] {
        &catalog.books
    }

    fn limit(&self) -> Option<u32> {
        self.limit
    }

    fn validate(&self) -> AppResult<()> {
        ensure_in_range("decade", self.decade, 1800..=2020)
    }

    fn predicate(&self) -> Predicate<Book> {
        Predicate::<Book>::builder()
            .exact(self.genre.as_deref(), |b| b.genre.as_str())
            .contains(self.author.as_deref(), |b| b.author.as_str())
            .equals(self.decade, |b| b.decade)
            .build()
    }
}

pub fn dataset() -> Vec<Book> {
    vec![
        Book::new("1984", "George Orwell", "dystopian", 1940),
        Book::new("Pride and Prejudice", "Jane Austen", "romance", 1810),
        Book::new("The Hobbit", "J.R.R. Tolkien", "fantasy", 1930),
        Book::new("To Kill a Mockingbird", "Harper Lee", "drama", 1960),
        Book::new("The Da Vinci Code", "Dan Brown", "thriller", 2000),
        Book::new("Atomic Habits", "James Clear", "self-help", 2010),
        Book::new("Dune", "Frank Herbert", "science fiction", 1960),
        Book::new("The Alchemist", "Paulo Coelho", "philosophical", 1980),
    ]
}
