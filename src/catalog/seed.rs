//! Built-in catalog contents loaded at startup
//!
//! Identifiers are fixed so seeded records keep the same ids across restarts.

use uuid::Uuid;

use super::{AuthorRecord, BookRecord};

fn author(id: u128, name: &str, born: Option<i32>) -> AuthorRecord {
    AuthorRecord {
        id: Uuid::from_u128(id),
        name: name.to_string(),
        born,
    }
}

fn book(id: u128, title: &str, author: &str, published: i32, genres: &[&str]) -> BookRecord {
    BookRecord {
        id: Uuid::from_u128(id),
        title: title.to_string(),
        author: author.to_string(),
        published,
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

pub fn authors() -> Vec<AuthorRecord> {
    vec![
        author(0xafa51ab0_344d_11e9_a414_719c6709cf3e, "Robert Martin", Some(1952)),
        author(0xafa5b6f0_344d_11e9_a414_719c6709cf3e, "Martin Fowler", Some(1963)),
        author(0xafa5b6f1_344d_11e9_a414_719c6709cf3e, "Fyodor Dostoevsky", Some(1821)),
        author(0xafa5b6f2_344d_11e9_a414_719c6709cf3e, "Joshua Kerievsky", None),
        author(0xafa5b6f3_344d_11e9_a414_719c6709cf3e, "Sandi Metz", None),
    ]
}

pub fn books() -> Vec<BookRecord> {
    vec![
        book(
            0xafa5b6f4_344d_11e9_a414_719c6709cf3e,
            "Clean Code",
            "Robert Martin",
            2008,
            &["refactoring"],
        ),
        book(
            0xafa5b6f5_344d_11e9_a414_719c6709cf3e,
            "Agile software development",
            "Robert Martin",
            2002,
            &["agile", "patterns", "design"],
        ),
        book(
            0xafa5de00_344d_11e9_a414_719c6709cf3e,
            "Refactoring, edition 2",
            "Martin Fowler",
            2018,
            &["refactoring"],
        ),
        book(
            0xafa5de01_344d_11e9_a414_719c6709cf3e,
            "Refactoring to patterns",
            "Joshua Kerievsky",
            2008,
            &["refactoring", "patterns"],
        ),
        book(
            0xafa5de02_344d_11e9_a414_719c6709cf3e,
            "Practical Object-Oriented Design, An Agile Primer Using Ruby",
            "Sandi Metz",
            2012,
            &["refactoring", "design"],
        ),
        book(
            0xafa5de03_344d_11e9_a414_719c6709cf3e,
            "Crime and punishment",
            "Fyodor Dostoevsky",
            1866,
            &["classic", "crime"],
        ),
        book(
            0xafa5de04_344d_11e9_a414_719c6709cf3e,
            "Demons",
            "Fyodor Dostoevsky",
            1872,
            &["classic", "revolution"],
        ),
    ]
}
