//! Integration tests for the GraphQL schema
//!
//! These execute GraphQL documents against a schema built over a seeded
//! catalog and check the JSON results, the schema shape, and error
//! extensions.

use std::sync::Arc;

use async_graphql::{Request, Value as GqlValue, Variables};
use catalog::catalog::CatalogStore;
use catalog::graphql::{CatalogSchema, build_schema};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn seeded_schema() -> (Arc<CatalogStore>, CatalogSchema) {
    let store = Arc::new(CatalogStore::seeded());
    let schema = build_schema(store.clone());
    (store, schema)
}

async fn run(schema: &CatalogSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
    response.data.into_json().unwrap()
}

async fn run_with(schema: &CatalogSchema, query: &str, variables: Value) -> async_graphql::Response {
    schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await
}

fn titles(books: &Value) -> Vec<&str> {
    books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect()
}

const ADD_BOOK: &str = r#"
    mutation AddBook($title: String!, $author: String!, $published: Int!, $genres: [String!]!) {
        addBook(title: $title, author: $author, published: $published, genres: $genres) {
            title
            author
            published
            genres
        }
    }
"#;

// ============================================================================
// Counts
// ============================================================================

#[tokio::test]
async fn test_counts() {
    let (_, schema) = seeded_schema();
    let data = run(&schema, "{ bookCount authorCount }").await;
    assert_eq!(data, json!({ "bookCount": 7, "authorCount": 5 }));
}

// ============================================================================
// allBooks
// ============================================================================

#[tokio::test]
async fn test_all_books_unfiltered() {
    let (_, schema) = seeded_schema();
    let data = run(&schema, "{ allBooks { title } }").await;
    assert_eq!(
        titles(&data["allBooks"]),
        vec![
            "Clean Code",
            "Agile software development",
            "Refactoring, edition 2",
            "Refactoring to patterns",
            "Practical Object-Oriented Design, An Agile Primer Using Ruby",
            "Crime and punishment",
            "Demons",
        ]
    );
}

#[tokio::test]
async fn test_all_books_by_author() {
    let (_, schema) = seeded_schema();
    let data = run(
        &schema,
        r#"{ allBooks(author: "Robert Martin") { title author } }"#,
    )
    .await;
    assert_eq!(
        data["allBooks"],
        json!([
            { "title": "Clean Code", "author": "Robert Martin" },
            { "title": "Agile software development", "author": "Robert Martin" },
        ])
    );
}

#[tokio::test]
async fn test_all_books_by_genre() {
    let (_, schema) = seeded_schema();
    let data = run(&schema, r#"{ allBooks(genre: "refactoring") { title } }"#).await;
    assert_eq!(
        titles(&data["allBooks"]),
        vec![
            "Clean Code",
            "Refactoring, edition 2",
            "Refactoring to patterns",
            "Practical Object-Oriented Design, An Agile Primer Using Ruby",
        ]
    );
}

#[tokio::test]
async fn test_all_books_by_author_and_genre() {
    let (_, schema) = seeded_schema();
    let data = run(
        &schema,
        r#"{ allBooks(author: "Robert Martin", genre: "design") { title published genres } }"#,
    )
    .await;
    assert_eq!(
        data["allBooks"],
        json!([{
            "title": "Agile software development",
            "published": 2002,
            "genres": ["agile", "patterns", "design"],
        }])
    );
}

#[tokio::test]
async fn test_all_books_no_match_is_empty_list() {
    let (_, schema) = seeded_schema();
    let data = run(&schema, r#"{ allBooks(genre: "poetry") { title } }"#).await;
    assert_eq!(data["allBooks"], json!([]));
}

// ============================================================================
// allAuthors
// ============================================================================

#[tokio::test]
async fn test_all_authors() {
    let (_, schema) = seeded_schema();
    let data = run(&schema, "{ allAuthors { name born bookCount } }").await;
    assert_eq!(
        data["allAuthors"],
        json!([
            { "name": "Robert Martin", "born": 1952, "bookCount": 2 },
            { "name": "Martin Fowler", "born": 1963, "bookCount": 1 },
            { "name": "Joshua Kerievsky", "born": null, "bookCount": 1 },
            { "name": "Sandi Metz", "born": null, "bookCount": 1 },
            { "name": "Fyodor Dostoevsky", "born": 1821, "bookCount": 2 },
        ])
    );
}

#[tokio::test]
async fn test_reads_are_repeatable() {
    let (_, schema) = seeded_schema();
    let query = "{ allBooks { title genres } allAuthors { name bookCount } }";
    let first = run(&schema, query).await;
    let second = run(&schema, query).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_all_authors_missing_record_is_internal_error() {
    let store = Arc::new(CatalogStore::with_data(
        Vec::new(),
        catalog::catalog::seed::books(),
    ));
    let schema = build_schema(store);

    let response = schema.execute("{ allAuthors { name } }").await;

    assert_eq!(response.errors.len(), 1);
    let extensions = response.errors[0].extensions.as_ref().unwrap();
    assert_eq!(
        extensions.get("code"),
        Some(&GqlValue::from("INTERNAL_SERVER_ERROR"))
    );
}

// ============================================================================
// addBook
// ============================================================================

#[tokio::test]
async fn test_add_book_new_author() {
    let (store, schema) = seeded_schema();

    let response = run_with(
        &schema,
        ADD_BOOK,
        json!({
            "title": "New Book",
            "author": "New Author",
            "published": 2020,
            "genres": [],
        }),
    )
    .await;
    assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "addBook": {
                "title": "New Book",
                "author": "New Author",
                "published": 2020,
                "genres": [],
            }
        })
    );

    let data = run(&schema, "{ bookCount authorCount allAuthors { name born bookCount } }").await;
    assert_eq!(data["bookCount"], json!(8));
    assert_eq!(data["authorCount"], json!(6));
    let authors = data["allAuthors"].as_array().unwrap();
    assert_eq!(
        authors.last(),
        Some(&json!({ "name": "New Author", "born": null, "bookCount": 1 }))
    );

    let added = store.list_books().pop().unwrap();
    assert_eq!(added.title, "New Book");
    assert!(!added.id.is_nil());
}

#[tokio::test]
async fn test_add_book_known_author() {
    let (_, schema) = seeded_schema();

    let response = run_with(
        &schema,
        ADD_BOOK,
        json!({
            "title": "The Idiot",
            "author": "Fyodor Dostoevsky",
            "published": 1869,
            "genres": ["classic"],
        }),
    )
    .await;
    assert!(response.errors.is_empty(), "errors: {:?}", response.errors);

    let data = run(
        &schema,
        r#"{ bookCount authorCount allBooks(author: "Fyodor Dostoevsky", genre: "classic") { title } }"#,
    )
    .await;
    assert_eq!(data["bookCount"], json!(8));
    assert_eq!(data["authorCount"], json!(5));
    assert_eq!(
        titles(&data["allBooks"]),
        vec!["Crime and punishment", "Demons", "The Idiot"]
    );
}

#[tokio::test]
async fn test_add_book_duplicate_title() {
    let (store, schema) = seeded_schema();
    let before = store.list_books();

    let response = run_with(
        &schema,
        ADD_BOOK,
        json!({
            "title": "Clean Code",
            "author": "Someone Else",
            "published": 2024,
            "genres": ["refactoring"],
        }),
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    let error = &response.errors[0];
    assert_eq!(error.message, "Title must be unique");
    let extensions = error.extensions.as_ref().unwrap();
    assert_eq!(extensions.get("code"), Some(&GqlValue::from("BAD_USER_INPUT")));
    assert_eq!(extensions.get("invalidArgs"), Some(&GqlValue::from("Clean Code")));
    assert_eq!(response.data.into_json().unwrap(), json!({ "addBook": null }));

    assert_eq!(store.list_books(), before);
    assert_eq!(store.author_count(), 5);
}

#[tokio::test]
async fn test_rejected_add_book_does_not_stop_later_mutations() {
    let (store, schema) = seeded_schema();

    let response = schema
        .execute(
            r#"mutation {
                rejected: addBook(title: "Demons", author: "Fyodor Dostoevsky", published: 1872, genres: []) { title }
                accepted: addBook(title: "The Idiot", author: "Fyodor Dostoevsky", published: 1869, genres: ["classic"]) { title }
            }"#,
        )
        .await;

    assert_eq!(response.errors.len(), 1);
    let extensions = response.errors[0].extensions.as_ref().unwrap();
    assert_eq!(extensions.get("code"), Some(&GqlValue::from("BAD_USER_INPUT")));
    assert_eq!(extensions.get("invalidArgs"), Some(&GqlValue::from("Demons")));
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "rejected": null, "accepted": { "title": "The Idiot" } })
    );
    assert_eq!(store.book_count(), 8);
    assert_eq!(store.author_count(), 5);
}

#[tokio::test]
async fn test_add_book_requires_all_arguments() {
    let (store, schema) = seeded_schema();

    let response = schema
        .execute(r#"mutation { addBook(title: "Partial", author: "Someone") { title } }"#)
        .await;

    assert!(!response.errors.is_empty());
    assert_eq!(store.book_count(), 7);
}

// ============================================================================
// Schema shape
// ============================================================================

const TYPE_FIELDS: &str = r#"
    fragment TypeRef on __Type {
        kind
        name
        ofType { kind name ofType { kind name ofType { kind name } } }
    }
    query Shape($name: String!) {
        __type(name: $name) {
            fields {
                name
                type { ...TypeRef }
                args { name type { ...TypeRef } }
            }
        }
    }
"#;

fn render_type(t: &Value) -> String {
    match t["kind"].as_str() {
        Some("NON_NULL") => format!("{}!", render_type(&t["ofType"])),
        Some("LIST") => format!("[{}]", render_type(&t["ofType"])),
        _ => t["name"].as_str().unwrap().to_string(),
    }
}

/// Render a type's fields as `name(arg: Type, ...): Type`, sorted by name
async fn field_signatures(schema: &CatalogSchema, type_name: &str) -> Vec<String> {
    let response = run_with(schema, TYPE_FIELDS, json!({ "name": type_name })).await;
    assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
    let data = response.data.into_json().unwrap();

    let mut signatures: Vec<String> = data["__type"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| {
            let args: Vec<String> = f["args"]
                .as_array()
                .unwrap()
                .iter()
                .map(|a| format!("{}: {}", a["name"].as_str().unwrap(), render_type(&a["type"])))
                .collect();
            let name = f["name"].as_str().unwrap();
            let ty = render_type(&f["type"]);
            if args.is_empty() {
                format!("{name}: {ty}")
            } else {
                format!("{name}({}): {ty}", args.join(", "))
            }
        })
        .collect();
    signatures.sort();
    signatures
}

#[tokio::test]
async fn test_schema_shape() {
    let (_, schema) = seeded_schema();

    assert_eq!(
        field_signatures(&schema, "Book").await,
        vec![
            "author: String!",
            "genres: [String!]!",
            "published: Int!",
            "title: String!",
        ]
    );
    assert_eq!(
        field_signatures(&schema, "Author").await,
        vec!["bookCount: Int", "born: Int", "name: String!"]
    );
    assert_eq!(
        field_signatures(&schema, "Query").await,
        vec![
            "allAuthors: [Author!]!",
            "allBooks(author: String, genre: String): [Book]!",
            "authorCount: Int!",
            "bookCount: Int!",
        ]
    );
    assert_eq!(
        field_signatures(&schema, "Mutation").await,
        vec![
            "addBook(title: String!, author: String!, published: Int!, genres: [String!]!): Book"
        ]
    );
}

#[test]
fn test_sdl_declares_catalog_types() {
    let (_, schema) = seeded_schema();
    let sdl = schema.sdl();
    for declaration in ["type Book", "type Author", "type Query", "type Mutation"] {
        assert!(sdl.contains(declaration), "missing {declaration:?} in:\n{sdl}");
    }
}
