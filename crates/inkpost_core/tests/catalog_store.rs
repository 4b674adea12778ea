use inkpost_core::{
    parse_catalog, ArticleId, ArticleStore, CatalogError, CatalogResult, CatalogSource,
    JsonFileSource,
};
use std::sync::atomic::{AtomicU32, Ordering};

const SAMPLE_DOCUMENT: &str = r#"{
    "articles": [
        {
            "id": "1",
            "title": "Getting Started with Web Development",
            "excerpt": "A guide for beginners.",
            "content": "<p>Introductory body.</p>",
            "image": "/images/one.png",
            "date": "2024-03-15",
            "author": "John Doe",
            "category": "Web Development",
            "tags": ["HTML", "CSS"],
            "readTime": "5 min",
            "featured": true
        },
        {
            "id": 2,
            "title": "Modern CSS Techniques!",
            "excerpt": "Latest CSS features.",
            "content": "<p>CSS body.</p>",
            "image": "/images/two.png",
            "date": "2024-03-14",
            "author": "Jane Smith",
            "category": "CSS",
            "tags": ["CSS", "Design"]
        }
    ]
}"#;

/// Counting source for cache behavior checks.
struct CountingSource {
    document: String,
    reads: AtomicU32,
}

impl CountingSource {
    fn new(document: &str) -> Self {
        Self {
            document: document.to_string(),
            reads: AtomicU32::new(0),
        }
    }

    fn read_count(&self) -> u32 {
        self.reads.load(Ordering::SeqCst)
    }
}

impl CatalogSource for &CountingSource {
    fn read_document(&self) -> CatalogResult<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        "counting".to_string()
    }
}

struct FailingSource;

impl CatalogSource for FailingSource {
    fn read_document(&self) -> CatalogResult<String> {
        Err(CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "document missing",
        )))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

#[test]
fn parse_catalog_accepts_string_and_numeric_ids() {
    let catalog = parse_catalog(SAMPLE_DOCUMENT).unwrap();
    assert_eq!(catalog.len(), 2);

    let first = &catalog.articles()[0];
    assert_eq!(first.id, ArticleId::from("1"));
    assert_eq!(first.read_time.as_deref(), Some("5 min"));
    assert!(first.featured);

    // Numeric id canonicalizes to string form; optional fields default.
    let second = &catalog.articles()[1];
    assert_eq!(second.id, ArticleId::from("2"));
    assert_eq!(second.read_time, None);
    assert!(!second.featured);
}

#[test]
fn parse_catalog_rejects_malformed_documents() {
    assert!(matches!(
        parse_catalog("not json").unwrap_err(),
        CatalogError::Parse(_)
    ));
    assert!(matches!(
        parse_catalog(r#"{"articles": [{"id": "1"}]}"#).unwrap_err(),
        CatalogError::Parse(_)
    ));
}

#[test]
fn store_loads_from_file_and_resolves_lookups() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("articles.json");
    std::fs::write(&path, SAMPLE_DOCUMENT).unwrap();

    let store = ArticleStore::new(JsonFileSource::new(&path));
    let catalog = store.load();
    assert_eq!(catalog.len(), 2);

    let by_id = store.get_by_id(&ArticleId::from("2")).unwrap();
    assert_eq!(by_id.title, "Modern CSS Techniques!");

    let by_slug = store.get_by_slug("modern-css-techniques").unwrap();
    assert_eq!(by_slug.id, ArticleId::from("2"));

    assert!(store.get_by_id(&ArticleId::from("404")).is_none());
    assert!(store.get_by_slug("no-such-slug").is_none());
}

#[test]
fn missing_file_degrades_to_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArticleStore::new(JsonFileSource::new(dir.path().join("missing.json")));

    let catalog = store.load();
    assert!(catalog.is_empty());
    assert!(store.get_by_id(&ArticleId::from("1")).is_none());
}

#[test]
fn malformed_file_degrades_to_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let store = ArticleStore::new(JsonFileSource::new(&path));
    assert!(store.load().is_empty());
}

#[test]
fn failed_load_is_cached_for_the_session() {
    let store = ArticleStore::new(FailingSource);
    assert!(store.load().is_empty());
    // A second call serves the cached empty snapshot, still empty.
    assert!(store.load().is_empty());
}

#[test]
fn load_reads_the_source_exactly_once() {
    let source = CountingSource::new(SAMPLE_DOCUMENT);
    let store = ArticleStore::new(&source);

    assert_eq!(store.load().len(), 2);
    assert_eq!(store.load().len(), 2);
    store.get_by_id(&ArticleId::from("1")).unwrap();
    store.get_by_slug("modern-css-techniques").unwrap();

    assert_eq!(source.read_count(), 1);
}

#[test]
fn slug_collisions_resolve_to_first_catalog_occurrence() {
    let document = r#"{
        "articles": [
            {
                "id": "1",
                "title": "CSS: Grid",
                "excerpt": "e",
                "content": "c",
                "image": "i",
                "date": "2024-01-01",
                "author": "a",
                "category": "CSS",
                "tags": []
            },
            {
                "id": "2",
                "title": "CSS Grid!",
                "excerpt": "e",
                "content": "c",
                "image": "i",
                "date": "2024-01-02",
                "author": "a",
                "category": "CSS",
                "tags": []
            }
        ]
    }"#;

    let source = CountingSource::new(document);
    let store = ArticleStore::new(&source);
    let resolved = store.get_by_slug("css-grid").unwrap();
    assert_eq!(resolved.id, ArticleId::from("1"));
}
