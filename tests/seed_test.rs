//! Seeding behaviour against the in-memory repositories.
//!
//! Run with: `cargo test --test seed_test`
use techfinalyear_backend::create_storage;
use techfinalyear_backend::db::Storage;
use techfinalyear_backend::seed::{self, SeedData, SeedError};

#[tokio::test]
async fn test_seed_populates_catalog_and_testimonials() {
    let storage = Storage::in_memory();
    assert!(!storage.is_seeded());

    let report = seed::seed(&storage).await.expect("first seed succeeds");
    assert!(storage.is_seeded());
    assert_eq!(report.categories, 7);
    assert_eq!(report.projects, 50);
    assert_eq!(report.testimonials, 5);

    assert_eq!(storage.catalog.list_categories().await.unwrap().len(), 7);
    assert_eq!(storage.catalog.list_projects().await.unwrap().len(), 50);
    assert_eq!(
        storage.testimonials.list_testimonials().await.unwrap().len(),
        5
    );
    assert!(storage.leads.list_inquiries().await.unwrap().is_empty());
    assert!(storage.leads.list_custom_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_seed_runs_once_per_storage() {
    let (storage, _) = create_storage().await.unwrap();

    let second = seed::seed(&storage).await;
    assert!(matches!(second, Err(SeedError::AlreadySeeded)));

    // The refused run inserted nothing.
    assert_eq!(storage.catalog.list_categories().await.unwrap().len(), 7);
    assert_eq!(storage.catalog.list_projects().await.unwrap().len(), 50);
}

#[tokio::test]
async fn test_independent_runs_share_content_not_ids() {
    let (first, _) = create_storage().await.unwrap();
    let (second, _) = create_storage().await.unwrap();

    let a = first.catalog.list_projects().await.unwrap();
    let b = second.catalog.list_projects().await.unwrap();
    assert_eq!(a.len(), b.len());

    for (x, y) in a.iter().zip(&b) {
        assert_ne!(x.id, y.id);
        assert_eq!(x.title, y.title);
        assert_eq!(x.category, y.category);
        assert_eq!(x.price, y.price);
        assert_eq!(x.features, y.features);
    }
}

#[tokio::test]
async fn test_seeded_lookups() {
    let (storage, _) = create_storage().await.unwrap();

    let it = storage
        .catalog
        .get_category_by_slug("it")
        .await
        .unwrap()
        .expect("it is seeded");
    assert_eq!(it.name, "IT / Computer Engineering");
    assert_eq!(
        storage.catalog.get_category(it.id).await.unwrap().as_ref(),
        Some(&it)
    );

    let counts: Vec<(String, usize)> = {
        let mut out = Vec::new();
        for category in storage.catalog.list_categories().await.unwrap() {
            let n = storage
                .catalog
                .list_projects_by_category(&category.slug)
                .await
                .unwrap()
                .len();
            out.push((category.slug, n));
        }
        out
    };
    let lookup = |slug: &str| counts.iter().find(|(s, _)| s == slug).unwrap().1;
    assert_eq!(lookup("it"), 20);
    assert_eq!(lookup("cs"), 25);
    assert_eq!(lookup("civil"), 1);

    // Display counters are independent of the real project counts.
    assert_eq!(it.project_count, 45);
}

#[tokio::test]
async fn test_stock_thumbnails_fill_gaps() {
    let (storage, _) = create_storage().await.unwrap();

    let ece = storage
        .catalog
        .list_projects_by_category("ece")
        .await
        .unwrap();
    assert_eq!(
        ece[0].thumbnail.as_deref(),
        Some(seed::default_thumbnail("ece"))
    );
}

#[tokio::test]
async fn test_seed_with_custom_data() {
    let storage = Storage::in_memory();
    let data: SeedData = serde_json::from_value(serde_json::json!({
        "categories": [{
            "name": "Aerospace",
            "slug": "aerospace",
            "description": "Flight systems.",
            "icon": "rocket"
        }],
        "projects": [],
        "testimonials": []
    }))
    .unwrap();

    let report = seed::seed_with(&storage, data).await.unwrap();
    assert_eq!(report.categories, 1);
    assert_eq!(report.projects, 0);

    let category = storage.catalog.list_categories().await.unwrap().remove(0);
    assert_eq!(category.slug, "aerospace");
    assert_eq!(category.project_count, 0);
}
