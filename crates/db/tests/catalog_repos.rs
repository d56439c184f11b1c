//! Integration tests for the project, service, page and UI block
//! repositories against a real database.

use std::sync::atomic::{AtomicUsize, Ordering};

use assert_matches::assert_matches;
use folio_core::catalog::{BlockSection, ProjectCategory, ServiceCategory};
use folio_core::error::CoreError;
use folio_db::models::page::UpsertPage;
use folio_db::models::project::{CreateProject, ProjectFilter, UpdateProject};
use folio_db::models::service::{CreateService, ServiceFilter, UpdateService};
use folio_db::models::ui_block::UpsertUiBlock;
use folio_db::repositories::{PageRepo, ProjectRepo, ServiceRepo, UiBlockRepo};
use folio_db::slug::{write_with_unique_slug, SlugTable};
use folio_db::StoreError;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str, category: ProjectCategory) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        title_ru: None,
        title_en: None,
        description: format!("{title} description"),
        description_ru: None,
        description_en: None,
        category,
        slug: None,
        tags: vec!["Rust".to_string(), "Axum".to_string()],
        featured_image: None,
        demo_url: None,
        github_url: None,
        is_featured: false,
        sort_order: 0,
    }
}

fn new_service(name: &str, price: Option<&str>) -> CreateService {
    CreateService {
        name: name.to_string(),
        name_ru: None,
        name_en: None,
        description: format!("{name} description"),
        description_ru: None,
        description_en: None,
        category: ServiceCategory::Development,
        slug: None,
        price: price.map(str::to_string),
        is_featured: false,
        sort_order: 0,
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_create_generates_slug_and_keeps_tags(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("My Great Shop", ProjectCategory::WebDev))
        .await
        .unwrap();

    assert_eq!(project.slug, "my-great-shop");
    assert_eq!(project.category, "web-dev");
    assert_eq!(project.tags.0, vec!["Rust", "Axum"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn identical_titles_get_gapless_suffixes(pool: PgPool) {
    let mut slugs = Vec::new();
    for _ in 0..4 {
        let p = ProjectRepo::create(&pool, &new_project("Landing", ProjectCategory::Marketing))
            .await
            .unwrap();
        slugs.push(p.slug);
    }
    assert_eq!(slugs, ["landing", "landing-1", "landing-2", "landing-3"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_ascii_title_uses_placeholder_slug(pool: PgPool) {
    let input = new_project("Интернет-магазин", ProjectCategory::WebDev);
    let first = ProjectRepo::create(&pool, &input).await.unwrap();
    let second = ProjectRepo::create(&pool, &new_project("Лендинг", ProjectCategory::WebDev))
        .await
        .unwrap();
    assert_eq!(first.slug, "item");
    assert_eq!(second.slug, "item-1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn supplied_slug_collision_is_a_conflict(pool: PgPool) {
    let mut input = new_project("First", ProjectCategory::WebDev);
    input.slug = Some("shared".to_string());
    ProjectRepo::create(&pool, &input).await.unwrap();

    input.title = "Second".to_string();
    let result = ProjectRepo::create(&pool, &input).await;
    assert_matches!(result, Err(StoreError::Core(CoreError::Conflict(_))));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_title_is_rejected_before_insert(pool: PgPool) {
    let result = ProjectRepo::create(&pool, &new_project("   ", ProjectCategory::WebDev)).await;
    assert_matches!(result, Err(StoreError::Core(CoreError::Validation(_))));

    let count = ProjectRepo::count(&pool, &ProjectFilter::default()).await.unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_keeps_slug_unless_cleared(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Old Name", ProjectCategory::WebDev))
        .await
        .unwrap();

    let renamed = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            title: Some("New Name".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.slug, "old-name");
    assert!(renamed.updated_date >= project.updated_date);

    let reslugged = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            slug: Some(String::new()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(reslugged.slug, "new-name");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn regenerating_slug_ignores_own_row(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Stable", ProjectCategory::WebDev))
        .await
        .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            slug: Some(String::new()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.slug, "stable");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_project_returns_none(pool: PgPool) {
    let result = ProjectRepo::update(&pool, 9999, &UpdateProject::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_listing_filters_and_orders(pool: PgPool) {
    let mut first = new_project("Ordered Last", ProjectCategory::WebDev);
    first.sort_order = 5;
    let mut second = new_project("Ordered First", ProjectCategory::WebDev);
    second.sort_order = 1;
    let mut featured = new_project("Campaign", ProjectCategory::Marketing);
    featured.is_featured = true;

    for input in [&first, &second, &featured] {
        ProjectRepo::create(&pool, input).await.unwrap();
    }

    let all = ProjectRepo::list(&pool, &ProjectFilter::default(), 10, 0)
        .await
        .unwrap();
    let titles: Vec<_> = all.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Campaign", "Ordered First", "Ordered Last"]);

    let web = ProjectFilter {
        category: Some(ProjectCategory::WebDev),
        featured: false,
    };
    assert_eq!(ProjectRepo::count(&pool, &web).await.unwrap(), 2);

    let only_featured = ProjectFilter {
        category: None,
        featured: true,
    };
    let rows = ProjectRepo::list(&pool, &only_featured, 10, 0).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Campaign");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_listing_pages_with_limit_and_offset(pool: PgPool) {
    for i in 0..5 {
        let mut input = new_project(&format!("Project {i}"), ProjectCategory::PetProject);
        input.sort_order = i;
        ProjectRepo::create(&pool, &input).await.unwrap();
    }

    let page = ProjectRepo::list(&pool, &ProjectFilter::default(), 2, 2)
        .await
        .unwrap();
    let titles: Vec<_> = page.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Project 2", "Project 3"]);
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_price_round_trips_as_decimal_text(pool: PgPool) {
    let service = ServiceRepo::create(&pool, &new_service("SEO Audit", Some("1500")))
        .await
        .unwrap();
    assert_eq!(service.slug, "seo-audit");
    assert_eq!(service.price.as_deref(), Some("1500.00"));

    let free = ServiceRepo::create(&pool, &new_service("Consultation", None))
        .await
        .unwrap();
    assert_eq!(free.price, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_price_is_rejected(pool: PgPool) {
    let result = ServiceRepo::create(&pool, &new_service("Discount", Some("-5"))).await;
    assert_matches!(result, Err(StoreError::Core(CoreError::Validation(e))) if e.contains("price"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_update_changes_price_and_category(pool: PgPool) {
    let service = ServiceRepo::create(&pool, &new_service("Support", Some("100")))
        .await
        .unwrap();
    let updated = ServiceRepo::update(
        &pool,
        service.id,
        &UpdateService {
            price: Some("250.50".to_string()),
            category: Some(ServiceCategory::Marketing),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.price.as_deref(), Some("250.50"));
    assert_eq!(updated.category, "marketing");
    assert_eq!(updated.slug, "support");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_listing_filters_by_category_and_featured(pool: PgPool) {
    let mut featured = new_service("Full Site", None);
    featured.category = ServiceCategory::FullSite;
    featured.is_featured = true;
    ServiceRepo::create(&pool, &featured).await.unwrap();
    ServiceRepo::create(&pool, &new_service("Backend", None))
        .await
        .unwrap();

    let full_site = ServiceFilter {
        category: Some(ServiceCategory::FullSite),
        featured: false,
    };
    assert_eq!(ServiceRepo::list(&pool, &full_site).await.unwrap().len(), 1);

    let only_featured = ServiceFilter {
        category: None,
        featured: true,
    };
    let rows = ServiceRepo::list(&pool, &only_featured).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Full Site");
}

// ---------------------------------------------------------------------------
// Pages and UI blocks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_upsert_creates_then_replaces(pool: PgPool) {
    let mut input = UpsertPage {
        title: "Privacy".to_string(),
        title_ru: None,
        title_en: None,
        content: "Base content".to_string(),
        content_ru: Some("Политика".to_string()),
        content_en: None,
    };
    let created = PageRepo::upsert(&pool, "privacy", &input).await.unwrap();

    input.content = "Updated content".to_string();
    let replaced = PageRepo::upsert(&pool, "privacy", &input).await.unwrap();
    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.content, "Updated content");

    let found = PageRepo::find_by_slug(&pool, "privacy").await.unwrap().unwrap();
    assert_eq!(found.content_ru.as_deref(), Some("Политика"));
    assert!(PageRepo::find_by_slug(&pool, "terms").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_slug_must_be_normalised(pool: PgPool) {
    let input = UpsertPage {
        title: "Terms".to_string(),
        title_ru: None,
        title_en: None,
        content: "Terms of use".to_string(),
        content_ru: None,
        content_en: None,
    };
    let result = PageRepo::upsert(&pool, "Terms Of Use", &input).await;
    assert_matches!(result, Err(StoreError::Core(CoreError::Validation(e))) if e.contains("slug"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn homepage_blocks_are_seeded(pool: PgPool) {
    let blocks = UiBlockRepo::list(&pool, Some(BlockSection::Homepage))
        .await
        .unwrap();
    assert!(blocks.iter().all(|b| b.section == "HOMEPAGE"));
    assert!(blocks.iter().any(|b| b.key == "hero_h1"));
    assert!(blocks.iter().any(|b| b.key == "cta_sub"));

    let keys: Vec<_> = blocks.iter().map(|b| b.key.clone()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn block_upsert_is_keyed_by_section_and_key(pool: PgPool) {
    let input = UpsertUiBlock {
        description: "Footer copyright".to_string(),
        content: "© Folio".to_string(),
        content_ru: None,
        content_en: Some("© Folio".to_string()),
    };
    let footer = UiBlockRepo::upsert(&pool, BlockSection::Footer, "hero_h1", &input)
        .await
        .unwrap();
    assert_eq!(footer.section, "FOOTER");

    // Same key in another section is a separate block.
    let homepage = UiBlockRepo::find(&pool, BlockSection::Homepage, "hero_h1")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(homepage.id, footer.id);

    let replaced = UiBlockRepo::upsert(
        &pool,
        BlockSection::Footer,
        "hero_h1",
        &UpsertUiBlock {
            content: "Changed".to_string(),
            ..input
        },
    )
    .await
    .unwrap();
    assert_eq!(replaced.id, footer.id);
    assert_eq!(replaced.content, "Changed");
}

// ---------------------------------------------------------------------------
// Concurrent slug claims
// ---------------------------------------------------------------------------

async fn insert_project(pool: &PgPool, title: &str, slug: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO projects (title, description, category, slug) \
         VALUES ($1, $1, 'web-dev', $2) RETURNING id",
    )
    .bind(title)
    .bind(slug)
    .fetch_one(pool)
    .await
}

async fn project_slugs(pool: &PgPool) -> Vec<String> {
    sqlx::query_scalar("SELECT slug FROM projects ORDER BY id")
        .fetch_all(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn slug_claimed_between_check_and_insert_is_retried(pool: PgPool) {
    let attempts = AtomicUsize::new(0);

    let (db, counter) = (&pool, &attempts);
    let write = move |slug: String| async move {
        // Another writer takes the slug right before the first insert.
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            insert_project(db, "Rival", &slug).await?;
        }
        insert_project(db, "Race Car", &slug).await
    };

    let id = write_with_unique_slug(&pool, SlugTable::Projects, "Race Car", None, None, write)
        .await
        .unwrap();

    assert_eq!(attempts.load(Ordering::SeqCst), 2);
    assert_eq!(project_slugs(&pool).await, ["race-car", "race-car-1"]);
    let stored = ProjectRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.slug, "race-car-1");
    assert_eq!(stored.title, "Race Car");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_slug_collision_is_a_conflict(pool: PgPool) {
    let attempts = AtomicUsize::new(0);

    let (db, counter) = (&pool, &attempts);
    let write = move |slug: String| async move {
        counter.fetch_add(1, Ordering::SeqCst);
        insert_project(db, "Rival", &slug).await?;
        insert_project(db, "Race Car", &slug).await
    };

    let result =
        write_with_unique_slug(&pool, SlugTable::Projects, "Race Car", None, None, write).await;

    assert_eq!(attempts.load(Ordering::SeqCst), 2);
    assert_matches!(
        result,
        Err(StoreError::Core(CoreError::Conflict(msg))) if msg.contains("project")
    );
    assert_eq!(project_slugs(&pool).await, ["race-car", "race-car-1"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn parallel_creates_get_distinct_slugs(pool: PgPool) {
    let input = new_project("Twin", ProjectCategory::WebDev);

    let (left, right) = tokio::join!(
        ProjectRepo::create(&pool, &input),
        ProjectRepo::create(&pool, &input)
    );

    let mut slugs = vec![left.unwrap().slug, right.unwrap().slug];
    slugs.sort();
    assert_eq!(slugs, ["twin", "twin-1"]);
}
