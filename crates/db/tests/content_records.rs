//! Integration tests for content record inserts and listings.

use portfolio_db::models::academic_record::CreateAcademicRecord;
use portfolio_db::models::activity::CreateActivity;
use portfolio_db::models::social_item::CreateSocialItem;
use portfolio_db::repositories::{AcademicRecordRepo, ActivityRepo, SocialItemRepo};
use sqlx::SqlitePool;

fn academic(link: &str) -> CreateAcademicRecord {
    CreateAcademicRecord {
        time_period: "2015 - 2019".to_string(),
        degree_link: link.to_string(),
        degree_title: "BSc Computer Science".to_string(),
        degree_description: "Systems focus".to_string(),
        image_source: "https://img.example/university.png".to_string(),
        image_alt: "University crest".to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn academic_listing_nests_degree_and_image(pool: SqlitePool) {
    AcademicRecordRepo::insert(&pool, &academic("https://degrees.example/1"))
        .await
        .unwrap();

    let listing = AcademicRecordRepo::list_all(&pool).await.unwrap();
    assert_eq!(listing.len(), 1);

    let record = &listing[0];
    assert_eq!(record.time_period, "2015 - 2019");
    assert_eq!(record.degree.link, "https://degrees.example/1");
    assert_eq!(record.degree.title, "BSc Computer Science");
    assert_eq!(record.image.source, "https://img.example/university.png");
    assert_eq!(record.image.alt, "University crest");
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_degree_link_is_a_constraint_error(pool: SqlitePool) {
    AcademicRecordRepo::insert(&pool, &academic("https://degrees.example/1"))
        .await
        .unwrap();

    let err = AcademicRecordRepo::insert(&pool, &academic("https://degrees.example/1"))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn listings_preserve_insertion_order(pool: SqlitePool) {
    for title in ["Hiking", "Reading", "Cooking"] {
        ActivityRepo::insert(
            &pool,
            &CreateActivity {
                title: title.to_string(),
                description: format!("{title} regularly"),
            },
        )
        .await
        .unwrap();
    }

    let listing = ActivityRepo::list_all(&pool).await.unwrap();
    let titles: Vec<&str> = listing.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Hiking", "Reading", "Cooking"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn social_item_listing_carries_link_and_image(pool: SqlitePool) {
    SocialItemRepo::insert(
        &pool,
        &CreateSocialItem {
            title: "GitHub".to_string(),
            link_page: "https://github.com/example".to_string(),
            image_source: "https://img.example/github.png".to_string(),
            image_alt: "GitHub logo".to_string(),
        },
    )
    .await
    .unwrap();

    let listing = SocialItemRepo::list_all(&pool).await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].link_page, "https://github.com/example");
    assert_eq!(listing[0].image.alt, "GitHub logo");
}
