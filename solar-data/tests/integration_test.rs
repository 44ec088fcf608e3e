//! Integration tests for service-location loading using the SQLite backend.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use solar_core::SolarRepository;
use solar_data::{LocationLoader, LocationLoaderError};
use solar_db_sqlite::SqliteRepository;
use sqlx::sqlite::SqlitePoolOptions;

const TEST_CSV: &str = include_str!("../test-data/service_locations.csv");

/// Sets up a test database with migrations run but no seed data, as a user
/// running --migrate without --seeds would have.
async fn setup_test_db() -> SqliteRepository {
    // One connection, or every pooled connection would get its own empty
    // in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    let repo = SqliteRepository::new_with_pool(pool).await;
    repo.run_migrations()
        .await
        .expect("Failed to run migrations");

    repo
}

#[tokio::test]
async fn test_load_all_locations() {
    let repo = setup_test_db().await;

    let records = LocationLoader::parse(TEST_CSV.as_bytes()).expect("Failed to parse CSV");
    let inserted = LocationLoader::load(&repo, &records)
        .await
        .expect("Failed to load locations");

    assert_eq!(inserted, 6);

    let locations = repo.list_locations().await.expect("Should list locations");
    assert_eq!(locations.len(), 6);
}

#[tokio::test]
async fn test_load_and_retrieve_by_name() {
    let repo = setup_test_db().await;

    let records = LocationLoader::parse(TEST_CSV.as_bytes()).expect("Failed to parse CSV");
    LocationLoader::load(&repo, &records)
        .await
        .expect("Failed to load locations");

    let dc = repo
        .get_location_by_name("Washington, DC")
        .await
        .expect("Should find Washington, DC");

    assert_eq!(dc.sun_hours_per_day, dec!(4.7));
    assert_eq!(dc.electricity_rate, dec!(0.13));
    assert_eq!(dc.net_metering_rate, dec!(0.13));

    let bethesda = repo
        .get_location_by_name("Bethesda, MD")
        .await
        .expect("Should find Bethesda, MD");

    assert_eq!(bethesda.net_metering_rate, dec!(0.08));
}

#[tokio::test]
async fn test_load_twice_is_idempotent() {
    let repo = setup_test_db().await;

    let records = LocationLoader::parse(TEST_CSV.as_bytes()).expect("Failed to parse CSV");
    LocationLoader::load(&repo, &records)
        .await
        .expect("First load should succeed");
    let inserted = LocationLoader::load(&repo, &records)
        .await
        .expect("Second load should succeed");

    assert_eq!(inserted, 6);

    let locations = repo.list_locations().await.expect("Should list locations");
    assert_eq!(locations.len(), 6);
}

#[tokio::test]
async fn test_reload_replaces_changed_rates() {
    let repo = setup_test_db().await;

    let records = LocationLoader::parse(TEST_CSV.as_bytes()).expect("Failed to parse CSV");
    LocationLoader::load(&repo, &records)
        .await
        .expect("Initial load should succeed");

    let updated_csv = "name,sun_hours_per_day,electricity_rate,net_metering_rate\n\
                       \"Washington, DC\",4.7,0.14,0.14\n";
    let updated = LocationLoader::parse(updated_csv.as_bytes()).expect("Failed to parse CSV");
    LocationLoader::load(&repo, &updated)
        .await
        .expect("Reload should succeed");

    let dc = repo
        .get_location_by_name("Washington, DC")
        .await
        .expect("Should find Washington, DC");
    assert_eq!(dc.electricity_rate, dec!(0.14));

    // The other locations are untouched.
    let locations = repo.list_locations().await.expect("Should list locations");
    assert_eq!(locations.len(), 6);
}

#[tokio::test]
async fn test_load_rejects_invalid_record_before_writing() {
    let repo = setup_test_db().await;

    let bad_csv = "name,sun_hours_per_day,electricity_rate,net_metering_rate\n\
                   \"Nowhere, XX\",0,0.13,0.13\n";
    let records = LocationLoader::parse(bad_csv.as_bytes()).expect("Failed to parse CSV");

    let result = LocationLoader::load(&repo, &records).await;

    assert!(matches!(
        result,
        Err(LocationLoaderError::InvalidRecord { .. })
    ));

    let locations = repo.list_locations().await.expect("Should list locations");
    assert!(locations.is_empty());
}
