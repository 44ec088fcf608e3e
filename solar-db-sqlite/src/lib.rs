mod factory;

pub use factory::SqliteRepositoryFactory;

use std::path::Path;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{
    FromRow,
    sqlite::{SqlitePool, SqlitePoolOptions},
};
use tracing::debug;

use solar_core::{
    LocationProfile, NewLocationProfile, RepositoryError, RoofDirectionCode, RoofDirectionProfile,
    SolarRepository,
};

/// [`SolarRepository`] backed by SQLite.
///
/// Decimals are stored as TEXT and parsed on read, so rates like `0.135`
/// survive the round trip without binary-float drift.
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub async fn new(database_url: &str) -> Result<Self, RepositoryError> {
        // An in-memory database exists per connection; cap the pool at one
        // so migrations, seeds, and queries all see the same data.
        let options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new().max_connections(1)
        } else {
            SqlitePoolOptions::new()
        };
        let pool = options
            .connect(database_url)
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }

    pub async fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), RepositoryError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    /// Executes every `*.sql` file in `dir` in name order.
    ///
    /// Seed files use `INSERT OR IGNORE`, so re-running them against an
    /// already-seeded database is a no-op.
    pub async fn run_seeds(&self, dir: &Path) -> Result<(), RepositoryError> {
        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .map_err(|e| {
                RepositoryError::Database(format!(
                    "cannot read seeds directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "sql"))
            .collect();
        paths.sort();

        for path in paths {
            debug!(seed = %path.display(), "applying seed file");
            let sql = std::fs::read_to_string(&path).map_err(|e| {
                RepositoryError::Database(format!(
                    "cannot read seed file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            sqlx::raw_sql(&sql)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    RepositoryError::Database(format!("seed '{}' failed: {}", path.display(), e))
                })?;
        }

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[derive(FromRow)]
struct LocationRow {
    id: i32,
    name: String,
    sun_hours_per_day: String,
    electricity_rate: String,
    net_metering_rate: String,
}

impl TryFrom<LocationRow> for LocationProfile {
    type Error = RepositoryError;

    fn try_from(row: LocationRow) -> Result<Self, Self::Error> {
        Ok(LocationProfile {
            id: row.id,
            name: row.name,
            sun_hours_per_day: parse_decimal(&row.sun_hours_per_day)?,
            electricity_rate: parse_decimal(&row.electricity_rate)?,
            net_metering_rate: parse_decimal(&row.net_metering_rate)?,
        })
    }
}

#[derive(FromRow)]
struct RoofDirectionRow {
    id: i32,
    code: String,
    name: String,
    efficiency_multiplier: String,
}

impl TryFrom<RoofDirectionRow> for RoofDirectionProfile {
    type Error = RepositoryError;

    fn try_from(row: RoofDirectionRow) -> Result<Self, Self::Error> {
        let code = RoofDirectionCode::parse(&row.code).ok_or_else(|| {
            RepositoryError::Database(format!("Invalid roof direction code: {}", row.code))
        })?;
        Ok(RoofDirectionProfile {
            id: row.id,
            code,
            name: row.name,
            efficiency_multiplier: parse_decimal(&row.efficiency_multiplier)?,
        })
    }
}

fn parse_decimal(s: &str) -> Result<Decimal, RepositoryError> {
    s.parse::<Decimal>()
        .map_err(|e| RepositoryError::Database(format!("Failed to parse decimal '{}': {}", s, e)))
}

#[async_trait]
impl SolarRepository for SqliteRepository {
    async fn get_location(&self, id: i32) -> Result<LocationProfile, RepositoryError> {
        let row: LocationRow = sqlx::query_as(
            "SELECT id, name, sun_hours_per_day, electricity_rate, net_metering_rate
             FROM service_locations WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    async fn get_location_by_name(&self, name: &str) -> Result<LocationProfile, RepositoryError> {
        let row: LocationRow = sqlx::query_as(
            "SELECT id, name, sun_hours_per_day, electricity_rate, net_metering_rate
             FROM service_locations WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    async fn list_locations(&self) -> Result<Vec<LocationProfile>, RepositoryError> {
        let rows: Vec<LocationRow> = sqlx::query_as(
            "SELECT id, name, sun_hours_per_day, electricity_rate, net_metering_rate
             FROM service_locations ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    async fn insert_location(
        &self,
        location: &NewLocationProfile,
    ) -> Result<LocationProfile, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO service_locations
                (name, sun_hours_per_day, electricity_rate, net_metering_rate)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&location.name)
        .bind(location.sun_hours_per_day.to_string())
        .bind(location.electricity_rate.to_string())
        .bind(location.net_metering_rate.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_location(id as i32).await
    }

    /// Deleting a name that is not present is not an error; the loader
    /// calls this unconditionally before re-inserting.
    async fn delete_location(&self, name: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM service_locations WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn get_roof_direction(&self, id: i32) -> Result<RoofDirectionProfile, RepositoryError> {
        let row: RoofDirectionRow = sqlx::query_as(
            "SELECT id, code, name, efficiency_multiplier
             FROM roof_directions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    async fn get_roof_direction_by_code(
        &self,
        code: &str,
    ) -> Result<RoofDirectionProfile, RepositoryError> {
        let row: RoofDirectionRow = sqlx::query_as(
            "SELECT id, code, name, efficiency_multiplier
             FROM roof_directions WHERE code = ?",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    async fn list_roof_directions(&self) -> Result<Vec<RoofDirectionProfile>, RepositoryError> {
        let rows: Vec<RoofDirectionRow> = sqlx::query_as(
            "SELECT id, code, name, efficiency_multiplier
             FROM roof_directions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::path::PathBuf;

    fn seeds_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("seeds")
    }

    async fn setup_test_db() -> SqliteRepository {
        // One connection, or every pooled connection would get its own
        // empty in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        let repo = SqliteRepository::new_with_pool(pool).await;
        repo.run_migrations()
            .await
            .expect("Failed to run migrations");
        repo.run_seeds(&seeds_dir())
            .await
            .expect("Failed to run seeds");
        repo
    }

    #[tokio::test]
    async fn test_list_roof_directions() {
        let repo = setup_test_db().await;

        let directions = repo
            .list_roof_directions()
            .await
            .expect("Should list roof directions");

        assert_eq!(directions.len(), 6);
        assert_eq!(directions[0].code, RoofDirectionCode::South);
        assert_eq!(directions[0].efficiency_multiplier, dec!(1.0));
        assert_eq!(directions[5].code, RoofDirectionCode::North);
        assert_eq!(directions[5].efficiency_multiplier, dec!(0.6));
    }

    #[tokio::test]
    async fn test_get_roof_direction_by_code() {
        let repo = setup_test_db().await;

        let southwest = repo
            .get_roof_direction_by_code("SW")
            .await
            .expect("Should find SW");

        assert_eq!(southwest.name, "Southwest");
        assert_eq!(southwest.efficiency_multiplier, dec!(0.9));
    }

    #[tokio::test]
    async fn test_get_roof_direction_by_code_not_found() {
        let repo = setup_test_db().await;

        let result = repo.get_roof_direction_by_code("NE").await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_roof_direction_by_id() {
        let repo = setup_test_db().await;

        let south = repo.get_roof_direction(1).await.expect("Should find id 1");

        assert_eq!(south.code, RoofDirectionCode::South);
        assert_eq!(south.name, "South");
    }

    #[tokio::test]
    async fn test_seeded_locations_present() {
        let repo = setup_test_db().await;

        let locations = repo.list_locations().await.expect("Should list locations");

        assert_eq!(locations.len(), 6);
        assert!(locations.iter().any(|l| l.name == "Washington, DC"));
        assert!(locations.iter().any(|l| l.name == "Silver Spring, MD"));
    }

    #[tokio::test]
    async fn test_get_location_by_name() {
        let repo = setup_test_db().await;

        let dc = repo
            .get_location_by_name("Washington, DC")
            .await
            .expect("Should find Washington, DC");

        assert_eq!(dc.sun_hours_per_day, dec!(4.7));
        assert_eq!(dc.electricity_rate, dec!(0.13));
        assert_eq!(dc.net_metering_rate, dec!(0.13));
    }

    #[tokio::test]
    async fn test_wholesale_net_metering_rate_differs_from_retail() {
        let repo = setup_test_db().await;

        let bethesda = repo
            .get_location_by_name("Bethesda, MD")
            .await
            .expect("Should find Bethesda, MD");

        assert_eq!(bethesda.electricity_rate, dec!(0.135));
        assert_eq!(bethesda.net_metering_rate, dec!(0.08));
    }

    #[tokio::test]
    async fn test_get_location_by_name_not_found() {
        let repo = setup_test_db().await;

        let result = repo.get_location_by_name("Atlantis").await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_insert_and_get_location() {
        let repo = setup_test_db().await;

        let new_location = NewLocationProfile {
            name: "Arlington, VA".to_string(),
            sun_hours_per_day: dec!(4.7),
            electricity_rate: dec!(0.124),
            net_metering_rate: dec!(0.124),
        };

        let created = repo
            .insert_location(&new_location)
            .await
            .expect("Should insert location");

        assert!(created.id > 0);
        assert_eq!(created.name, "Arlington, VA");
        assert_eq!(created.electricity_rate, dec!(0.124));

        let fetched = repo
            .get_location(created.id)
            .await
            .expect("Should fetch location");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_delete_location() {
        let repo = setup_test_db().await;

        repo.delete_location("Washington, DC")
            .await
            .expect("Should delete location");

        let result = repo.get_location_by_name("Washington, DC").await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_missing_location_is_ok() {
        let repo = setup_test_db().await;

        let result = repo.delete_location("Atlantis").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_seeds_are_idempotent() {
        let repo = setup_test_db().await;

        repo.run_seeds(&seeds_dir())
            .await
            .expect("Second seed run should succeed");

        let locations = repo.list_locations().await.expect("Should list locations");
        assert_eq!(locations.len(), 6);
    }
}
