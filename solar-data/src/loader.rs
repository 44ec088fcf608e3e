use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use solar_core::{NewLocationProfile, RepositoryError, SolarRepository};
use thiserror::Error;

/// Errors that can occur when loading service-location data.
#[derive(Debug, Error)]
pub enum LocationLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid record for '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<csv::Error> for LocationLoaderError {
    fn from(err: csv::Error) -> Self {
        LocationLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the service-locations CSV file.
///
/// The CSV columns are:
/// - `name`: The location's display name (e.g. "Washington, DC")
/// - `sun_hours_per_day`: Average daily sun hours
/// - `electricity_rate`: Retail electricity price, currency per kWh
/// - `net_metering_rate`: Credit rate for excess generation, currency per kWh
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LocationRecord {
    pub name: String,
    pub sun_hours_per_day: Decimal,
    pub electricity_rate: Decimal,
    pub net_metering_rate: Decimal,
}

impl LocationRecord {
    /// Rejects records the estimator could not use: sun hours and the
    /// retail rate divide other quantities, so both must be positive.
    fn validate(&self) -> Result<(), LocationLoaderError> {
        if self.name.trim().is_empty() {
            return Err(LocationLoaderError::InvalidRecord {
                name: self.name.clone(),
                reason: "name is empty".to_string(),
            });
        }
        if self.sun_hours_per_day <= Decimal::ZERO {
            return Err(LocationLoaderError::InvalidRecord {
                name: self.name.clone(),
                reason: format!("sun hours must be positive, got {}", self.sun_hours_per_day),
            });
        }
        if self.electricity_rate <= Decimal::ZERO {
            return Err(LocationLoaderError::InvalidRecord {
                name: self.name.clone(),
                reason: format!(
                    "electricity rate must be positive, got {}",
                    self.electricity_rate
                ),
            });
        }
        if self.net_metering_rate < Decimal::ZERO {
            return Err(LocationLoaderError::InvalidRecord {
                name: self.name.clone(),
                reason: format!(
                    "net metering rate must be non-negative, got {}",
                    self.net_metering_rate
                ),
            });
        }
        Ok(())
    }
}

/// Loader for service-location data from CSV files.
///
/// The loader reads CSV data and writes it through the `SolarRepository`
/// trait, so it works with any database backend.
pub struct LocationLoader;

impl LocationLoader {
    /// Parse location records from a CSV reader.
    ///
    /// Returns a vector of parsed records. The reader can be any type that
    /// implements `Read`, such as a file or a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<LocationRecord>, LocationLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: LocationRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Load location records into the database.
    ///
    /// Each record is validated, any existing row with the same name is
    /// deleted, and the record is inserted. Running the same load twice
    /// therefore produces the same result.
    ///
    /// Returns the number of locations inserted.
    pub async fn load<R: SolarRepository>(
        repo: &R,
        records: &[LocationRecord],
    ) -> Result<usize, LocationLoaderError> {
        let mut inserted = 0;

        for record in records {
            record.validate()?;

            repo.delete_location(&record.name).await?;
            repo.insert_location(&NewLocationProfile {
                name: record.name.clone(),
                sun_hours_per_day: record.sun_hours_per_day,
                electricity_rate: record.electricity_rate,
                net_metering_rate: record.net_metering_rate,
            })
            .await?;
            inserted += 1;
        }

        Ok(inserted)
    }
}
