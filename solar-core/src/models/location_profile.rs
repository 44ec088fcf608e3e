use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the service-area reference table: average daily sun hours and
/// the utility's retail and net-metering rates for that area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationProfile {
    pub id: i32,
    pub name: String,
    pub sun_hours_per_day: Decimal,
    /// Retail electricity price, currency per kWh.
    pub electricity_rate: Decimal,
    /// Credit rate for excess generation fed back to the grid. Equal to the
    /// retail rate under 1:1 net metering, lower where the utility credits
    /// at wholesale.
    pub net_metering_rate: Decimal,
}

/// For inserting new locations (no id yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLocationProfile {
    pub name: String,
    pub sun_hours_per_day: Decimal,
    pub electricity_rate: Decimal,
    pub net_metering_rate: Decimal,
}
