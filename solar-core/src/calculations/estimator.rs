//! Solar savings estimation over a 25-year horizon.
//!
//! This module sizes a photovoltaic system from a household's monthly
//! electricity bill and site profile, prices it after the federal tax
//! credit, and projects year-by-year savings with panel degradation and
//! electricity price escalation.
//!
//! # Calculation structure
//!
//! The estimate proceeds through the following steps:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Annual consumption from monthly bill and retail rate |
//! | 2    | Target system size to fully offset consumption plus losses |
//! | 3    | Panel count, roof footprint, and whole-panel re-fit when the roof is too small |
//! | 4    | Upfront cost, battery cost, 30% federal tax credit, final cost |
//! | 5    | 25-year production series with 0.5%/year degradation |
//! | 6    | Yearly savings at escalating retail and net-metering prices |
//! | 7    | Break-even year, extrapolated past the horizon when warranted |
//! | 8    | Lifetime CO₂ displacement and tree-equivalent |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use solar_core::calculations::{EstimateInput, EstimatorConfig, SavingsEstimator};
//! use solar_core::{LocationProfile, RoofDirectionCode, RoofDirectionProfile};
//!
//! let location = LocationProfile {
//!     id: 1,
//!     name: "Washington, DC".to_string(),
//!     sun_hours_per_day: dec!(4.7),
//!     electricity_rate: dec!(0.13),
//!     net_metering_rate: dec!(0.13),
//! };
//!
//! let south = RoofDirectionProfile {
//!     id: 1,
//!     code: RoofDirectionCode::South,
//!     name: "South".to_string(),
//!     efficiency_multiplier: dec!(1.0),
//! };
//!
//! let input = EstimateInput {
//!     monthly_bill: dec!(200),
//!     location,
//!     roof_area_sqft: dec!(1500),
//!     roof_direction: south,
//!     include_battery: false,
//!     include_maintenance: false,
//!     annual_maintenance_cost: dec!(0),
//! };
//!
//! let estimator = SavingsEstimator::new(EstimatorConfig::default());
//! let result = estimator.estimate(&input).unwrap();
//!
//! assert_eq!(result.panel_count, 37);
//! assert!(!result.roof_space_exceeded);
//! assert_eq!(result.annual_savings.len(), 25);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_to_whole;
use crate::models::{LocationProfile, RoofDirectionProfile};

/// Length of the savings projection in years. The `annual_savings` and
/// `cumulative_savings` series always have exactly this many entries.
pub const PROJECTION_YEARS: usize = 25;

/// Break-even sentinel for systems that never pay for themselves.
pub const BREAK_EVEN_NEVER: u32 = 99;

const DAYS_PER_YEAR: u32 = 365;
const WATTS_PER_KW: u32 = 1000;
const MONTHS_PER_YEAR: u32 = 12;

/// Errors that can occur during savings estimation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimatorError {
    /// The panel footprint must be positive.
    #[error("panel size must be positive, got {0} sqft")]
    InvalidPanelSize(Decimal),

    /// The panel nameplate wattage must be positive.
    #[error("panel wattage must be positive, got {0} W")]
    InvalidPanelWattage(Decimal),

    /// The annual degradation rate must be in [0, 1).
    #[error("annual degradation rate must be in [0, 1), got {0}")]
    InvalidDegradationRate(Decimal),

    /// The annual price escalation must be in [0, 1].
    #[error("annual price escalation must be in [0, 1], got {0}")]
    InvalidPriceEscalation(Decimal),

    /// System losses must be in [0, 1].
    #[error("system losses must be in [0, 1], got {0}")]
    InvalidSystemLosses(Decimal),

    /// The installed cost per kW must be positive.
    #[error("cost per kW must be positive, got {0}")]
    InvalidCostPerKw(Decimal),

    /// The battery cost must be non-negative.
    #[error("battery cost must be non-negative, got {0}")]
    InvalidBatteryCost(Decimal),

    /// The tax credit rate must be in [0, 1].
    #[error("tax credit rate must be in [0, 1], got {0}")]
    InvalidTaxCreditRate(Decimal),

    /// The battery savings factor must be positive.
    #[error("battery savings factor must be positive, got {0}")]
    InvalidBatterySavingsFactor(Decimal),

    /// An emissions constant must be positive.
    #[error("emissions factor must be positive, got {0}")]
    InvalidEmissionsFactor(Decimal),

    /// The location's retail electricity rate must be positive (it divides
    /// the monthly bill).
    #[error("electricity rate must be positive, got {0}")]
    InvalidElectricityRate(Decimal),

    /// The location's net-metering rate must be non-negative.
    #[error("net metering rate must be non-negative, got {0}")]
    InvalidNetMeteringRate(Decimal),

    /// The location's sun hours must be positive (they divide consumption).
    #[error("sun hours per day must be positive, got {0}")]
    InvalidSunHours(Decimal),

    /// The roof-direction efficiency multiplier must be in (0, 1].
    #[error("efficiency multiplier must be in (0, 1], got {0}")]
    InvalidEfficiencyMultiplier(Decimal),

    /// The roof area must be positive.
    #[error("roof area must be positive, got {0} sqft")]
    InvalidRoofArea(Decimal),

    /// The monthly bill must be non-negative.
    #[error("monthly bill must be non-negative, got {0}")]
    NegativeMonthlyBill(Decimal),

    /// The annual maintenance cost must be non-negative when included.
    #[error("annual maintenance cost must be non-negative, got {0}")]
    NegativeMaintenanceCost(Decimal),
}

/// Fixed modelling constants for the estimate.
///
/// These are industry-average figures, not user inputs; [`Default`] carries
/// the standard values. They are grouped in one place so tests can pin them
/// and alternative assumptions stay possible without touching the math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Footprint of one residential panel, square feet.
    pub panel_size_sqft: Decimal,

    /// Nameplate wattage of one panel.
    pub panel_wattage: Decimal,

    /// Output lost per year of panel age, as a fraction of first-year output.
    pub annual_degradation_rate: Decimal,

    /// Yearly escalation applied to both retail and net-metering prices.
    pub annual_price_escalation: Decimal,

    /// Aggregate inverter/wiring/soiling losses added to the sizing target.
    pub system_losses: Decimal,

    /// Installed cost per kW before incentives.
    pub cost_per_kw: Decimal,

    /// Flat cost of a home battery system.
    pub battery_cost: Decimal,

    /// Federal investment tax credit rate applied to system plus battery.
    pub tax_credit_rate: Decimal,

    /// Multiplier on yearly savings from battery self-consumption.
    pub battery_savings_factor: Decimal,

    /// Grid-electricity emissions, pounds of CO₂ per kWh.
    pub co2_lbs_per_kwh: Decimal,

    /// Pounds per metric ton.
    pub lbs_per_metric_ton: Decimal,

    /// CO₂ absorbed by one tree in one year, metric tons.
    pub tree_absorption_tons_per_year: Decimal,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            panel_size_sqft: Decimal::new(175, 1),             // 17.5
            panel_wattage: Decimal::from(350),
            annual_degradation_rate: Decimal::new(5, 3),       // 0.005
            annual_price_escalation: Decimal::new(3, 2),       // 0.03
            system_losses: Decimal::new(20, 2),                // 0.20
            cost_per_kw: Decimal::from(3000),
            battery_cost: Decimal::from(10000),
            tax_credit_rate: Decimal::new(30, 2),              // 0.30
            battery_savings_factor: Decimal::new(115, 2),      // 1.15
            co2_lbs_per_kwh: Decimal::new(85, 2),              // 0.85
            lbs_per_metric_ton: Decimal::new(220462, 2),       // 2204.62
            tree_absorption_tons_per_year: Decimal::new(113, 4), // 0.0113
        }
    }
}

impl EstimatorConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError`] if any value is outside its valid range.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.panel_size_sqft <= Decimal::ZERO {
            return Err(EstimatorError::InvalidPanelSize(self.panel_size_sqft));
        }
        if self.panel_wattage <= Decimal::ZERO {
            return Err(EstimatorError::InvalidPanelWattage(self.panel_wattage));
        }
        if self.annual_degradation_rate < Decimal::ZERO
            || self.annual_degradation_rate >= Decimal::ONE
        {
            return Err(EstimatorError::InvalidDegradationRate(
                self.annual_degradation_rate,
            ));
        }
        if self.annual_price_escalation < Decimal::ZERO
            || self.annual_price_escalation > Decimal::ONE
        {
            return Err(EstimatorError::InvalidPriceEscalation(
                self.annual_price_escalation,
            ));
        }
        if self.system_losses < Decimal::ZERO || self.system_losses > Decimal::ONE {
            return Err(EstimatorError::InvalidSystemLosses(self.system_losses));
        }
        if self.cost_per_kw <= Decimal::ZERO {
            return Err(EstimatorError::InvalidCostPerKw(self.cost_per_kw));
        }
        if self.battery_cost < Decimal::ZERO {
            return Err(EstimatorError::InvalidBatteryCost(self.battery_cost));
        }
        if self.tax_credit_rate < Decimal::ZERO || self.tax_credit_rate > Decimal::ONE {
            return Err(EstimatorError::InvalidTaxCreditRate(self.tax_credit_rate));
        }
        if self.battery_savings_factor <= Decimal::ZERO {
            return Err(EstimatorError::InvalidBatterySavingsFactor(
                self.battery_savings_factor,
            ));
        }
        if self.co2_lbs_per_kwh <= Decimal::ZERO {
            return Err(EstimatorError::InvalidEmissionsFactor(self.co2_lbs_per_kwh));
        }
        if self.lbs_per_metric_ton <= Decimal::ZERO {
            return Err(EstimatorError::InvalidEmissionsFactor(
                self.lbs_per_metric_ton,
            ));
        }
        if self.tree_absorption_tons_per_year <= Decimal::ZERO {
            return Err(EstimatorError::InvalidEmissionsFactor(
                self.tree_absorption_tons_per_year,
            ));
        }
        Ok(())
    }
}

/// Input values for one savings estimate.
///
/// Constructed fresh per calculation by the caller; never stored. The
/// profiles are resolved reference data, typically fetched through a
/// [`SolarRepository`](crate::SolarRepository).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Current monthly electricity bill.
    pub monthly_bill: Decimal,

    /// Service-area profile supplying sun hours and utility rates.
    pub location: LocationProfile,

    /// Usable roof area in square feet.
    pub roof_area_sqft: Decimal,

    /// Roof orientation and its production multiplier.
    pub roof_direction: RoofDirectionProfile,

    /// Whether a home battery is part of the quote.
    pub include_battery: bool,

    /// Whether yearly maintenance costs are accounted for.
    pub include_maintenance: bool,

    /// Annual maintenance cost; ignored unless `include_maintenance`.
    pub annual_maintenance_cost: Decimal,
}

/// Result of one savings estimate.
///
/// All monetary and physical figures are exact decimals; front ends round
/// for display (system size to one decimal, currency to whole units).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Installed system size in kW. When `roof_space_exceeded` this is the
    /// largest whole-panel array that fits the roof.
    pub system_size_kw: Decimal,

    /// Number of panels in the array.
    pub panel_count: u32,

    /// Roof footprint of the array, `panel_count * panel_size_sqft`.
    pub roof_space_needed_sqft: Decimal,

    /// True when the consumption-based target did not fit the roof and the
    /// system was sized down. A warning, not an error.
    pub roof_space_exceeded: bool,

    /// System cost before incentives.
    pub upfront_cost: Decimal,

    /// Battery cost (zero when no battery was requested).
    pub battery_cost: Decimal,

    /// Federal tax credit on system plus battery.
    pub tax_credit: Decimal,

    /// Net cost after the credit: `upfront_cost + battery_cost - tax_credit`.
    pub final_cost: Decimal,

    /// Net savings per projection year, maintenance already subtracted.
    pub annual_savings: Vec<Decimal>,

    /// Running sum of `annual_savings`.
    pub cumulative_savings: Vec<Decimal>,

    /// Annual maintenance cost applied (zero when not included).
    pub annual_maintenance_cost: Decimal,

    /// Maintenance over the full projection.
    pub total_maintenance_cost: Decimal,

    /// Total net savings over the projection.
    pub net_savings: Decimal,

    /// First year (1-based) whose cumulative savings reach `final_cost`.
    /// Values above [`PROJECTION_YEARS`] are extrapolated;
    /// [`BREAK_EVEN_NEVER`] means the system effectively never pays off.
    pub break_even_year: u32,

    /// Lifetime CO₂ displacement in metric tons.
    pub co2_reduction_metric_tons: Decimal,

    /// Lifetime CO₂ displacement expressed as trees planted.
    pub trees_equivalent: i64,
}

/// System sizing after the roof-fit check.
struct RoofFit {
    system_size_kw: Decimal,
    panel_count: u32,
    roof_space_needed_sqft: Decimal,
    roof_space_exceeded: bool,
}

/// Cost figures derived from the fitted size.
struct CostBreakdown {
    upfront_cost: Decimal,
    battery_cost: Decimal,
    tax_credit: Decimal,
    final_cost: Decimal,
}

/// Savings series plus break-even.
struct Projection {
    annual_savings: Vec<Decimal>,
    cumulative_savings: Vec<Decimal>,
    net_savings: Decimal,
    break_even_year: u32,
}

/// Calculator for solar savings estimates.
///
/// Holds the modelling constants; [`estimate`](Self::estimate) is a pure
/// function of its input — no I/O, no state between calls, deterministic.
#[derive(Debug, Clone)]
pub struct SavingsEstimator {
    config: EstimatorConfig,
}

impl SavingsEstimator {
    /// Creates a new estimator with the given constants.
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// The constants this estimator runs with.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Computes the complete savings estimate for one household.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError`] if the configuration or any input value is
    /// outside its valid range. A roof that is too small for the
    /// consumption-based target is not an error: the system is sized down
    /// and `roof_space_exceeded` is set on the result.
    pub fn estimate(
        &self,
        input: &EstimateInput,
    ) -> Result<EstimateResult, EstimatorError> {
        self.config.validate()?;
        Self::validate_input(input)?;

        let annual_consumption_kwh = self.annual_consumption_kwh(
            input.monthly_bill,
            input.location.electricity_rate,
        );

        let target_kw = self.unconstrained_system_size_kw(
            annual_consumption_kwh,
            input.location.sun_hours_per_day,
            input.roof_direction.efficiency_multiplier,
        );

        let fit = self.fit_to_roof(target_kw, input.roof_area_sqft);
        if fit.roof_space_exceeded {
            warn!(
                roof_area_sqft = %input.roof_area_sqft,
                target_kw = %target_kw,
                fitted_kw = %fit.system_size_kw,
                "roof too small for consumption-based target, system sized down"
            );
        }

        let costs = self.cost_breakdown(fit.system_size_kw, input.include_battery);

        let production = self.production_series(
            fit.system_size_kw,
            input.location.sun_hours_per_day,
            input.roof_direction.efficiency_multiplier,
        );

        let projection = self.project_savings(
            &production,
            annual_consumption_kwh,
            input,
            costs.final_cost,
        );

        let maintenance = Self::maintenance_cost(input);
        let total_production_kwh: Decimal = production.iter().copied().sum();
        let (co2_reduction_metric_tons, trees_equivalent) =
            self.environmental_impact(total_production_kwh);

        Ok(EstimateResult {
            system_size_kw: fit.system_size_kw,
            panel_count: fit.panel_count,
            roof_space_needed_sqft: fit.roof_space_needed_sqft,
            roof_space_exceeded: fit.roof_space_exceeded,
            upfront_cost: costs.upfront_cost,
            battery_cost: costs.battery_cost,
            tax_credit: costs.tax_credit,
            final_cost: costs.final_cost,
            annual_savings: projection.annual_savings,
            cumulative_savings: projection.cumulative_savings,
            annual_maintenance_cost: maintenance,
            total_maintenance_cost: maintenance * Decimal::from(PROJECTION_YEARS as u32),
            net_savings: projection.net_savings,
            break_even_year: projection.break_even_year,
            co2_reduction_metric_tons,
            trees_equivalent,
        })
    }

    /// Validates the per-call input values.
    fn validate_input(input: &EstimateInput) -> Result<(), EstimatorError> {
        if input.monthly_bill < Decimal::ZERO {
            return Err(EstimatorError::NegativeMonthlyBill(input.monthly_bill));
        }
        if input.location.electricity_rate <= Decimal::ZERO {
            return Err(EstimatorError::InvalidElectricityRate(
                input.location.electricity_rate,
            ));
        }
        if input.location.net_metering_rate < Decimal::ZERO {
            return Err(EstimatorError::InvalidNetMeteringRate(
                input.location.net_metering_rate,
            ));
        }
        if input.location.sun_hours_per_day <= Decimal::ZERO {
            return Err(EstimatorError::InvalidSunHours(
                input.location.sun_hours_per_day,
            ));
        }
        let efficiency = input.roof_direction.efficiency_multiplier;
        if efficiency <= Decimal::ZERO || efficiency > Decimal::ONE {
            return Err(EstimatorError::InvalidEfficiencyMultiplier(efficiency));
        }
        if input.roof_area_sqft <= Decimal::ZERO {
            return Err(EstimatorError::InvalidRoofArea(input.roof_area_sqft));
        }
        if input.include_maintenance && input.annual_maintenance_cost < Decimal::ZERO {
            return Err(EstimatorError::NegativeMaintenanceCost(
                input.annual_maintenance_cost,
            ));
        }
        Ok(())
    }

    /// Maintenance cost applied per projection year.
    fn maintenance_cost(input: &EstimateInput) -> Decimal {
        if input.include_maintenance {
            input.annual_maintenance_cost
        } else {
            Decimal::ZERO
        }
    }

    /// Annual consumption in kWh implied by the bill and retail rate.
    fn annual_consumption_kwh(
        &self,
        monthly_bill: Decimal,
        electricity_rate: Decimal,
    ) -> Decimal {
        monthly_bill / electricity_rate * Decimal::from(MONTHS_PER_YEAR)
    }

    /// System size that fully offsets annual consumption including losses.
    fn unconstrained_system_size_kw(
        &self,
        annual_consumption_kwh: Decimal,
        sun_hours_per_day: Decimal,
        efficiency_multiplier: Decimal,
    ) -> Decimal {
        annual_consumption_kwh * (Decimal::ONE + self.config.system_losses)
            / (sun_hours_per_day * Decimal::from(DAYS_PER_YEAR) * efficiency_multiplier)
    }

    /// Panel count and footprint for the target size, re-fitted to the
    /// largest whole-panel array when the roof is too small.
    ///
    /// Fitting is idempotent: a size that already fits passes through
    /// unchanged, and the fitted footprint never exceeds the roof.
    fn fit_to_roof(
        &self,
        target_kw: Decimal,
        roof_area_sqft: Decimal,
    ) -> RoofFit {
        let panels = (target_kw * Decimal::from(WATTS_PER_KW) / self.config.panel_wattage).ceil();
        let footprint = panels * self.config.panel_size_sqft;

        if footprint <= roof_area_sqft {
            return RoofFit {
                system_size_kw: target_kw,
                panel_count: panels.to_u32().unwrap_or(u32::MAX),
                roof_space_needed_sqft: footprint,
                roof_space_exceeded: false,
            };
        }

        let fitted_panels = (roof_area_sqft / self.config.panel_size_sqft).floor();
        RoofFit {
            system_size_kw: fitted_panels * self.config.panel_wattage
                / Decimal::from(WATTS_PER_KW),
            panel_count: fitted_panels.to_u32().unwrap_or(u32::MAX),
            roof_space_needed_sqft: fitted_panels * self.config.panel_size_sqft,
            roof_space_exceeded: true,
        }
    }

    /// Upfront cost, battery cost, tax credit, and final cost.
    fn cost_breakdown(
        &self,
        system_size_kw: Decimal,
        include_battery: bool,
    ) -> CostBreakdown {
        let upfront_cost = system_size_kw * self.config.cost_per_kw;
        let battery_cost = if include_battery {
            self.config.battery_cost
        } else {
            Decimal::ZERO
        };
        let tax_credit = (upfront_cost + battery_cost) * self.config.tax_credit_rate;
        let final_cost = upfront_cost + battery_cost - tax_credit;

        CostBreakdown {
            upfront_cost,
            battery_cost,
            tax_credit,
            final_cost,
        }
    }

    /// Yearly production in kWh over the projection, first year at full
    /// output and each following year degraded by the annual rate.
    fn production_series(
        &self,
        system_size_kw: Decimal,
        sun_hours_per_day: Decimal,
        efficiency_multiplier: Decimal,
    ) -> Vec<Decimal> {
        let first_year = system_size_kw
            * sun_hours_per_day
            * Decimal::from(DAYS_PER_YEAR)
            * efficiency_multiplier;
        let retention = Decimal::ONE - self.config.annual_degradation_rate;

        let mut series = Vec::with_capacity(PROJECTION_YEARS);
        let mut production = first_year;
        for _ in 0..PROJECTION_YEARS {
            series.push(production);
            production *= retention;
        }
        series
    }

    /// Savings series, running total, and break-even year.
    ///
    /// Production at or below consumption offsets usage at the retail rate;
    /// excess is credited at the net-metering rate. Both prices escalate
    /// yearly. The first year whose running total reaches `final_cost` is
    /// the break-even year and is never overwritten.
    fn project_savings(
        &self,
        production: &[Decimal],
        annual_consumption_kwh: Decimal,
        input: &EstimateInput,
        final_cost: Decimal,
    ) -> Projection {
        let maintenance = Self::maintenance_cost(input);
        let escalation = Decimal::ONE + self.config.annual_price_escalation;

        let mut annual_savings = Vec::with_capacity(PROJECTION_YEARS);
        let mut cumulative_savings = Vec::with_capacity(PROJECTION_YEARS);
        let mut retail_price = input.location.electricity_rate;
        let mut net_metering_price = input.location.net_metering_rate;
        let mut total = Decimal::ZERO;
        let mut break_even_year = None;

        for (year_index, produced) in production.iter().copied().enumerate() {
            let mut savings = if produced <= annual_consumption_kwh {
                produced * retail_price
            } else {
                annual_consumption_kwh * retail_price
                    + (produced - annual_consumption_kwh) * net_metering_price
            };

            if input.include_battery {
                savings *= self.config.battery_savings_factor;
            }

            let net = savings - maintenance;
            total += net;
            annual_savings.push(net);
            cumulative_savings.push(total);

            if break_even_year.is_none() && total >= final_cost {
                break_even_year = Some(year_index as u32 + 1);
            }

            retail_price *= escalation;
            net_metering_price *= escalation;
        }

        let break_even_year = break_even_year.unwrap_or_else(|| {
            self.extrapolate_break_even(
                final_cost,
                total,
                annual_savings.last().copied().unwrap_or(Decimal::ZERO),
            )
        });

        Projection {
            annual_savings,
            cumulative_savings,
            net_savings: total,
            break_even_year,
        }
    }

    /// Break-even beyond the projection horizon.
    ///
    /// When the horizon total reached at least half the final cost and the
    /// final year still saved money, the remainder is paid off at the final
    /// year's rate; otherwise the system effectively never breaks even.
    fn extrapolate_break_even(
        &self,
        final_cost: Decimal,
        total_savings: Decimal,
        final_year_savings: Decimal,
    ) -> u32 {
        let half_cost = final_cost / Decimal::TWO;
        if total_savings < half_cost || final_year_savings <= Decimal::ZERO {
            return BREAK_EVEN_NEVER;
        }

        let remaining = final_cost - total_savings;
        let additional_years = (remaining / final_year_savings)
            .ceil()
            .to_u32()
            .unwrap_or(BREAK_EVEN_NEVER);
        PROJECTION_YEARS as u32 + additional_years
    }

    /// Lifetime CO₂ displacement and tree-equivalent from total production.
    fn environmental_impact(
        &self,
        total_production_kwh: Decimal,
    ) -> (Decimal, i64) {
        let co2_tons =
            total_production_kwh * self.config.co2_lbs_per_kwh / self.config.lbs_per_metric_ton;
        let trees_equivalent = round_to_whole(
            co2_tons
                / (self.config.tree_absorption_tons_per_year
                    * Decimal::from(PROJECTION_YEARS as u32)),
        )
        .to_i64()
        .unwrap_or(0);

        (co2_tons, trees_equivalent)
    }
}
