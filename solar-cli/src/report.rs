use std::fmt::Write as _;

use chrono::Local;
use rust_decimal::Decimal;

use solar_core::calculations::common::{round_half_up, round_to_whole};
use solar_core::calculations::{BREAK_EVEN_NEVER, EstimateResult, PROJECTION_YEARS};

/// Formats a currency amount to whole units with thousands separators,
/// e.g. `$27,119` or `-$1,500`.
pub fn format_currency(value: Decimal) -> String {
    let whole = round_to_whole(value);
    let negative = whole < Decimal::ZERO;
    let digits = whole.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a system size to one decimal place, e.g. `12.9 kW`.
pub fn format_kw(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded} kW")
}

fn break_even_label(year: u32) -> String {
    if year == BREAK_EVEN_NEVER {
        "not expected within the system's lifetime".to_string()
    } else if year as usize > PROJECTION_YEARS {
        format!("around year {year} (beyond the {PROJECTION_YEARS}-year projection)")
    } else {
        format!("year {year}")
    }
}

/// Renders an estimate as a plain-text report.
///
/// `years_shown` limits the projection table; the summary always covers the
/// full horizon.
pub fn render(
    location_name: &str,
    result: &EstimateResult,
    years_shown: usize,
) -> String {
    let mut out = String::new();
    let years_shown = years_shown.clamp(1, PROJECTION_YEARS);

    let _ = writeln!(out, "Solar savings estimate — {location_name}");
    let _ = writeln!(out, "Generated {}", Local::now().format("%Y-%m-%d %H:%M"));
    let _ = writeln!(out);

    let _ = writeln!(out, "System");
    let _ = writeln!(
        out,
        "  Size:             {} ({} panels, {} sqft of roof)",
        format_kw(result.system_size_kw),
        result.panel_count,
        result.roof_space_needed_sqft,
    );
    if result.roof_space_exceeded {
        let _ = writeln!(
            out,
            "  Note: the roof is too small for a full-offset system; sized down to fit."
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Costs");
    let _ = writeln!(
        out,
        "  Upfront cost:     {}",
        format_currency(result.upfront_cost)
    );
    if result.battery_cost > Decimal::ZERO {
        let _ = writeln!(
            out,
            "  Battery:          {}",
            format_currency(result.battery_cost)
        );
    }
    let _ = writeln!(
        out,
        "  Federal credit:   -{}",
        format_currency(result.tax_credit)
    );
    let _ = writeln!(
        out,
        "  Net cost:         {}",
        format_currency(result.final_cost)
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Projection (first {years_shown} of {PROJECTION_YEARS} years)"
    );
    let _ = writeln!(out, "  Year     Savings   Cumulative");
    for (index, (annual, cumulative)) in result
        .annual_savings
        .iter()
        .zip(&result.cumulative_savings)
        .take(years_shown)
        .enumerate()
    {
        let _ = writeln!(
            out,
            "  {:>4}  {:>10}  {:>11}",
            index + 1,
            format_currency(*annual),
            format_currency(*cumulative),
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Summary");
    let _ = writeln!(
        out,
        "  {PROJECTION_YEARS}-year net savings: {}",
        format_currency(result.net_savings)
    );
    if result.total_maintenance_cost > Decimal::ZERO {
        let _ = writeln!(
            out,
            "  Maintenance:      {} ({}/year)",
            format_currency(result.total_maintenance_cost),
            format_currency(result.annual_maintenance_cost),
        );
    }
    let _ = writeln!(
        out,
        "  Break-even:       {}",
        break_even_label(result.break_even_year)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Environmental impact");
    let _ = writeln!(
        out,
        "  CO2 avoided:      {} metric tons over {PROJECTION_YEARS} years",
        round_half_up(result.co2_reduction_metric_tons)
    );
    let _ = writeln!(
        out,
        "  Equivalent to planting {} trees",
        result.trees_equivalent
    );

    out
}
