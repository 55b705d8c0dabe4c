use std::error::Error;

use sorties::quantity::{
    Quantity, GALLON, HOUR, METRIC_TON, METRIC_TON_PER_HOUR, MILE, MILE_PER_HOUR, POUND, YEAR,
};
use sorties::*;

fn abs_difference<T: std::ops::Sub<Output = T> + PartialOrd>(x: T, y: T) -> T {
    if x < y {
        y - x
    } else {
        x - y
    }
}

/// Verifies the B-52 figures against the hand computation
/// (47975 / 17600) * 509 * 9.75 kg/h over a 34 h mission.
#[test]
fn acceptance_b52() -> Result<(), Box<dyn Error>> {
    let accepted_error = 0.001; // 0.1%

    let b52 = Aircraft::new(
        "B-52",
        Quantity::new(47_975.0, GALLON),
        Quantity::new(8_800.0, MILE),
        Quantity::new(509.0, MILE_PER_HOUR),
        Quantity::new(34.0, HOUR),
    )?;
    let emissions = compute_emissions(&b52)?;

    let expected = 13.53; // metric tons per hour
    let per_hour = emissions.co2_per_hour.get(METRIC_TON_PER_HOUR)?;
    assert!(abs_difference(per_hour, expected) / expected < accepted_error);

    let expected = 459.94; // metric tons per mission
    let per_mission = emissions.co2_per_mission.get(METRIC_TON)?;
    assert!(abs_difference(per_mission, expected) / expected < accepted_error);

    let expected = 105.68; // years of average car driving
    let years = emissions.co2_ratio_to_annual_driving.get(YEAR)?;
    assert!(abs_difference(years, expected) / expected < accepted_error);

    Ok(())
}

/// Verifies the F-35 figures, whose fuel load is specified as a mass
/// (18250 lb at 6.75 lb/gal is about 2703.7 gal).
#[test]
fn acceptance_f35() -> Result<(), Box<dyn Error>> {
    let accepted_error = 0.001;

    let f35 = Aircraft::new(
        "F-35",
        Quantity::new(18_250.0, POUND),
        Quantity::new(770.0, MILE),
        Quantity::new(647.0, MILE_PER_HOUR),
        Quantity::new(2.0, HOUR),
    )?;

    let expected = 2_703.7;
    let gallons = f35.fuel_capacity.get(GALLON)?;
    assert!(abs_difference(gallons, expected) / expected < accepted_error);

    let emissions = compute_emissions(&f35)?;

    let expected = 11.08; // metric tons per hour
    let per_hour = emissions.co2_per_hour.get(METRIC_TON_PER_HOUR)?;
    assert!(abs_difference(per_hour, expected) / expected < accepted_error);

    let expected = 22.15; // metric tons per mission
    let per_mission = emissions.co2_per_mission.get(METRIC_TON)?;
    assert!(abs_difference(per_mission, expected) / expected < accepted_error);

    let expected = 5.09; // years
    let years = emissions.co2_ratio_to_annual_driving.get(YEAR)?;
    assert!(abs_difference(years, expected) / expected < accepted_error);

    Ok(())
}

/// The full report: five comparison lines, all above one year of driving,
/// and two charts keyed by aircraft name in input order.
#[test]
fn acceptance_full_fleet() -> Result<(), Box<dyn Error>> {
    let fleet = fleet()?;
    let table = build_results_table(&fleet)?;
    assert_eq!(table.len(), 5);

    let lines = comparison_lines(&table)?;
    assert_eq!(lines.len(), 5);
    for (line, name) in lines.iter().zip(["B-52", "B-1", "B-2", "F-15", "F-35"]) {
        assert!(line.starts_with(&format!("{name}: ")));
        assert!(line.ends_with("years"));
    }

    for chart in [per_hour_chart(&table)?, per_mission_chart(&table)?] {
        for name in ["B-52", "B-1", "B-2", "F-15", "F-35"] {
            assert!(chart.contains(name));
        }
    }

    Ok(())
}
