use thiserror::Error;

use crate::aircraft::Aircraft;
use crate::quantity::{
    Dimension, Quantity, QuantityError, GALLON_PER_YEAR, KILOGRAM_PER_GALLON, POUND_PER_GALLON,
};

/// CO2 produced per gallon of JP-8 jet fuel.
pub const CO2_PER_GALLON_JET_FUEL: Quantity = Quantity::new(9.75, KILOGRAM_PER_GALLON);

/// Density of JP-8 jet fuel, used to convert mass-specified fuel loads to volume.
pub const JET_FUEL_DENSITY: Quantity = Quantity::new(6.75, POUND_PER_GALLON);

/// CO2 produced per gallon of gasoline.
pub const CO2_PER_GALLON_GASOLINE: Quantity = Quantity::new(8.9, KILOGRAM_PER_GALLON);

/// Average American fuel consumption per year per registered vehicle.
pub const ANNUAL_GALLONS_PER_CAR: Quantity = Quantity::new(489.0, GALLON_PER_YEAR);

/// Yearly CO2 emissions of an average car (metric tons per year).
pub fn annual_co2_per_car() -> Quantity {
    CO2_PER_GALLON_GASOLINE * ANNUAL_GALLONS_PER_CAR
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmissionsError {
    #[error(transparent)]
    Unit(#[from] QuantityError),
    #[error("division by zero: {0} must be non-zero")]
    DivisionByZero(&'static str),
    #[error("duplicate aircraft name: {0}")]
    DuplicateName(String),
}

/// Returns the CO2 emitted per hour of flight.
///
/// `fuel_capacity / (2 * combat_range)` estimates fuel burned per unit
/// distance (a combat range is a round trip, so the on-board fuel covers
/// twice the range); multiplying by the cruise speed gives fuel per hour,
/// and the jet-fuel CO2 factor converts burned volume to emitted mass.
pub fn co2_per_hour(
    fuel_capacity: Quantity,
    combat_range: Quantity,
    cruise_speed: Quantity,
) -> Result<Quantity, EmissionsError> {
    let fuel_capacity = fuel_capacity.expect_dimension(Dimension::VOLUME)?;
    let combat_range = combat_range.expect_dimension(Dimension::LENGTH)?;
    let cruise_speed = cruise_speed.expect_dimension(Dimension::VELOCITY)?;
    if combat_range.is_zero() {
        return Err(EmissionsError::DivisionByZero("combat range"));
    }
    if cruise_speed.is_zero() {
        return Err(EmissionsError::DivisionByZero("cruise speed"));
    }
    Ok(fuel_capacity / (2.0 * combat_range) * cruise_speed * CO2_PER_GALLON_JET_FUEL)
}

/// CO2 emissions of one aircraft, derived solely from its [`Aircraft`]
/// record and the fuel constants above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emissions {
    /// CO2 emitted per hour of flight (mass/time).
    pub co2_per_hour: Quantity,
    /// CO2 emitted over one full mission (mass).
    pub co2_per_mission: Quantity,
    /// Mission CO2 divided by the yearly car rate. Dividing mass by
    /// mass/time leaves a time: the driving duration an average car needs
    /// to emit as much, reported in years.
    pub co2_ratio_to_annual_driving: Quantity,
}

pub fn compute_emissions(aircraft: &Aircraft) -> Result<Emissions, EmissionsError> {
    let per_hour = co2_per_hour(
        aircraft.fuel_capacity,
        aircraft.combat_range,
        aircraft.cruise_speed,
    )?;
    let mission_length = aircraft.mission_length.expect_dimension(Dimension::TIME)?;
    let per_mission = per_hour * mission_length;

    let annual = annual_co2_per_car();
    if annual.is_zero() {
        return Err(EmissionsError::DivisionByZero("annual car CO2"));
    }
    Ok(Emissions {
        co2_per_hour: per_hour,
        co2_per_mission: per_mission,
        co2_ratio_to_annual_driving: per_mission / annual,
    })
}

/// Results per aircraft, preserving input order for deterministic
/// printing and charting.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsTable(Vec<(String, Emissions)>);

impl ResultsTable {
    pub fn get(&self, name: &str) -> Option<&Emissions> {
        self.0
            .iter()
            .find_map(|(n, emissions)| (n == name).then_some(emissions))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Emissions)> {
        self.0
            .iter()
            .map(|(name, emissions)| (name.as_str(), emissions))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Computes [`Emissions`] for every aircraft, in order, as a single fold.
/// Two aircraft sharing a name is an error rather than a silent overwrite.
pub fn build_results_table(fleet: &[Aircraft]) -> Result<ResultsTable, EmissionsError> {
    fleet
        .iter()
        .try_fold(Vec::with_capacity(fleet.len()), |mut rows, aircraft| {
            if rows.iter().any(|(name, _)| *name == aircraft.name) {
                return Err(EmissionsError::DuplicateName(aircraft.name.clone()));
            }
            let emissions = compute_emissions(aircraft)?;
            rows.push((aircraft.name.clone(), emissions));
            Ok(rows)
        })
        .map(ResultsTable)
}

/// The time unit used to report a driving-equivalent ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonUnit {
    Years,
    Months,
    Weeks,
}

/// Selects the reporting unit for a ratio expressed in years. Strictly
/// greater at both boundaries: exactly 1 falls to months, exactly 1/12
/// falls to weeks.
pub fn comparison_unit(ratio_in_years: f64) -> ComparisonUnit {
    if ratio_in_years > 1.0 {
        ComparisonUnit::Years
    } else if ratio_in_years > 1.0 / 12.0 {
        ComparisonUnit::Months
    } else {
        ComparisonUnit::Weeks
    }
}
