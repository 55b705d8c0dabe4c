use crate::emissions::{EmissionsError, JET_FUEL_DENSITY};
use crate::quantity::{Dimension, Quantity, GALLON, HOUR, MILE, MILE_PER_HOUR, POUND};

/// Static characteristics of one aircraft. Built once from literal
/// constants and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    pub name: String,
    /// Always a volume; mass-specified fuel loads are converted on construction.
    pub fuel_capacity: Quantity,
    pub combat_range: Quantity,
    pub cruise_speed: Quantity,
    pub mission_length: Quantity,
}

impl Aircraft {
    /// The fuel load may be given as a volume or as a mass; a mass is
    /// converted through the JP-8 density. Anything else is a dimension
    /// mismatch.
    pub fn new(
        name: &str,
        fuel: Quantity,
        combat_range: Quantity,
        cruise_speed: Quantity,
        mission_length: Quantity,
    ) -> Result<Self, EmissionsError> {
        let fuel_capacity = if fuel.dimension() == Dimension::MASS {
            fuel / JET_FUEL_DENSITY
        } else {
            fuel
        };
        let fuel_capacity = fuel_capacity.expect_dimension(Dimension::VOLUME)?;
        Ok(Self {
            name: name.to_string(),
            fuel_capacity,
            combat_range,
            cruise_speed,
            mission_length,
        })
    }
}

/// The five aircraft of the report, in reporting order.
pub fn fleet() -> Result<Vec<Aircraft>, EmissionsError> {
    Ok(vec![
        Aircraft::new(
            "B-52",
            Quantity::new(47_975.0, GALLON),
            Quantity::new(8_800.0, MILE),
            Quantity::new(509.0, MILE_PER_HOUR),
            Quantity::new(34.0, HOUR),
        )?,
        Aircraft::new(
            "B-1",
            Quantity::new(265_274.0, POUND),
            Quantity::new(3_444.0, MILE),
            Quantity::new(647.0, MILE_PER_HOUR),
            Quantity::new(12.0, HOUR),
        )?,
        Aircraft::new(
            "B-2",
            Quantity::new(167_000.0, POUND),
            Quantity::new(6_900.0, MILE),
            Quantity::new(560.0, MILE_PER_HOUR),
            Quantity::new(31.0, HOUR),
        )?,
        Aircraft::new(
            "F-15",
            Quantity::new(13_455.0, POUND),
            Quantity::new(1_221.0, MILE),
            Quantity::new(570.0, MILE_PER_HOUR),
            Quantity::new(2.0, HOUR),
        )?,
        Aircraft::new(
            "F-35",
            Quantity::new(18_250.0, POUND),
            Quantity::new(770.0, MILE),
            Quantity::new(647.0, MILE_PER_HOUR),
            Quantity::new(2.0, HOUR),
        )?,
    ])
}
