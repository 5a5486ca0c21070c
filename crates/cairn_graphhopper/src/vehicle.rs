use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The vehicle for which the route should be calculated.
#[derive(Debug, Deserialize, Serialize, JsonSchema, Copy, Clone, Hash, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Car,

    /// Motor bike avoiding motorways.
    Motorcycle,

    /// Small truck like a Mercedes Sprinter or Ford Transit.
    SmallTruck,

    /// Bus, allowed on ways marked for public transport.
    Bus,

    Truck,

    /// Pedestrian or walking.
    Foot,

    /// Walking with preference for scenic hiking tours.
    Hike,

    /// Trekking bike avoiding hills.
    Bike,

    /// Mountain bike.
    Mtb,

    /// Bike preferring roads.
    RacingBike,
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VehicleType::Car => "car",
                VehicleType::Motorcycle => "motorcycle",
                VehicleType::SmallTruck => "small_truck",
                VehicleType::Bus => "bus",
                VehicleType::Truck => "truck",
                VehicleType::Foot => "foot",
                VehicleType::Hike => "hike",
                VehicleType::Bike => "bike",
                VehicleType::Mtb => "mtb",
                VehicleType::RacingBike => "racing bike",
            }
        )
    }
}
