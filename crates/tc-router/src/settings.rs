//! Routing parameters.

/// Wait-and-ride parameters, already converted to the units the engine
/// computes in: minutes and metres per minute.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoutingSettings {
    /// Fixed wait paid once per boarding, in minutes.
    pub bus_wait_time: f64,
    /// Bus velocity in metres per minute.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Build settings from the input-document units: whole minutes of wait
    /// and a velocity in km/h.
    pub fn from_input(bus_wait_time: f64, bus_velocity_kmh: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity: bus_velocity_kmh * 1_000.0 / 60.0,
        }
    }
}
