pub mod balloon;
pub mod error;
pub mod geo;
pub mod io;
pub mod physics;
pub mod sim;
pub mod wind;

// Convenience re-exports for the common entry points
pub use balloon::{BalloonConfig, LaunchSite, LiftGas};
pub use error::SimError;
pub use physics::atmosphere::{
    AtmoLevel, AtmoSample, AtmosphereProvider, StandardAtmosphere, TableAtmosphere,
};
pub use sim::phase::FlightPhase;
pub use sim::runner::{simulate, FlightLog};
pub use sim::state::{Frame, SimConfig};
pub use wind::{ConstantWind, NoWind, WindLookup, WindSample};
