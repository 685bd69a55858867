pub mod event;
pub mod integrator;
pub mod phase;
pub mod runner;
pub mod state;

pub use integrator::rk4_step;
pub use runner::{simulate, FlightLog};
