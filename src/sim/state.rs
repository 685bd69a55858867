use nalgebra::Vector3;

use crate::sim::phase::FlightPhase;
use crate::wind::WindSample;

// ---------------------------------------------------------------------------
// Simulation state and output frames
// ---------------------------------------------------------------------------

/// The pair the RK4 integrator advances: altitude and vertical velocity.
/// Horizontal motion is pure wind drift and is advanced separately.
#[derive(Debug, Clone, Copy)]
pub struct VerticalState {
    pub altitude: f64, // m
    pub vz: f64,       // m/s, up positive
}

impl VerticalState {
    /// Advance by a derivative scaled by dt (used inside RK4).
    pub fn apply(&self, d: &Deriv, dt: f64) -> VerticalState {
        VerticalState {
            altitude: self.altitude + d.daltitude * dt,
            vz: self.vz + d.dvz * dt,
        }
    }
}

/// Vertical state derivative: (dh/dt, dvz/dt) = (velocity, acceleration).
#[derive(Debug, Clone, Copy)]
pub struct Deriv {
    pub daltitude: f64,
    pub dvz: f64,
}

/// One time-stamped record of the trajectory. Frames are appended to the
/// flight log and never mutated afterwards; the ordered sequence is the sole
/// output artifact of a run.
#[derive(Debug, Clone)]
pub struct Frame {
    pub time: f64,              // s since launch
    pub latitude: f64,          // deg
    pub longitude: f64,         // deg
    pub altitude: f64,          // m
    pub velocity: Vector3<f64>, // m/s [East, North, Up]
    pub wind: WindSample,
    pub volume: f64,            // m^3, 0 once the gas has vented
    pub phase: FlightPhase,
}

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,       // integration timestep, s
    pub max_time: f64, // hard stop, s (bounds the step count)
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            // The parachute regime is stiff near sea level: quadratic drag
            // linearizes to ~5 s^-1 for a light payload, and RK4 loses
            // stability once rate * dt approaches 2.8. 0.1 s holds a wide
            // margin through the whole descent.
            dt: 0.1,
            max_time: 43_200.0, // 12 h ceiling
        }
    }
}

impl SimConfig {
    pub fn validate(self) -> Result<Self, crate::error::SimError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(crate::error::SimError::Config("dt must be > 0".into()));
        }
        if !(self.max_time.is_finite() && self.max_time >= self.dt) {
            return Err(crate::error::SimError::Config(
                "max_time must be >= dt".into(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn apply_scales_derivative() {
        let s = VerticalState {
            altitude: 100.0,
            vz: 5.0,
        };
        let d = Deriv {
            daltitude: 5.0,
            dvz: -1.0,
        };
        let next = s.apply(&d, 2.0);
        assert_relative_eq!(next.altitude, 110.0);
        assert_relative_eq!(next.vz, 3.0);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_dt_rejected() {
        let cfg = SimConfig {
            dt: 0.0,
            max_time: 100.0,
        };
        assert!(cfg.validate().is_err());
    }
}
