use nalgebra::Vector2;

use crate::error::SimError;

// ---------------------------------------------------------------------------
// Wind lookup — resolved-forecast interface the integrator drifts against
// ---------------------------------------------------------------------------

/// A single wind observation.
///
/// `direction_deg` is the bearing the wind blows *toward*, degrees clockwise
/// from north; `speed` is in m/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSample {
    pub direction_deg: f64,
    pub speed: f64,
}

impl WindSample {
    pub const CALM: WindSample = WindSample {
        direction_deg: 0.0,
        speed: 0.0,
    };

    /// East/North velocity components, m/s.
    pub fn components(&self) -> Vector2<f64> {
        let rad = self.direction_deg.to_radians();
        Vector2::new(self.speed * rad.sin(), self.speed * rad.cos())
    }
}

/// Source of wind data for a (lat, lon, altitude, time) query.
///
/// Implementations must be in-memory and side-effect free by the time the
/// integrator runs; any network or file fetch happens before the simulation
/// starts. The runner pins `altitude` to the launch altitude on every query
/// rather than re-interpolating per step — a deliberate simplification of the
/// reference model, not an omission.
pub trait WindLookup {
    fn query(
        &self,
        lat_deg: f64,
        lon_deg: f64,
        altitude_m: f64,
        time_s: f64,
    ) -> Result<WindSample, SimError>;
}

/// Calm air everywhere. The reference model's default when no forecast grid
/// is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWind;

impl WindLookup for NoWind {
    fn query(&self, _: f64, _: f64, _: f64, _: f64) -> Result<WindSample, SimError> {
        Ok(WindSample::CALM)
    }
}

/// One wind vector for the whole flight — the resolved single-level forecast
/// the reference model extracts at the launch point.
#[derive(Debug, Clone, Copy)]
pub struct ConstantWind(pub WindSample);

impl ConstantWind {
    pub fn new(direction_deg: f64, speed: f64) -> Self {
        Self(WindSample {
            direction_deg,
            speed,
        })
    }
}

impl WindLookup for ConstantWind {
    fn query(&self, _: f64, _: f64, _: f64, _: f64) -> Result<WindSample, SimError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn components_follow_bearing_convention() {
        // Blowing toward the east
        let east = WindSample {
            direction_deg: 90.0,
            speed: 10.0,
        };
        let c = east.components();
        assert_relative_eq!(c.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(c.y, 0.0, epsilon = 1e-9);

        // Blowing toward the north
        let north = WindSample {
            direction_deg: 0.0,
            speed: 5.0,
        };
        let c = north.components();
        assert_relative_eq!(c.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(c.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn no_wind_is_calm() {
        let w = NoWind.query(32.0, 42.0, 10.0, 0.0).unwrap();
        assert_eq!(w, WindSample::CALM);
    }

    #[test]
    fn constant_wind_ignores_query_point() {
        let w = ConstantWind::new(270.0, 12.0);
        let a = w.query(0.0, 0.0, 0.0, 0.0).unwrap();
        let b = w.query(50.0, -120.0, 30_000.0, 7_200.0).unwrap();
        assert_eq!(a, b);
    }
}
