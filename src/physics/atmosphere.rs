use crate::error::SimError;

// ---------------------------------------------------------------------------
// Atmospheric sampling — standard profile plus forecast-grid override
// ---------------------------------------------------------------------------

pub const R_AIR: f64 = 287.05; // specific gas constant for dry air, J/(kg·K)
pub const G0: f64 = 9.80665;   // standard gravity, m/s^2

const T0: f64 = 288.15;        // sea-level temperature, K
const P0: f64 = 101_325.0;     // sea-level pressure, Pa
const LAPSE: f64 = -0.0065;    // tropospheric lapse rate, K/m

/// Atmospheric properties at a given altitude.
#[derive(Debug, Clone, Copy)]
pub struct AtmoSample {
    pub temperature: f64, // K
    pub pressure: f64,    // Pa
    pub density: f64,     // kg/m^3
}

/// Source of temperature/pressure/density for the integrator.
///
/// Either the built-in standard profile or externally supplied forecast
/// levels; both answer through this one contract, and both must be pure
/// in-memory lookups (no I/O inside the integration loop).
pub trait AtmosphereProvider {
    fn sample(&self, altitude_m: f64) -> Result<AtmoSample, SimError>;
}

// ---------------------------------------------------------------------------
// Standard atmosphere
// ---------------------------------------------------------------------------

/// Layered standard-atmosphere profile.
///
/// Troposphere (0-11 km): T = T0 + L*h, P = P0*(T/T0)^(-g/(L*R)).
/// Above 11 km the profile is extended in ISA style: isothermal tropopause to
/// 20 km, +1.0 K/km to 32 km, +2.8 K/km to 47 km, isothermal beyond.
/// Negative altitudes clamp to sea level.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAtmosphere;

impl AtmosphereProvider for StandardAtmosphere {
    fn sample(&self, altitude_m: f64) -> Result<AtmoSample, SimError> {
        Ok(standard(altitude_m))
    }
}

/// Standard-atmosphere sample at a geometric altitude.
pub fn standard(altitude_m: f64) -> AtmoSample {
    let h = altitude_m.max(0.0);

    let (temperature, pressure) = if h < 11_000.0 {
        gradient_layer(h, 0.0, T0, LAPSE, P0)
    } else if h < 20_000.0 {
        isothermal_layer(h, 11_000.0, 216.65, 22_632.1)
    } else if h < 32_000.0 {
        gradient_layer(h, 20_000.0, 216.65, 0.001, 5_474.89)
    } else if h < 47_000.0 {
        gradient_layer(h, 32_000.0, 228.65, 0.0028, 868.019)
    } else {
        isothermal_layer(h, 47_000.0, 270.65, 110.906)
    };

    AtmoSample {
        temperature,
        pressure,
        density: pressure / (R_AIR * temperature),
    }
}

/// Gradient layer: T = T_base + lapse * (h - h_base)
fn gradient_layer(h: f64, h_base: f64, t_base: f64, lapse: f64, p_base: f64) -> (f64, f64) {
    let t = t_base + lapse * (h - h_base);
    let p = p_base * (t / t_base).powf(-G0 / (lapse * R_AIR));
    (t, p)
}

/// Isothermal layer: T = const, pressure decays exponentially
fn isothermal_layer(h: f64, h_base: f64, t: f64, p_base: f64) -> (f64, f64) {
    let p = p_base * ((-G0 / (R_AIR * t)) * (h - h_base)).exp();
    (t, p)
}

// ---------------------------------------------------------------------------
// Forecast-level override
// ---------------------------------------------------------------------------

/// One forecast level: altitude with its observed temperature and pressure.
#[derive(Debug, Clone, Copy)]
pub struct AtmoLevel {
    pub altitude_m: f64,
    pub temperature: f64, // K
    pub pressure: f64,    // Pa
}

/// Atmosphere backed by externally supplied forecast levels, linearly
/// interpolated in altitude. Queries outside the covered range are fatal for
/// the run; the caller re-fetches data, the core does not.
#[derive(Debug, Clone)]
pub struct TableAtmosphere {
    levels: Vec<AtmoLevel>,
}

impl TableAtmosphere {
    /// Build from forecast levels. Requires at least two levels with strictly
    /// increasing altitudes.
    pub fn new(mut levels: Vec<AtmoLevel>) -> Result<Self, SimError> {
        if levels.len() < 2 {
            return Err(SimError::Config(
                "forecast atmosphere needs at least two levels".into(),
            ));
        }
        levels.sort_by(|a, b| a.altitude_m.total_cmp(&b.altitude_m));
        if levels
            .windows(2)
            .any(|w| w[1].altitude_m <= w[0].altitude_m)
        {
            return Err(SimError::Config(
                "forecast atmosphere levels must have distinct altitudes".into(),
            ));
        }
        Ok(Self { levels })
    }
}

impl AtmosphereProvider for TableAtmosphere {
    fn sample(&self, altitude_m: f64) -> Result<AtmoSample, SimError> {
        // Constructor guarantees at least two levels
        let lo = &self.levels[0];
        let hi = &self.levels[self.levels.len() - 1];
        if altitude_m < lo.altitude_m || altitude_m > hi.altitude_m {
            return Err(SimError::DataUnavailable(format!(
                "altitude {altitude_m:.0} m outside forecast range {:.0}-{:.0} m",
                lo.altitude_m, hi.altitude_m
            )));
        }

        let idx = self
            .levels
            .windows(2)
            .position(|w| altitude_m <= w[1].altitude_m)
            .unwrap_or(self.levels.len() - 2);
        let (a, b) = (&self.levels[idx], &self.levels[idx + 1]);
        let frac = (altitude_m - a.altitude_m) / (b.altitude_m - a.altitude_m);

        let temperature = a.temperature + frac * (b.temperature - a.temperature);
        let pressure = a.pressure + frac * (b.pressure - a.pressure);
        Ok(AtmoSample {
            temperature,
            pressure,
            density: pressure / (R_AIR * temperature),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sea_level_standard_values() {
        let a = standard(0.0);
        assert_relative_eq!(a.temperature, 288.15, epsilon = 0.01);
        assert_relative_eq!(a.pressure, 101_325.0, epsilon = 1.0);
        assert_relative_eq!(a.density, 1.225, epsilon = 0.001);
    }

    #[test]
    fn tropopause_11km() {
        let a = standard(11_000.0);
        assert_relative_eq!(a.temperature, 216.65, epsilon = 0.5);
        assert_relative_eq!(a.pressure, 22_632.0, epsilon = 100.0);
    }

    #[test]
    fn density_monotonically_decreases() {
        let rho_0 = standard(0.0).density;
        let rho_10k = standard(10_000.0).density;
        let rho_35k = standard(35_000.0).density;
        assert!(rho_0 > rho_10k);
        assert!(rho_10k > rho_35k);
        assert!(rho_35k > 0.0);
    }

    #[test]
    fn negative_altitude_clamps_to_sea_level() {
        let a = standard(-500.0);
        assert_relative_eq!(a.temperature, 288.15, epsilon = 0.01);
    }

    #[test]
    fn profile_is_continuous_across_layer_boundaries() {
        for h in [11_000.0, 20_000.0, 32_000.0, 47_000.0] {
            let below = standard(h - 0.5);
            let above = standard(h + 0.5);
            assert_relative_eq!(below.pressure, above.pressure, max_relative = 1e-3);
            assert!((below.temperature - above.temperature).abs() < 0.1);
        }
    }

    #[test]
    fn table_interpolates_between_levels() {
        let table = TableAtmosphere::new(vec![
            AtmoLevel {
                altitude_m: 0.0,
                temperature: 288.15,
                pressure: 101_325.0,
            },
            AtmoLevel {
                altitude_m: 10_000.0,
                temperature: 223.15,
                pressure: 26_436.0,
            },
        ])
        .unwrap();

        let mid = table.sample(5_000.0).unwrap();
        assert_relative_eq!(mid.temperature, 255.65, epsilon = 1e-9);
        assert_relative_eq!(mid.pressure, 63_880.5, epsilon = 1e-6);
    }

    #[test]
    fn table_rejects_out_of_range_query() {
        let table = TableAtmosphere::new(vec![
            AtmoLevel {
                altitude_m: 0.0,
                temperature: 288.15,
                pressure: 101_325.0,
            },
            AtmoLevel {
                altitude_m: 10_000.0,
                temperature: 223.15,
                pressure: 26_436.0,
            },
        ])
        .unwrap();

        assert!(matches!(
            table.sample(20_000.0),
            Err(SimError::DataUnavailable(_))
        ));
    }

    #[test]
    fn table_needs_two_levels() {
        let one = TableAtmosphere::new(vec![AtmoLevel {
            altitude_m: 0.0,
            temperature: 288.15,
            pressure: 101_325.0,
        }]);
        assert!(matches!(one, Err(SimError::Config(_))));
    }
}
