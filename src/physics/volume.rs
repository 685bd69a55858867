use std::f64::consts::PI;

use crate::balloon::BalloonConfig;
use crate::physics::atmosphere::AtmoSample;

// ---------------------------------------------------------------------------
// Envelope volume — fixed gas quantity, ideal-gas expansion, burst predicate
// ---------------------------------------------------------------------------

pub const R_GAS: f64 = 8.3144621; // universal gas constant, J/(mol·K)

const FILL_TEMPERATURE: f64 = 288.15;   // K, sea-level standard
const FILL_PRESSURE: f64 = 101_325.0;   // Pa

/// The lift gas sealed into the envelope at launch.
///
/// The mole count is fixed at fill time and held constant until burst (no
/// leakage); only temperature and pressure change the envelope volume.
#[derive(Debug, Clone, Copy)]
pub struct Envelope {
    moles: f64,
    gas_mass: f64,   // kg
    max_volume: f64, // m^3
}

impl Envelope {
    /// Fill the envelope: `percent_lift_gas` percent of `max_volume`,
    /// evaluated at sea-level standard conditions.
    pub fn fill(config: &BalloonConfig) -> Self {
        let fill_volume = config.max_volume * config.percent_lift_gas / 100.0;
        let moles = FILL_PRESSURE * fill_volume / (R_GAS * FILL_TEMPERATURE);
        Envelope {
            moles,
            gas_mass: moles * config.lift_gas.molar_mass(),
            max_volume: config.max_volume,
        }
    }

    /// Mass of the sealed lift gas, kg.
    pub fn gas_mass(&self) -> f64 {
        self.gas_mass
    }

    /// Unconstrained ideal-gas volume at ambient conditions: V = nRT/P.
    pub fn free_volume(&self, atmo: &AtmoSample) -> f64 {
        self.moles * R_GAS * atmo.temperature / atmo.pressure
    }

    /// Envelope volume at ambient conditions, clamped to the burst volume
    /// (the fabric cannot stretch further).
    pub fn volume(&self, atmo: &AtmoSample) -> f64 {
        self.free_volume(atmo).min(self.max_volume)
    }

    /// Burst predicate: the gas wants more room than the envelope has.
    /// Edge-triggering (fire once) is the flight state machine's job; this is
    /// a pure test of the current sample.
    pub fn bursts_at(&self, atmo: &AtmoSample) -> bool {
        self.free_volume(atmo) >= self.max_volume
    }
}

/// Cross-sectional area of a sphere of the given volume, m^2.
pub fn spherical_cross_section(volume: f64) -> f64 {
    let radius = (3.0 * volume / (4.0 * PI)).cbrt();
    PI * radius * radius
}
