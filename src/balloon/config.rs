use crate::error::SimError;

// ---------------------------------------------------------------------------
// Launch configuration — validated once, immutable afterwards
// ---------------------------------------------------------------------------

/// Lift gas filling the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftGas {
    Helium,
    Hydrogen,
}

impl LiftGas {
    /// Molar mass, kg/mol.
    pub fn molar_mass(&self) -> f64 {
        match self {
            LiftGas::Helium => 4.0026e-3,
            LiftGas::Hydrogen => 2.01588e-3,
        }
    }
}

/// Balloon and recovery-train parameters for one flight.
///
/// Construct with struct syntax, then call [`BalloonConfig::validate`] before
/// handing it to the simulation; the runner re-checks and refuses to start on
/// an out-of-range field.
#[derive(Debug, Clone)]
pub struct BalloonConfig {
    pub gross_mass: f64,                   // kg, payload + envelope, excludes lift gas
    pub lift_gas: LiftGas,
    pub max_volume: f64,                   // m^3, envelope volume at burst
    pub percent_lift_gas: f64,             // % of max_volume filled at sea level
    pub buoyant_force_scalar: f64,         // dimensionless tuning factor
    pub drag_coefficient_ascent: f64,      // envelope Cd
    pub parachute_drag_coefficient: f64,
    pub parachute_area: f64,               // m^2
    pub ascent_rate: Option<f64>,          // m/s, initial vertical velocity override
    pub descent_rate_parachute: Option<f64>, // m/s, velocity imposed at burst
}

impl BalloonConfig {
    /// Range-check every field. Returns the config unchanged on success so a
    /// validated value can be built in one expression.
    pub fn validate(self) -> Result<Self, SimError> {
        fn check(ok: bool, msg: &str) -> Result<(), SimError> {
            if ok {
                Ok(())
            } else {
                Err(SimError::Config(msg.into()))
            }
        }

        check(self.gross_mass > 0.0, "gross_mass must be > 0")?;
        check(self.max_volume > 0.0, "max_volume must be > 0")?;
        check(
            (0.0..=100.0).contains(&self.percent_lift_gas),
            "percent_lift_gas must be within [0, 100]",
        )?;
        check(
            self.buoyant_force_scalar >= 0.0,
            "buoyant_force_scalar must be >= 0",
        )?;
        check(
            self.drag_coefficient_ascent >= 0.0,
            "drag_coefficient_ascent must be >= 0",
        )?;
        check(
            self.parachute_drag_coefficient >= 0.0,
            "parachute_drag_coefficient must be >= 0",
        )?;
        check(self.parachute_area > 0.0, "parachute_area must be > 0")?;
        if let Some(rate) = self.ascent_rate {
            check(rate.is_finite(), "ascent_rate must be finite")?;
        }
        if let Some(rate) = self.descent_rate_parachute {
            check(
                rate.is_finite() && rate > 0.0,
                "descent_rate_parachute must be > 0",
            )?;
        }

        for (name, value) in [
            ("gross_mass", self.gross_mass),
            ("max_volume", self.max_volume),
            ("percent_lift_gas", self.percent_lift_gas),
            ("buoyant_force_scalar", self.buoyant_force_scalar),
            ("drag_coefficient_ascent", self.drag_coefficient_ascent),
            (
                "parachute_drag_coefficient",
                self.parachute_drag_coefficient,
            ),
            ("parachute_area", self.parachute_area),
        ] {
            check(value.is_finite(), &format!("{name} must be finite"))?;
        }

        Ok(self)
    }
}

/// Where and when the balloon is released.
#[derive(Debug, Clone, Copy)]
pub struct LaunchSite {
    pub latitude: f64,  // deg
    pub longitude: f64, // deg
    pub altitude: f64,  // m above sea level
    pub time: f64,      // s, epoch defined by the wind provider
}

impl LaunchSite {
    pub fn validate(self) -> Result<Self, SimError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SimError::Config("launch latitude outside [-90, 90]".into()));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SimError::Config(
                "launch longitude outside [-180, 180]".into(),
            ));
        }
        if !self.altitude.is_finite() || self.altitude < 0.0 {
            return Err(SimError::Config(
                "launch altitude must be finite and >= 0".into(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_config() -> BalloonConfig {
        BalloonConfig {
            gross_mass: 14.0,
            lift_gas: LiftGas::Helium,
            max_volume: 6.0,
            percent_lift_gas: 23.0,
            buoyant_force_scalar: 1.0,
            drag_coefficient_ascent: 0.47,
            parachute_drag_coefficient: 1.0,
            parachute_area: 1.0,
            ascent_rate: None,
            descent_rate_parachute: None,
        }
    }

    #[test]
    fn reference_config_is_valid() {
        assert!(reference_config().validate().is_ok());
    }

    #[test]
    fn negative_mass_rejected() {
        let cfg = BalloonConfig {
            gross_mass: -1.0,
            ..reference_config()
        };
        assert!(matches!(cfg.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn gas_fill_percentage_bounded() {
        let cfg = BalloonConfig {
            percent_lift_gas: 120.0,
            ..reference_config()
        };
        assert!(matches!(cfg.validate(), Err(SimError::Config(_))));

        let cfg = BalloonConfig {
            percent_lift_gas: -5.0,
            ..reference_config()
        };
        assert!(matches!(cfg.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn non_finite_field_rejected() {
        let cfg = BalloonConfig {
            max_volume: f64::NAN,
            ..reference_config()
        };
        assert!(matches!(cfg.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn launch_site_bounds() {
        let site = LaunchSite {
            latitude: 95.0,
            longitude: 0.0,
            altitude: 10.0,
            time: 0.0,
        };
        assert!(site.validate().is_err());

        let site = LaunchSite {
            latitude: 32.0,
            longitude: 42.0,
            altitude: 10.0,
            time: 0.0,
        };
        assert!(site.validate().is_ok());
    }

    #[test]
    fn hydrogen_lighter_than_helium() {
        assert!(LiftGas::Hydrogen.molar_mass() < LiftGas::Helium.molar_mass());
    }
}
