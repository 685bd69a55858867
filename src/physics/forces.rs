use crate::physics::atmosphere::{AtmoSample, G0};

// ---------------------------------------------------------------------------
// Vertical force model — buoyancy, weight, quadratic drag
// ---------------------------------------------------------------------------

/// Drag configuration for the current flight phase.
#[derive(Debug, Clone, Copy)]
pub struct DragParams {
    pub cd: f64,
    pub area: f64, // m^2
}

/// Buoyant force, N (upward positive).
///
/// Archimedes with the ambient air density alone: F = rho_air * V * g,
/// scaled by the configured tuning factor. The lifting-gas mass is accounted
/// for in the total weight, not subtracted from the displaced-air density.
pub fn buoyancy(atmo: &AtmoSample, volume: f64, scalar: f64) -> f64 {
    atmo.density * volume * G0 * scalar
}

/// Weight, N (always negative).
pub fn weight(total_mass: f64) -> f64 {
    -total_mass * G0
}

/// Quadratic vertical drag, N. Sign-preserving: opposes the vertical velocity
/// relative to the (vertically still) air.
pub fn vertical_drag(vz: f64, atmo: &AtmoSample, drag: &DragParams) -> f64 {
    -0.5 * drag.cd * atmo.density * drag.area * vz * vz.abs()
}

/// Net vertical force on the balloon, N. Pass `volume = 0` once the gas has
/// vented; the buoyant term then vanishes by construction.
pub fn net_vertical_force(
    vz: f64,
    atmo: &AtmoSample,
    volume: f64,
    total_mass: f64,
    buoyant_force_scalar: f64,
    drag: &DragParams,
) -> f64 {
    buoyancy(atmo, volume, buoyant_force_scalar) + weight(total_mass) + vertical_drag(vz, atmo, drag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::atmosphere::standard;
    use approx::assert_relative_eq;

    #[test]
    fn buoyancy_exceeds_weight_for_light_payload() {
        let atmo = standard(0.0);
        // 2 m^3 of displaced air lifts ~2.45 kg at sea level
        let f = buoyancy(&atmo, 2.0, 1.0) + weight(1.0);
        assert!(f > 0.0);
    }

    #[test]
    fn drag_opposes_motion_both_directions() {
        let atmo = standard(0.0);
        let drag = DragParams { cd: 0.47, area: 1.0 };
        assert!(vertical_drag(5.0, &atmo, &drag) < 0.0);
        assert!(vertical_drag(-5.0, &atmo, &drag) > 0.0);
        assert_relative_eq!(vertical_drag(0.0, &atmo, &drag), 0.0);
    }

    #[test]
    fn drag_is_quadratic_in_speed() {
        let atmo = standard(0.0);
        let drag = DragParams { cd: 1.0, area: 1.0 };
        let f1 = vertical_drag(2.0, &atmo, &drag);
        let f2 = vertical_drag(4.0, &atmo, &drag);
        assert_relative_eq!(f2 / f1, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn vented_envelope_has_no_buoyancy() {
        let atmo = standard(5_000.0);
        let drag = DragParams { cd: 1.0, area: 1.0 };
        let f = net_vertical_force(0.0, &atmo, 0.0, 14.0, 1.0, &drag);
        assert_relative_eq!(f, weight(14.0));
    }

    #[test]
    fn terminal_velocity_balances_forces() {
        let atmo = standard(0.0);
        let mass = 14.0;
        let drag = DragParams { cd: 1.0, area: 1.0 };
        let v_term = (2.0 * mass * G0 / (drag.cd * atmo.density * drag.area)).sqrt();
        let f = net_vertical_force(-v_term, &atmo, 0.0, mass, 1.0, &drag);
        assert_relative_eq!(f, 0.0, epsilon = 1e-9);
    }
}
