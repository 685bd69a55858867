use crate::error::SimError;
use crate::sim::state::{Deriv, VerticalState};

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta on the vertical state pair
// ---------------------------------------------------------------------------

/// Single RK4 step: advance (altitude, vz) by dt.
///
/// The derivative function samples the atmosphere at each stage's altitude
/// and may fail if the provider cannot answer, so the step is fallible.
pub fn rk4_step<F>(
    state: &VerticalState,
    t: f64,
    dt: f64,
    mut f: F,
) -> Result<VerticalState, SimError>
where
    F: FnMut(&VerticalState, f64) -> Result<Deriv, SimError>,
{
    let k1 = f(state, t)?;
    let k2 = f(&state.apply(&k1, dt * 0.5), t + dt * 0.5)?;
    let k3 = f(&state.apply(&k2, dt * 0.5), t + dt * 0.5)?;
    let k4 = f(&state.apply(&k3, dt), t + dt)?;

    Ok(VerticalState {
        altitude: state.altitude
            + (k1.daltitude + 2.0 * k2.daltitude + 2.0 * k3.daltitude + k4.daltitude)
                * (dt / 6.0),
        vz: state.vz + (k1.dvz + 2.0 * k2.dvz + 2.0 * k3.dvz + k4.dvz) * (dt / 6.0),
    })
}
