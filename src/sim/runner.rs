use nalgebra::Vector3;
use tracing::{debug, info};

use crate::balloon::{BalloonConfig, LaunchSite};
use crate::error::SimError;
use crate::geo;
use crate::physics::atmosphere::AtmosphereProvider;
use crate::physics::forces;
use crate::physics::volume::Envelope;
use crate::sim::event::{EventKind, SimEvent};
use crate::sim::integrator::rk4_step;
use crate::sim::phase::{FlightPhase, FlightStateMachine};
use crate::sim::state::{Deriv, Frame, SimConfig, VerticalState};
use crate::wind::WindLookup;

// ---------------------------------------------------------------------------
// Full flight simulation loop
// ---------------------------------------------------------------------------

/// Altitude ceiling for any phase of flight. Crossing it means the force
/// balance has gone wrong; the run aborts rather than integrating off into
/// space.
const MAX_CREDIBLE_ALTITUDE: f64 = 60_000.0;

/// Vertical speed bound, well beyond any real ascent or descent. An
/// under-resolved timestep makes the stiff parachute regime oscillate and
/// grow instead of settling at terminal velocity; this cuts the run off
/// while the state is still finite.
const MAX_CREDIBLE_SPEED: f64 = 1_000.0;

/// Complete record of one simulated flight: the ordered frame sequence plus
/// the discrete events (launch, burst, landing).
#[derive(Debug, Clone)]
pub struct FlightLog {
    pub frames: Vec<Frame>,
    pub events: Vec<SimEvent>,
}

impl FlightLog {
    /// Last frame of the run. Logs returned by [`simulate`] always hold at
    /// least the launch frame; a hand-built empty log panics here.
    pub fn last_frame(&self) -> &Frame {
        self.frames
            .last()
            .expect("flight log holds at least the launch frame")
    }

    pub fn landed(&self) -> bool {
        self.last_frame().phase == FlightPhase::Landed
    }

    pub fn burst_event(&self) -> Option<&SimEvent> {
        self.events.iter().find(|e| e.is_burst())
    }

    pub fn peak_altitude(&self) -> f64 {
        self.frames
            .iter()
            .map(|f| f.altitude)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Run one flight from launch to landing (or the max_time ceiling).
///
/// Each step performs RK4 on (altitude, vz) with per-stage atmosphere
/// samples, drifts the horizontal position with the wind, evaluates phase
/// transitions, refreshes the envelope volume from the post-step sample, and
/// appends a frame. Wind is queried at the launch altitude on every step —
/// the reference model's single-level approximation, kept as-is.
pub fn simulate(
    config: &BalloonConfig,
    launch: &LaunchSite,
    sim: &SimConfig,
    atmosphere: &dyn AtmosphereProvider,
    wind: &dyn WindLookup,
) -> Result<FlightLog, SimError> {
    let config = config.clone().validate()?;
    let launch = launch.validate()?;
    let sim = sim.clone().validate()?;

    let envelope = Envelope::fill(&config);
    let mut fsm = FlightStateMachine::new();

    let mut vstate = VerticalState {
        altitude: launch.altitude,
        vz: config.ascent_rate.unwrap_or(0.0),
    };
    let mut lat = launch.latitude;
    let mut lon = launch.longitude;
    let mut t = 0.0;

    let steps = (sim.max_time / sim.dt).ceil() as usize;
    let mut frames = Vec::with_capacity((steps + 1).min(200_000));
    let mut events = vec![SimEvent {
        time: 0.0,
        kind: EventKind::Launch,
    }];

    let launch_atmo = atmosphere.sample(launch.altitude)?;
    let launch_wind = wind.query(lat, lon, launch.altitude, launch.time)?;
    frames.push(Frame {
        time: 0.0,
        latitude: lat,
        longitude: lon,
        altitude: vstate.altitude,
        velocity: Vector3::new(
            launch_wind.components().x,
            launch_wind.components().y,
            vstate.vz,
        ),
        wind: launch_wind,
        volume: envelope.volume(&launch_atmo),
        phase: FlightPhase::Ascent,
    });

    debug!(
        gas_mass_kg = envelope.gas_mass(),
        launch_volume_m3 = envelope.volume(&launch_atmo),
        dt = sim.dt,
        "simulation start"
    );

    for _ in 0..steps {
        let phase = fsm.phase();
        let mass = phase.total_mass(&config, &envelope);

        // Each RK4 stage samples the atmosphere at its own altitude and,
        // during ascent, expands the envelope to that sample. Drag selection
        // is a total function of phase.
        let next = rk4_step(&vstate, t, sim.dt, |s, _| {
            let atmo = atmosphere.sample(s.altitude.max(0.0))?;
            let volume = match phase {
                FlightPhase::Ascent => envelope.volume(&atmo),
                FlightPhase::Descent | FlightPhase::Landed => 0.0,
            };
            let drag = phase.drag(&config, volume);
            let force = forces::net_vertical_force(
                s.vz,
                &atmo,
                volume,
                mass,
                config.buoyant_force_scalar,
                &drag,
            );
            Ok(Deriv {
                daltitude: s.vz,
                dvz: force / mass,
            })
        })?;
        t += sim.dt;

        // Horizontal drift: velocity equals the wind, altitude pinned to the
        // launch level on every query.
        let w = wind.query(lat, lon, launch.altitude, launch.time + t)?;
        let drift = w.components() * sim.dt;
        let (new_lat, new_lon) = geo::displace(lat, lon, drift);
        lat = new_lat;
        lon = new_lon;

        if !(next.altitude.is_finite()
            && next.vz.is_finite()
            && lat.is_finite()
            && lon.is_finite())
        {
            return Err(diverged(&frames, "state became non-finite"));
        }
        if next.vz.abs() > MAX_CREDIBLE_SPEED {
            return Err(diverged(&frames, "vertical speed left the credible envelope"));
        }
        vstate = next;

        let atmo = atmosphere.sample(vstate.altitude.max(0.0))?;

        // Transitions, evaluated once per completed step
        let burst_fired = fsm.check_burst(&envelope, &atmo);
        let landed = fsm.check_landing(vstate.altitude);

        // Applies in every phase; only the step that bursts is exempt, and
        // burst altitudes sit far below the ceiling anyway.
        if vstate.altitude > MAX_CREDIBLE_ALTITUDE && !burst_fired {
            return Err(diverged(&frames, "altitude exceeded the credible ceiling"));
        }

        // The burst step's frame still reports the Ascent reading: the
        // envelope at its limit. Volume reads zero from the next frame on.
        let frame_volume = match phase {
            FlightPhase::Ascent => envelope.volume(&atmo),
            FlightPhase::Descent | FlightPhase::Landed => 0.0,
        };
        frames.push(Frame {
            time: t,
            latitude: lat,
            longitude: lon,
            altitude: vstate.altitude,
            velocity: Vector3::new(w.components().x, w.components().y, vstate.vz),
            wind: w,
            volume: frame_volume,
            phase: if landed { FlightPhase::Landed } else { phase },
        });

        if burst_fired {
            info!(time_s = t, altitude_m = vstate.altitude, "balloon burst");
            events.push(SimEvent {
                time: t,
                kind: EventKind::Burst {
                    altitude: vstate.altitude,
                    volume: frame_volume,
                },
            });
            if let Some(rate) = config.descent_rate_parachute {
                // Configured jump to the nominal parachute rate; otherwise
                // velocity stays continuous through the transition.
                vstate.vz = -rate;
            }
        }

        if landed {
            info!(time_s = t, latitude = lat, longitude = lon, "balloon landed");
            events.push(SimEvent {
                time: t,
                kind: EventKind::Landing {
                    latitude: lat,
                    longitude: lon,
                },
            });
            break;
        }
    }

    Ok(FlightLog { frames, events })
}

fn diverged(frames: &[Frame], reason: &str) -> SimError {
    // The launch frame is pushed before the loop, so the slice is never empty
    let frame = frames
        .last()
        .cloned()
        .expect("flight log holds at least the launch frame");
    SimError::Integration {
        frame: Box::new(frame),
        reason: reason.into(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
