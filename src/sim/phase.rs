use crate::balloon::BalloonConfig;
use crate::physics::atmosphere::AtmoSample;
use crate::physics::forces::DragParams;
use crate::physics::volume::{spherical_cross_section, Envelope};

// ---------------------------------------------------------------------------
// Flight state machine: Ascent -> (burst) -> Descent -> Landed
// ---------------------------------------------------------------------------

/// Phase of flight. Burst is the instantaneous Ascent->Descent edge and is
/// reported as an event, not a phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    Ascent,
    Descent,
    Landed,
}

impl FlightPhase {
    pub fn is_airborne(&self) -> bool {
        !matches!(self, FlightPhase::Landed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightPhase::Ascent => "ascent",
            FlightPhase::Descent => "descent",
            FlightPhase::Landed => "landed",
        }
    }

    /// Drag configuration as a total function of phase: the envelope during
    /// ascent (area from the current volume), the parachute afterwards.
    pub fn drag(&self, config: &BalloonConfig, envelope_volume: f64) -> DragParams {
        match self {
            FlightPhase::Ascent => DragParams {
                cd: config.drag_coefficient_ascent,
                area: spherical_cross_section(envelope_volume),
            },
            FlightPhase::Descent | FlightPhase::Landed => DragParams {
                cd: config.parachute_drag_coefficient,
                area: config.parachute_area,
            },
        }
    }

    /// Mass carried in this phase, kg. The lift gas vents at burst.
    pub fn total_mass(&self, config: &BalloonConfig, envelope: &Envelope) -> f64 {
        match self {
            FlightPhase::Ascent => config.gross_mass + envelope.gas_mass(),
            FlightPhase::Descent | FlightPhase::Landed => config.gross_mass,
        }
    }
}

/// Governs phase transitions. Each edge has its own transition function and
/// no edge is reversible; once burst the machine can never re-enter Ascent,
/// and Landed is terminal.
#[derive(Debug, Clone)]
pub struct FlightStateMachine {
    phase: FlightPhase,
}

impl FlightStateMachine {
    pub fn new() -> Self {
        Self {
            phase: FlightPhase::Ascent,
        }
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    /// Ascent -> Descent edge. Fires at most once per run: after the first
    /// firing the phase is no longer Ascent, so the predicate is never
    /// re-evaluated.
    pub fn check_burst(&mut self, envelope: &Envelope, atmo: &AtmoSample) -> bool {
        if self.phase == FlightPhase::Ascent && envelope.bursts_at(atmo) {
            self.phase = FlightPhase::Descent;
            true
        } else {
            false
        }
    }

    /// -> Landed edge, terminal. Applies to any airborne phase so a
    /// lift-deficient configuration that sinks without ever bursting still
    /// terminates.
    pub fn check_landing(&mut self, altitude: f64) -> bool {
        if self.phase.is_airborne() && altitude <= 0.0 {
            self.phase = FlightPhase::Landed;
            true
        } else {
            false
        }
    }
}

impl Default for FlightStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
