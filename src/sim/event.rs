// ---------------------------------------------------------------------------
// Discrete flight events
// ---------------------------------------------------------------------------

/// Kinds of discrete events a flight produces.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Launch,
    /// Envelope reached its maximum volume; gas vented, parachute descent
    /// begins.
    Burst { altitude: f64, volume: f64 },
    Landing { latitude: f64, longitude: f64 },
}

/// A discrete event with the simulation time it occurred at.
#[derive(Debug, Clone, PartialEq)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
}

impl SimEvent {
    pub fn is_burst(&self) -> bool {
        matches!(self.kind, EventKind::Burst { .. })
    }
}
