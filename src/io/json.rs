use std::io::{self, Write};

use crate::sim::event::EventKind;
use crate::sim::runner::FlightLog;

/// Summary statistics computed from a flight log.
#[derive(Debug, Clone)]
pub struct FlightSummary {
    pub landed: bool,
    pub flight_time_s: f64,
    pub peak_altitude_m: f64,
    pub burst_time_s: Option<f64>,
    pub burst_altitude_m: Option<f64>,
    pub landing_latitude: f64,
    pub landing_longitude: f64,
    pub landing_speed_ms: f64,
}

impl FlightSummary {
    pub fn from_log(log: &FlightLog) -> Self {
        let last = log.last_frame();
        let burst = log.burst_event();
        let burst_altitude = burst.and_then(|e| match e.kind {
            EventKind::Burst { altitude, .. } => Some(altitude),
            _ => None,
        });

        FlightSummary {
            landed: log.landed(),
            flight_time_s: last.time,
            peak_altitude_m: log.peak_altitude(),
            burst_time_s: burst.map(|e| e.time),
            burst_altitude_m: burst_altitude,
            landing_latitude: last.latitude,
            landing_longitude: last.longitude,
            landing_speed_ms: last.velocity.norm(),
        }
    }
}

/// Write the flight summary as JSON to a writer.
pub fn write_summary<W: Write>(writer: &mut W, summary: &FlightSummary) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"landed\": {},", summary.landed)?;
    writeln!(writer, "  \"flight_time_s\": {:.1},", summary.flight_time_s)?;
    writeln!(
        writer,
        "  \"peak_altitude_m\": {:.1},",
        summary.peak_altitude_m
    )?;
    match (summary.burst_time_s, summary.burst_altitude_m) {
        (Some(t), Some(alt)) => {
            writeln!(writer, "  \"burst_time_s\": {t:.1},")?;
            writeln!(writer, "  \"burst_altitude_m\": {alt:.1},")?;
        }
        _ => {
            writeln!(writer, "  \"burst_time_s\": null,")?;
            writeln!(writer, "  \"burst_altitude_m\": null,")?;
        }
    }
    writeln!(writer, "  \"landing\": {{")?;
    writeln!(
        writer,
        "    \"latitude\": {:.6},",
        summary.landing_latitude
    )?;
    writeln!(
        writer,
        "    \"longitude\": {:.6},",
        summary.landing_longitude
    )?;
    writeln!(writer, "    \"speed_ms\": {:.2}", summary.landing_speed_ms)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write the flight summary JSON to a file.
pub fn write_summary_file(path: &str, summary: &FlightSummary) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::event::SimEvent;
    use crate::sim::phase::FlightPhase;
    use crate::sim::state::Frame;
    use crate::wind::WindSample;
    use nalgebra::Vector3;

    fn simple_log() -> FlightLog {
        let frame = |time, altitude, vz, phase| Frame {
            time,
            latitude: 32.0,
            longitude: 42.0,
            altitude,
            velocity: Vector3::new(0.0, 0.0, vz),
            wind: WindSample::CALM,
            volume: 0.0,
            phase,
        };
        FlightLog {
            frames: vec![
                frame(0.0, 10.0, 3.0, FlightPhase::Ascent),
                frame(3_600.0, 13_000.0, 3.0, FlightPhase::Ascent),
                frame(5_400.0, -0.2, -4.1, FlightPhase::Landed),
            ],
            events: vec![
                SimEvent {
                    time: 0.0,
                    kind: EventKind::Launch,
                },
                SimEvent {
                    time: 3_600.0,
                    kind: EventKind::Burst {
                        altitude: 13_000.0,
                        volume: 6.0,
                    },
                },
                SimEvent {
                    time: 5_400.0,
                    kind: EventKind::Landing {
                        latitude: 32.0,
                        longitude: 42.0,
                    },
                },
            ],
        }
    }

    #[test]
    fn summary_reads_burst_and_landing() {
        let s = FlightSummary::from_log(&simple_log());
        assert!(s.landed);
        assert_eq!(s.burst_time_s, Some(3_600.0));
        assert_eq!(s.burst_altitude_m, Some(13_000.0));
        assert!((s.peak_altitude_m - 13_000.0).abs() < 1e-9);
        assert!((s.flight_time_s - 5_400.0).abs() < 1e-9);
    }

    #[test]
    fn json_output_is_valid() {
        let summary = FlightSummary::from_log(&simple_log());
        let mut buf = Vec::new();
        write_summary(&mut buf, &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"burst_altitude_m\": 13000.0"));
        assert!(json.contains("\"landed\": true"));
        assert!(json.contains("\"landing\""));
    }
}
