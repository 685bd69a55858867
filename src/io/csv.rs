use std::io::{self, Write};

use crate::sim::state::Frame;

/// Write trajectory frames to CSV format.
///
/// Columns: time, latitude, longitude, altitude, vx, vy, vz,
///          wind_direction, wind_speed, volume, phase
pub fn write_trajectory<W: Write>(writer: &mut W, frames: &[Frame]) -> io::Result<()> {
    writeln!(
        writer,
        "time,latitude,longitude,altitude,vx,vy,vz,\
         wind_direction,wind_speed,volume,phase"
    )?;

    for f in frames {
        writeln!(
            writer,
            "{:.1},{:.6},{:.6},{:.2},{:.3},{:.3},{:.3},{:.1},{:.2},{:.4},{}",
            f.time,
            f.latitude,
            f.longitude,
            f.altitude,
            f.velocity.x,
            f.velocity.y,
            f.velocity.z,
            f.wind.direction_deg,
            f.wind.speed,
            f.volume,
            f.phase.as_str(),
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, frames: &[Frame]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, frames)
}
