use nalgebra::Vector2;

/// Mean Earth radius used for the spherical ground-track approximation, m.
pub const EARTH_RADIUS: f64 = 6_371_009.0;

// ---------------------------------------------------------------------------
// Spherical lat/lon displacement
// ---------------------------------------------------------------------------

/// Displace a geodetic position by a local East/North offset (m) using the
/// spherical approximation:
///
///   dlat = (dn / R) * 180/pi
///   dlon = (de / (R * cos(lat))) * 180/pi
///
/// Accurate to well under a metre over the few-hundred-km drift of a balloon
/// flight. Degenerates near the poles where cos(lat) -> 0; the runner's
/// finiteness check catches that case.
pub fn displace(lat_deg: f64, lon_deg: f64, offset_en: Vector2<f64>) -> (f64, f64) {
    let dlat = (offset_en.y / EARTH_RADIUS).to_degrees();
    let dlon = (offset_en.x / (EARTH_RADIUS * lat_deg.to_radians().cos())).to_degrees();
    (lat_deg + dlat, lon_deg + dlon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn northward_displacement_changes_latitude_only() {
        let (lat, lon) = displace(45.0, 10.0, Vector2::new(0.0, 1_000.0));
        assert!(lat > 45.0);
        assert_relative_eq!(lon, 10.0);
        // 1 km north is about 0.009 degrees of latitude
        assert_relative_eq!(lat - 45.0, 0.008_993, epsilon = 1e-4);
    }

    #[test]
    fn eastward_displacement_scales_with_cos_latitude() {
        let (_, lon_equator) = displace(0.0, 0.0, Vector2::new(1_000.0, 0.0));
        let (_, lon_60n) = displace(60.0, 0.0, Vector2::new(1_000.0, 0.0));
        // Same eastward distance covers twice the longitude at 60N
        assert_relative_eq!(lon_60n / lon_equator, 2.0, epsilon = 1e-3);
    }

    #[test]
    fn zero_offset_is_identity() {
        let (lat, lon) = displace(32.0, 42.0, Vector2::zeros());
        assert_relative_eq!(lat, 32.0);
        assert_relative_eq!(lon, 42.0);
    }
}
