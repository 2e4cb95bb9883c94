//! Cartesian and spherical coordinate conversion.

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360), measured from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from the origin, in the units of the Cartesian input.
    pub distance: f64,
}

/// Normalize an angle in degrees to [0, 360).
///
/// `rem_euclid` can round up to exactly 360.0 for tiny negative inputs;
/// that case folds back to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }

    SphericalCoords {
        lon_deg: normalize_360(y.atan2(x).to_degrees()),
        lat_deg: (z / r).clamp(-1.0, 1.0).asin().to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let (sin_lon, cos_lon) = s.lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = s.lat_deg.to_radians().sin_cos();
    [
        s.distance * cos_lat * cos_lon,
        s.distance * cos_lat * sin_lon,
        s.distance * sin_lat,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes() {
        let s = cartesian_to_spherical(&[0.0, 2.0, 0.0]);
        assert!((s.lon_deg - 90.0).abs() < 1e-12);
        assert!(s.lat_deg.abs() < 1e-12);
        assert!((s.distance - 2.0).abs() < 1e-12);

        let s = cartesian_to_spherical(&[0.0, -1.0, 0.0]);
        assert!((s.lon_deg - 270.0).abs() < 1e-12);
    }

    #[test]
    fn pole() {
        let s = cartesian_to_spherical(&[0.0, 0.0, -3.0]);
        assert!((s.lat_deg + 90.0).abs() < 1e-12);
    }

    #[test]
    fn origin() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(s.distance, 0.0);
    }

    #[test]
    fn roundtrip() {
        let original = [1.2, -0.4, 0.07];
        let back = spherical_to_cartesian(&cartesian_to_spherical(&original));
        for i in 0..3 {
            assert!((original[i] - back[i]).abs() < 1e-14, "component {i}");
        }
    }

    #[test]
    fn normalize_range() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert_eq!(normalize_360(-30.0), 330.0);
        assert_eq!(normalize_360(725.0), 5.0);
        let tiny = normalize_360(-1e-18);
        assert!((0.0..360.0).contains(&tiny), "tiny = {tiny}");
    }
}
