//! Geocentric apparent places on the mean ecliptic and equinox of date.
//!
//! Planets: heliocentric model -> geocentric vector with light-time
//! iteration -> annual aberration (Meeus eq. 23.2). The Sun takes the
//! constant aberration of eq. 25.10; the lunar series already yields
//! apparent coordinates apart from nutation.

use astro_frames::{SphericalCoords, cartesian_to_spherical, normalize_360, spherical_to_cartesian};
use astro_time::jd_to_centuries;

use crate::body::Body;
use crate::moon::lunar_position;
use crate::planets::{Planet, heliocentric_of_date};

const AU_KM: f64 = 149_597_870.7;

/// Earth / Moon mass ratio.
const EARTH_MOON_MASS_RATIO: f64 = 81.300_569;

/// Light travel time per AU, in days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Constant of annual aberration, degrees.
const ABERRATION_DEG: f64 = 20.495_52 / 3600.0;

/// Solar aberration at 1 AU, degrees.
const SOLAR_ABERRATION_DEG: f64 = 20.4898 / 3600.0;

const LIGHT_TIME_ITERATIONS: usize = 2;

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Heliocentric Earth (AU, ecliptic of date), reduced from the Earth-Moon
/// barycentre by the lunar offset.
pub(crate) fn earth_heliocentric(jd_tt: f64) -> [f64; 3] {
    let emb = heliocentric_of_date(Planet::EarthMoonBarycentre, jd_tt);
    let moon = lunar_position(jd_to_centuries(jd_tt));
    let moon_au = spherical_to_cartesian(&SphericalCoords {
        lon_deg: moon.longitude_deg,
        lat_deg: moon.latitude_deg,
        distance: moon.distance_km / AU_KM,
    });
    let k = 1.0 / (1.0 + EARTH_MOON_MASS_RATIO);
    [emb[0] - k * moon_au[0], emb[1] - k * moon_au[1], emb[2] - k * moon_au[2]]
}

fn planet_of(body: Body) -> Option<Planet> {
    match body {
        Body::Mercury => Some(Planet::Mercury),
        Body::Venus => Some(Planet::Venus),
        Body::Mars => Some(Planet::Mars),
        Body::Jupiter => Some(Planet::Jupiter),
        Body::Saturn => Some(Planet::Saturn),
        Body::Uranus => Some(Planet::Uranus),
        Body::Neptune => Some(Planet::Neptune),
        Body::Pluto => Some(Planet::Pluto),
        Body::Sun | Body::Moon => None,
    }
}

/// Apparent `(longitude, latitude)` in degrees of a body at `jd_tt`.
pub(crate) fn apparent_lon_lat(body: Body, jd_tt: f64) -> (f64, f64) {
    if body == Body::Moon {
        let p = lunar_position(jd_to_centuries(jd_tt));
        return (p.longitude_deg, p.latitude_deg);
    }

    let earth = earth_heliocentric(jd_tt);
    let sun = cartesian_to_spherical(&[-earth[0], -earth[1], -earth[2]]);

    let Some(planet) = planet_of(body) else {
        let lon = sun.lon_deg - SOLAR_ABERRATION_DEG / sun.distance;
        return (normalize_360(lon), sun.lat_deg);
    };

    let mut geo = sub(heliocentric_of_date(planet, jd_tt), earth);
    for _ in 0..LIGHT_TIME_ITERATIONS {
        let tau = LIGHT_TIME_DAYS_PER_AU * norm(geo);
        geo = sub(heliocentric_of_date(planet, jd_tt - tau), earth);
    }

    let s = cartesian_to_spherical(&geo);
    let (sin_lat, cos_lat) = s.lat_deg.to_radians().sin_cos();
    let (sin_el, cos_el) = (sun.lon_deg - s.lon_deg).to_radians().sin_cos();
    let dlon = -ABERRATION_DEG * cos_el / cos_lat;
    let dlat = -ABERRATION_DEG * sin_lat * sin_el;

    (normalize_360(s.lon_deg + dlon), s.lat_deg + dlat)
}
