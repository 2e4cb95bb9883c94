//! Heliocentric planetary positions.
//!
//! Mercury, Venus, Mars, the Earth-Moon barycentre, Uranus, Neptune and
//! Pluto use the JPL approximate Keplerian elements valid 1800-2050
//! (E. M. Standish, "Keplerian Elements for Approximate Positions of the
//! Major Planets", Table 1), referred to the J2000 ecliptic and equinox.
//!
//! Jupiter and Saturn use mean elements of date together with the periodic
//! terms of their mutual "great inequality" (P. Schlyter, "Computing
//! planetary positions"), since the Table 1 fit leaves those terms out.

use astro_frames::{
    SphericalCoords, cartesian_to_spherical, precess_vector_j2000_to_date, spherical_to_cartesian,
};
use astro_time::jd_to_centuries;

use crate::kepler::{OrbitalElements, heliocentric_position};

/// Element set at J2000.0 with linear rates per Julian century.
///
/// Columns: a (AU), e, I, L, varpi, Omega (degrees).
#[derive(Debug, Clone, Copy)]
struct SecularElements {
    base: [f64; 6],
    rate: [f64; 6],
}

#[rustfmt::skip]
const MERCURY: SecularElements = SecularElements {
    base: [0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593],
    rate: [0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081],
};

#[rustfmt::skip]
const VENUS: SecularElements = SecularElements {
    base: [0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255],
    rate: [0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418],
};

#[rustfmt::skip]
const EARTH_MOON_BARYCENTRE: SecularElements = SecularElements {
    base: [1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0],
    rate: [0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0],
};

#[rustfmt::skip]
const MARS: SecularElements = SecularElements {
    base: [1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891],
    rate: [0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343],
};

#[rustfmt::skip]
const URANUS: SecularElements = SecularElements {
    base: [19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503],
    rate: [-0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589],
};

#[rustfmt::skip]
const NEPTUNE: SecularElements = SecularElements {
    base: [30.06992276, 0.00859048, 1.77004347, -55.12002969, 44.96476227, 131.78422574],
    rate: [0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664],
};

#[rustfmt::skip]
const PLUTO: SecularElements = SecularElements {
    base: [39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684],
    rate: [-0.00031596, 0.00005170, 0.00004818, 145.20780515, -0.04062942, -0.01183482],
};

impl SecularElements {
    fn at(&self, t: f64) -> OrbitalElements {
        let v: [f64; 6] = std::array::from_fn(|k| self.base[k] + self.rate[k] * t);
        let [a, e, inclination, mean_longitude, varpi, node] = v;
        OrbitalElements {
            a,
            e,
            inclination,
            node,
            arg_perihelion: varpi - node,
            mean_anomaly: mean_longitude - varpi,
        }
    }
}

/// Mean elements of date with linear rates per day from 2000-01-00.0 TT.
///
/// Columns: Omega, i, omega (degrees), a (AU), e, M (degrees).
#[derive(Debug, Clone, Copy)]
struct DailyElements {
    base: [f64; 6],
    rate: [f64; 6],
}

#[rustfmt::skip]
const JUPITER: DailyElements = DailyElements {
    base: [100.4542, 1.3030, 273.8777, 5.20256, 0.048498, 19.8950],
    rate: [2.76854e-5, -1.557e-7, 1.64505e-5, 0.0, 4.469e-9, 0.0830853001],
};

#[rustfmt::skip]
const SATURN: DailyElements = DailyElements {
    base: [113.6634, 2.4886, 339.3939, 9.55475, 0.055546, 316.9670],
    rate: [2.38980e-5, -1.081e-7, 2.97661e-5, 0.0, -9.499e-9, 0.0334442282],
};

/// Julian Date of 2000 January 0.0 TT, the epoch of [`DailyElements`].
const DAILY_EPOCH_JD: f64 = 2_451_543.5;

impl DailyElements {
    fn at(&self, d: f64) -> OrbitalElements {
        let v: [f64; 6] = std::array::from_fn(|k| self.base[k] + self.rate[k] * d);
        let [node, inclination, arg_perihelion, a, e, mean_anomaly] = v;
        OrbitalElements {
            a,
            e,
            inclination,
            node,
            arg_perihelion,
            mean_anomaly,
        }
    }

    fn mean_anomaly(&self, d: f64) -> f64 {
        self.base[5] + self.rate[5] * d
    }
}

/// Planets with a heliocentric orbit model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    EarthMoonBarycentre,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Heliocentric position `[x, y, z]` (AU) on the mean ecliptic and equinox
/// of date at `jd_tt`.
pub fn heliocentric_of_date(planet: Planet, jd_tt: f64) -> [f64; 3] {
    let t = jd_to_centuries(jd_tt);
    let secular = match planet {
        Planet::Mercury => MERCURY,
        Planet::Venus => VENUS,
        Planet::EarthMoonBarycentre => EARTH_MOON_BARYCENTRE,
        Planet::Mars => MARS,
        Planet::Uranus => URANUS,
        Planet::Neptune => NEPTUNE,
        Planet::Pluto => PLUTO,
        Planet::Jupiter => return jupiter_of_date(jd_tt - DAILY_EPOCH_JD),
        Planet::Saturn => return saturn_of_date(jd_tt - DAILY_EPOCH_JD),
    };
    precess_vector_j2000_to_date(&heliocentric_position(&secular.at(t)), t)
}

fn jupiter_of_date(d: f64) -> [f64; 3] {
    let mj = JUPITER.mean_anomaly(d);
    let ms = SATURN.mean_anomaly(d);
    let sin = |x: f64| x.to_radians().sin();
    let cos = |x: f64| x.to_radians().cos();

    let dlon = -0.332 * sin(2.0 * mj - 5.0 * ms - 67.6)
        - 0.056 * sin(2.0 * mj - 2.0 * ms + 21.0)
        + 0.042 * sin(3.0 * mj - 5.0 * ms + 21.0)
        - 0.036 * sin(mj - 2.0 * ms)
        + 0.022 * cos(mj - ms)
        + 0.023 * sin(2.0 * mj - 3.0 * ms + 52.0)
        - 0.016 * sin(mj - 5.0 * ms - 69.0);

    perturb(&heliocentric_position(&JUPITER.at(d)), dlon, 0.0)
}

fn saturn_of_date(d: f64) -> [f64; 3] {
    let mj = JUPITER.mean_anomaly(d);
    let ms = SATURN.mean_anomaly(d);
    let sin = |x: f64| x.to_radians().sin();
    let cos = |x: f64| x.to_radians().cos();

    let dlon = 0.812 * sin(2.0 * mj - 5.0 * ms - 67.6)
        - 0.229 * cos(2.0 * mj - 4.0 * ms - 2.0)
        + 0.119 * sin(mj - 2.0 * ms - 3.0)
        + 0.046 * sin(2.0 * mj - 6.0 * ms - 69.0)
        + 0.014 * sin(mj - 3.0 * ms + 32.0);
    let dlat = -0.020 * cos(2.0 * mj - 4.0 * ms - 2.0) + 0.018 * sin(2.0 * mj - 6.0 * ms - 49.0);

    perturb(&heliocentric_position(&SATURN.at(d)), dlon, dlat)
}

fn perturb(xyz: &[f64; 3], dlon: f64, dlat: f64) -> [f64; 3] {
    let s = cartesian_to_spherical(xyz);
    spherical_to_cartesian(&SphericalCoords {
        lon_deg: s.lon_deg + dlon,
        lat_deg: s.lat_deg + dlat,
        distance: s.distance,
    })
}
