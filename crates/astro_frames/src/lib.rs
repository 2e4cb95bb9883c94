//! Reference-frame helpers for the analytic ephemeris.
//!
//! Provides the precession of ecliptic coordinates from J2000 to the mean
//! equinox of date, the mean obliquity, the fundamental lunar and solar
//! arguments, and Cartesian/spherical conversions.

pub mod fundamental;
pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use fundamental::{DelaunayArguments, LunarArguments, delaunay_arguments, lunar_arguments};
pub use obliquity::mean_obliquity_deg;
pub use precession::{
    general_precession_longitude_arcsec, general_precession_longitude_deg,
    precess_vector_j2000_to_date,
};
pub use spherical::{SphericalCoords, cartesian_to_spherical, normalize_360, spherical_to_cartesian};
