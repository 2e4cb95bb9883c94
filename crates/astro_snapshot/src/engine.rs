//! Snapshot assembly.

use astro_config::FrameConfig;
use astro_ephem::{
    AnalyticEphemeris, Body, ELEMENT_FIT_END_JD, ELEMENT_FIT_START_JD, Ephemeris, LunarNode,
    TropicalPosition,
};
use astro_frames::mean_obliquity_deg;
use astro_time::{
    NormalizedInstant, gmst_deg, jd_to_centuries, local_sidereal_time_deg, normalize_timestamp,
};
use astro_vedic_base::{
    ChartPoint, Graha, OuterPlanet, aspects_within_orb, lagna_longitude_deg, lahiri_ayanamsha_deg,
    nakshatra_from_longitude, navamsa_from_longitude, sidereal_longitude, validate_orb,
};
use chrono::{DateTime, Offset, Utc};
use tracing::{debug, trace};

use crate::error::SnapshotError;
use crate::panchang::compute_panchang;
use crate::types::{
    BodyPosition, DivisionalPlacement, LagnaPosition, Snapshot, SnapshotMeta, SnapshotOptions,
    SystemInfo,
};

/// First accepted instant, JD (UT): 1800-01-01T00:00Z.
pub const WINDOW_START_JD_UT: f64 = ELEMENT_FIT_START_JD;

/// End of the accepted instants, JD (UT), exclusive: 2051-01-01T00:00Z.
pub const WINDOW_END_JD_UT: f64 = ELEMENT_FIT_END_JD;

/// Bodies in snapshot output order.
pub const SNAPSHOT_POINTS: [ChartPoint; 12] = [
    ChartPoint::Graha(Graha::Surya),
    ChartPoint::Graha(Graha::Chandra),
    ChartPoint::Graha(Graha::Buddh),
    ChartPoint::Graha(Graha::Shukra),
    ChartPoint::Graha(Graha::Mangal),
    ChartPoint::Graha(Graha::Guru),
    ChartPoint::Graha(Graha::Shani),
    ChartPoint::Outer(OuterPlanet::Uranus),
    ChartPoint::Outer(OuterPlanet::Neptune),
    ChartPoint::Outer(OuterPlanet::Pluto),
    ChartPoint::Graha(Graha::Rahu),
    ChartPoint::Graha(Graha::Ketu),
];

/// Where a body's tropical position comes from.
enum Source {
    Body(Body),
    Node(LunarNode),
}

const fn source(point: ChartPoint) -> Source {
    match point {
        ChartPoint::Graha(graha) => match graha {
            Graha::Surya => Source::Body(Body::Sun),
            Graha::Chandra => Source::Body(Body::Moon),
            Graha::Mangal => Source::Body(Body::Mars),
            Graha::Buddh => Source::Body(Body::Mercury),
            Graha::Guru => Source::Body(Body::Jupiter),
            Graha::Shukra => Source::Body(Body::Venus),
            Graha::Shani => Source::Body(Body::Saturn),
            Graha::Rahu => Source::Node(LunarNode::Rahu),
            Graha::Ketu => Source::Node(LunarNode::Ketu),
        },
        ChartPoint::Outer(OuterPlanet::Uranus) => Source::Body(Body::Uranus),
        ChartPoint::Outer(OuterPlanet::Neptune) => Source::Body(Body::Neptune),
        ChartPoint::Outer(OuterPlanet::Pluto) => Source::Body(Body::Pluto),
    }
}

/// Computes snapshots in one fixed frame.
///
/// Holds the frame configuration, its fingerprint and an ephemeris; every
/// call is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct SnapshotEngine<E = AnalyticEphemeris> {
    config: FrameConfig,
    fingerprint: String,
    ephemeris: E,
}

impl SnapshotEngine<AnalyticEphemeris> {
    /// Engine backed by the bundled analytic ephemeris.
    pub fn new(config: FrameConfig) -> Self {
        Self::with_ephemeris(config, AnalyticEphemeris::new())
    }
}

impl<E: Ephemeris> SnapshotEngine<E> {
    pub fn with_ephemeris(config: FrameConfig, ephemeris: E) -> Self {
        let fingerprint = config.fingerprint();
        Self {
            config,
            fingerprint,
            ephemeris,
        }
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Parse `timestamp` and compute its snapshot.
    pub fn compute(
        &self,
        timestamp: &str,
        options: &SnapshotOptions,
    ) -> Result<Snapshot, SnapshotError> {
        let orb = requested_orb(options)?;
        let instant = normalize_timestamp(timestamp, self.config.timezone())?;
        self.assemble(instant, orb)
    }

    /// Compute the snapshot for an already-resolved UTC instant.
    pub fn compute_at(
        &self,
        utc: DateTime<Utc>,
        options: &SnapshotOptions,
    ) -> Result<Snapshot, SnapshotError> {
        let orb = requested_orb(options)?;
        let instant = NormalizedInstant::from_utc(utc, self.config.timezone());
        self.assemble(instant, orb)
    }

    fn assemble(
        &self,
        instant: NormalizedInstant,
        orb: Option<f64>,
    ) -> Result<Snapshot, SnapshotError> {
        let _span = tracing::debug_span!("snapshot", utc = %instant.utc).entered();

        let jd_ut = instant.jd_ut();
        if !(WINDOW_START_JD_UT..WINDOW_END_JD_UT).contains(&jd_ut) {
            debug!(jd_ut, "instant outside the supported window");
            return Err(SnapshotError::UnsupportedEpoch { jd: jd_ut });
        }
        let delta_t = instant.delta_t_seconds();
        let jd_tt = instant.jd_tt();
        debug!(jd_ut, jd_tt, delta_t, local = %instant.local, "normalized instant");

        let t = jd_to_centuries(jd_tt);
        let ayanamsa = lahiri_ayanamsha_deg(t);
        debug!(ayanamsa, "lahiri ayanamsa");

        let threshold = self.config.defaults.stationary_speed_threshold_deg_per_day;
        let mut positions = Vec::with_capacity(SNAPSHOT_POINTS.len());
        for point in SNAPSHOT_POINTS {
            let tropical = self.tropical(point, jd_tt)?;
            let position = body_position(point, &tropical, ayanamsa, threshold);
            trace!(
                body = point.english_name(),
                longitude = position.longitude_deg,
                speed = position.speed_deg_per_day,
                "sidereal position"
            );
            positions.push(position);
        }
        debug!(count = positions.len(), "positions computed");

        let placements = positions.iter().map(placement).collect();
        let lagna = self.lagna(jd_ut, t, ayanamsa);

        // Both are always present: the order starts with them.
        let sun = positions[0].longitude_deg;
        let moon = positions[1].longitude_deg;
        let panchang = compute_panchang(sun, moon, instant.local_midnight_jd());
        debug!(
            tithi = panchang.tithi.number,
            nakshatra = panchang.nakshatra.number,
            yoga = panchang.yoga.number,
            karana = panchang.karana.number,
            vara = panchang.vara.weekday,
            "panchang"
        );

        let aspects = match orb {
            Some(orb) => {
                let longitudes: Vec<(ChartPoint, f64)> = positions
                    .iter()
                    .map(|p| (p.body, p.longitude_deg))
                    .collect();
                let found = aspects_within_orb(&longitudes, orb)?;
                debug!(orb, count = found.len(), "aspects");
                Some(found)
            }
            None => None,
        };

        let loc = &self.config.location;
        Ok(Snapshot {
            meta: SnapshotMeta {
                utc: instant.utc,
                local: instant.local.with_timezone(&instant.local.offset().fix()),
                timezone: loc.timezone.name(),
                location: loc.clone(),
                system: SystemInfo {
                    zodiac: self.config.zodiac_system,
                    ayanamsa: self.config.ayanamsa,
                    node: self.config.node_type,
                },
                ayanamsa_deg: ayanamsa,
                jd_ut,
                jd_tt,
                delta_t_seconds: delta_t,
                config_fingerprint: self.fingerprint.clone(),
            },
            positions,
            placements,
            lagna,
            panchang,
            aspects,
        })
    }

    fn tropical(&self, point: ChartPoint, jd_tt: f64) -> Result<TropicalPosition, SnapshotError> {
        let pos = match source(point) {
            Source::Body(body) => self.ephemeris.body_position(body, jd_tt)?,
            Source::Node(node) => self.ephemeris.node_position(node, jd_tt)?,
        };
        Ok(pos)
    }

    fn lagna(&self, jd_ut: f64, t: f64, ayanamsa: f64) -> LagnaPosition {
        let loc = &self.config.location;
        let lst = local_sidereal_time_deg(gmst_deg(jd_ut), loc.longitude_deg);
        let tropical = lagna_longitude_deg(lst, loc.latitude_deg, mean_obliquity_deg(t));
        let longitude = sidereal_longitude(tropical, ayanamsa);
        let d9 = navamsa_from_longitude(longitude);
        let nak = nakshatra_from_longitude(longitude);
        LagnaPosition {
            lst_deg: lst,
            tropical_longitude_deg: tropical,
            longitude_deg: longitude,
            rashi: d9.rashi,
            sign: d9.rashi.number(),
            degrees_in_sign: d9.degrees_in_rashi,
            d9_rashi: d9.navamsa,
            d9_sign: d9.navamsa.number(),
            nakshatra: nak.nakshatra,
            pada: nak.pada,
        }
    }
}

/// Validate the orb up front so a bad request does no ephemeris work.
fn requested_orb(options: &SnapshotOptions) -> Result<Option<f64>, SnapshotError> {
    if !options.include_aspects {
        return Ok(None);
    }
    let orb = options.orb.ok_or(SnapshotError::InvalidOrb { orb: None })?;
    Ok(Some(validate_orb(orb)?))
}

fn body_position(
    point: ChartPoint,
    tropical: &TropicalPosition,
    ayanamsa: f64,
    stationary_threshold: f64,
) -> BodyPosition {
    let longitude = sidereal_longitude(tropical.longitude_deg, ayanamsa);
    let d1 = navamsa_from_longitude(longitude);
    let nak = nakshatra_from_longitude(longitude);
    let speed = tropical.speed_deg_per_day;
    BodyPosition {
        body: point,
        tropical_longitude_deg: tropical.longitude_deg,
        longitude_deg: longitude,
        latitude_deg: tropical.latitude_deg,
        speed_deg_per_day: speed,
        retrograde: speed < 0.0,
        stationary: speed.abs() < stationary_threshold,
        rashi: d1.rashi,
        sign: d1.rashi.number(),
        degrees_in_sign: d1.degrees_in_rashi,
        nakshatra: nak.nakshatra,
        pada: nak.pada,
    }
}

fn placement(pos: &BodyPosition) -> DivisionalPlacement {
    let d9 = navamsa_from_longitude(pos.longitude_deg);
    DivisionalPlacement {
        body: pos.body,
        d1_rashi: d9.rashi,
        d1_sign: d9.rashi.number(),
        d1_degrees_in_sign: d9.degrees_in_rashi,
        d9_rashi: d9.navamsa,
        d9_sign: d9.navamsa.number(),
        vargottama: d9.vargottama,
    }
}
