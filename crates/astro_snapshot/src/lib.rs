//! Deterministic astrological snapshots.
//!
//! A snapshot bundles, for one instant in the fixed frame:
//! - sidereal positions of the nine grahas and of Uranus, Neptune, Pluto
//! - their D1 (rasi) and D9 (navamsa) placements
//! - the lagna at the frame location
//! - the panchang (tithi, nakshatra, yoga, karana, vara)
//! - optionally, the aspects between those bodies within an orb
//!
//! Identical input always yields an identical [`Snapshot`].

pub mod engine;
pub mod error;
pub mod panchang;
pub mod types;

pub use engine::{SNAPSHOT_POINTS, SnapshotEngine, WINDOW_END_JD_UT, WINDOW_START_JD_UT};
pub use error::{ErrorKind, SnapshotError};
pub use panchang::compute_panchang;
pub use types::{
    BodyPosition, DivisionalPlacement, KaranaEntry, LagnaPosition, NakshatraEntry, Panchang,
    Snapshot, SnapshotMeta, SnapshotOptions, SystemInfo, TithiEntry, VaraEntry, YogaEntry,
};

use astro_config::FrameConfig;

/// Compute the snapshot for `timestamp` in the frame `config`.
///
/// Convenience over [`SnapshotEngine::new`] followed by
/// [`SnapshotEngine::compute`].
pub fn compute_snapshot(
    config: &FrameConfig,
    timestamp: &str,
    options: &SnapshotOptions,
) -> Result<Snapshot, SnapshotError> {
    SnapshotEngine::new(config.clone()).compute(timestamp, options)
}

#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn check() {
        assert_send_sync::<SnapshotEngine>();
        assert_send_sync::<Snapshot>();
    }
};
