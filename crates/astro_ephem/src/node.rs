//! Mean lunar nodes (Rahu/Ketu).
//!
//! The mean ascending node is the fifth Delaunay argument, Omega, which is
//! already referred to the mean equinox of date. The descending node is
//! always diametrically opposite.

use astro_frames::{delaunay_arguments, normalize_360};

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarNode {
    /// Ascending node (Rahu / North Node).
    Rahu,
    /// Descending node (Ketu / South Node). Always Rahu + 180 deg.
    Ketu,
}

pub const ALL_NODES: [LunarNode; 2] = [LunarNode::Rahu, LunarNode::Ketu];

impl LunarNode {
    pub const fn all() -> &'static [LunarNode] {
        &ALL_NODES
    }
}

/// Mean Rahu longitude in degrees [0, 360); `t` in Julian centuries of TT.
pub fn mean_rahu_deg(t: f64) -> f64 {
    delaunay_arguments(t).omega
}

/// Mean Ketu longitude in degrees [0, 360).
pub fn mean_ketu_deg(t: f64) -> f64 {
    ketu_from_rahu(mean_rahu_deg(t))
}

/// Descending node opposite a given ascending node longitude.
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_360(rahu_deg + 180.0)
}

/// Mean node longitude for either node.
pub fn mean_node_deg(node: LunarNode, t: f64) -> f64 {
    match node {
        LunarNode::Rahu => mean_rahu_deg(t),
        LunarNode::Ketu => mean_ketu_deg(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rahu_at_j2000() {
        assert!((mean_rahu_deg(0.0) - 125.0446).abs() < 0.001);
    }

    #[test]
    fn ketu_opposite() {
        for t in [-2.0, -0.5, 0.0, 0.26, 0.5] {
            let diff = (mean_ketu_deg(t) - mean_rahu_deg(t)).rem_euclid(360.0);
            assert!((diff - 180.0).abs() < 1e-9, "diff = {diff}");
        }
    }

    #[test]
    fn retrograde_period() {
        // The node completes one retrograde circuit in ~18.6 years.
        let a = mean_rahu_deg(0.0);
        let b = mean_rahu_deg(0.18613);
        let diff = (b - a + 540.0).rem_euclid(360.0) - 180.0;
        assert!(diff.abs() < 0.1, "diff = {diff}");
    }

    #[test]
    fn all_nodes() {
        assert_eq!(LunarNode::all().len(), 2);
        assert_eq!(mean_node_deg(LunarNode::Rahu, 0.1), mean_rahu_deg(0.1));
    }
}
