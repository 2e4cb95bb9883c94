//! Mean obliquity of the ecliptic (IAU 2006).

/// Mean obliquity of date in degrees; `t` in Julian centuries of TT.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let tail = 0.00200340 + t * (-0.000000576 + t * -0.0000000434);
    let arcsec = 84_381.406 + t * (-46.836769 + t * (-0.0001831 + t * tail));
    arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert!((mean_obliquity_deg(0.0) - 23.4392794).abs() < 1e-6);
        assert_eq!(mean_obliquity_deg(0.0), 84_381.406 / 3600.0);
    }

    #[test]
    fn decreasing() {
        assert!(mean_obliquity_deg(0.5) < mean_obliquity_deg(0.0));
        assert!(mean_obliquity_deg(-2.0) > mean_obliquity_deg(0.0));
    }
}
