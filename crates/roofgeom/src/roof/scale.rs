use tracing::warn;

use crate::cfg::MIN_REFERENCE_PX;
use crate::geom2::{distance, Point};

/// Meters per pixel from a reference segment `a–b` of known length.
///
/// Returns `0.0` when the segment is shorter than one pixel; callers treat
/// that as an invalid scale.
pub fn derive_scale(a: Point, b: Point, real_length_m: f64) -> f64 {
    let px = distance(a, b);
    if px < MIN_REFERENCE_PX {
        warn!(px, "reference segment shorter than one pixel");
        return 0.0;
    }
    real_length_m / px
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn scale_from_vertical_reference() {
        let s = derive_scale(Point::new(0.0, 0.0), Point::new(0.0, 10.0), 5.0);
        assert!((s - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sub_pixel_reference_is_invalid() {
        assert_eq!(derive_scale(Point::new(0.0, 0.0), Point::new(0.0, 0.5), 5.0), 0.0);
        assert_eq!(derive_scale(Point::new(3.0, 3.0), Point::new(3.0, 3.0), 5.0), 0.0);
        // Exactly one pixel is accepted.
        assert_eq!(derive_scale(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 5.0), 5.0);
    }

    proptest! {
        #[test]
        fn scale_positive_iff_reference_long_enough(
            ax in -500.0f64..500.0, ay in -500.0f64..500.0,
            dx in -5.0f64..5.0, dy in -5.0f64..5.0,
            len in 0.01f64..1000.0,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(ax + dx, ay + dy);
            let s = derive_scale(a, b, len);
            if distance(a, b) >= 1.0 {
                prop_assert!(s > 0.0);
            } else {
                prop_assert_eq!(s, 0.0);
            }
        }
    }
}
