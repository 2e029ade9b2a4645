//! Pure numeric helpers shared by elements and effects

use rand::Rng;

/// Random float in `[min, max)`. Degenerate ranges return `min`.
pub fn random_between(min: f32, max: f32) -> f32 {
    if min >= max {
        return min;
    }
    rand::thread_rng().gen_range(min..max)
}

/// Quadratic ease-in-out over `t` in [0, 1]
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_between_stays_in_range() {
        for _ in 0..100 {
            let v = random_between(2.0, 6.0);
            assert!((2.0..6.0).contains(&v));
        }
    }

    #[test]
    fn random_between_degenerate_range() {
        assert_eq!(random_between(3.0, 3.0), 3.0);
        assert_eq!(random_between(5.0, 1.0), 5.0);
    }

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out_quad(1.0) - 1.0).abs() < 1e-6);
    }
}
