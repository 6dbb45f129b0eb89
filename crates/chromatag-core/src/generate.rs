//! Synthetic catalog colors.
//!
//! Two sources: an even sweep of the 24-bit space from black to white, and
//! uniform random colors drawn from a caller-supplied RNG. Nothing here
//! touches global randomness, so a fixed seed always yields the same
//! catalog.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Rgb;

/// Largest packed 24-bit color (`#ffffff`).
const MAX_U24: u32 = 0xff_ffff;

/// The `index`-th of `total` colors evenly spaced from black to white.
///
/// ```text
/// value = floor(0xFFFFFF × index / (total − 1))
/// ```
///
/// `total <= 1` has no spacing and yields black; indexes past the end
/// clamp to white.
pub fn gradient(index: usize, total: usize) -> Rgb {
    if total <= 1 {
        tracing::debug!(total, "gradient with fewer than two steps");
        return Rgb::BLACK;
    }
    // u128 keeps `MAX_U24 × index` exact for any usize index.
    let last = (total - 1) as u128;
    let index = (index as u128).min(last);
    Rgb::from_u24((MAX_U24 as u128 * index / last) as u32)
}

/// Iterator over the `total` colors of [`gradient`].
#[derive(Debug, Clone)]
pub struct Gradient {
    next: usize,
    total: usize,
}

impl Gradient {
    pub fn new(total: usize) -> Self {
        Self { next: 0, total }
    }
}

impl Iterator for Gradient {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        if self.next >= self.total {
            return None;
        }
        let color = gradient(self.next, self.total);
        self.next += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Gradient {}

/// A color drawn uniformly from the 24-bit space.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::from_u24(rng.gen_range(0..=MAX_U24))
}

/// Reproducible RNG for [`random_color`].
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(gradient(0, 1000), Rgb::BLACK);
        assert_eq!(gradient(999, 1000), Rgb::WHITE);
        assert_eq!(gradient(5000, 1000), Rgb::WHITE);
    }

    #[test]
    fn test_gradient_midpoint_truncates() {
        // 0xFFFFFF / 2 = 0x7FFFFF.8 -> 0x7FFFFF
        assert_eq!(gradient(1, 3), Rgb::from_u24(0x7f_ffff));
    }

    #[test]
    fn test_gradient_huge_total_does_not_overflow() {
        assert_eq!(gradient(0, usize::MAX), Rgb::BLACK);
        assert_eq!(gradient(usize::MAX - 1, usize::MAX), Rgb::WHITE);
        assert_eq!(gradient(usize::MAX / 2, usize::MAX), Rgb::from_u24(0x7f_ffff));
        // One step short of the end still truncates below white.
        assert_eq!(gradient(usize::MAX - 2, usize::MAX), Rgb::from_u24(0xff_fffe));
    }

    #[test]
    fn test_gradient_degenerate_total() {
        assert_eq!(gradient(0, 0), Rgb::BLACK);
        assert_eq!(gradient(3, 1), Rgb::BLACK);
    }

    #[test]
    fn test_gradient_iterator_is_monotonic() {
        let colors: Vec<Rgb> = Gradient::new(64).collect();
        assert_eq!(colors.len(), 64);
        assert!(colors.windows(2).all(|w| w[0].to_u24() < w[1].to_u24()));
        assert_eq!(Gradient::new(10).len(), 10);
        assert_eq!(Gradient::new(0).next(), None);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a: Vec<Rgb> = {
            let mut rng = seeded_rng(42);
            (0..32).map(|_| random_color(&mut rng)).collect()
        };
        let b: Vec<Rgb> = {
            let mut rng = seeded_rng(42);
            (0..32).map(|_| random_color(&mut rng)).collect()
        };
        assert_eq!(a, b);

        let mut other = seeded_rng(43);
        let c: Vec<Rgb> = (0..32).map(|_| random_color(&mut other)).collect();
        assert_ne!(a, c);
    }
}
