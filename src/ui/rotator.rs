//! Logo rotation

use rand::{rngs::SmallRng, Rng, RngCore, SeedableRng};

use crate::resources::{ImageId, LogoSet};

/// Number of ticks between logo changes
pub const ROTATION_PERIOD: u8 = 15;

/// Picks a random logo every [`ROTATION_PERIOD`] ticks
///
/// The counter starts at the period so the very first [`advance`] selects a
/// logo and the screen never comes up blank. After that a logo is selected
/// on every fifteenth call. Repeats, including the logo already shown, are
/// allowed.
///
/// [`advance`]: LogoRotator::advance
pub struct LogoRotator<R = SmallRng> {
    logos: LogoSet,
    /// Ticks since the last selection, in `0..=ROTATION_PERIOD`
    counter: u8,
    current: Option<usize>,
    rng: R,
}

impl LogoRotator<SmallRng> {
    /// Rotator driven by a small non-cryptographic generator
    pub fn seeded(logos: LogoSet, seed: u64) -> Self {
        Self::new(logos, SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> LogoRotator<R> {
    pub fn new(logos: LogoSet, rng: R) -> Self {
        Self {
            logos,
            counter: ROTATION_PERIOD,
            current: None,
            rng,
        }
    }

    /// Count one tick. Returns the newly selected logo, if any.
    ///
    /// The counter is incremented before it is compared, so selections land
    /// on calls 0, 15, 30 rather than every sixteenth call.
    pub fn advance(&mut self) -> Option<ImageId> {
        if self.counter < ROTATION_PERIOD {
            self.counter += 1;
        }
        if self.counter < ROTATION_PERIOD {
            return None;
        }

        self.counter = 0;
        let index = self.rng.gen_range(0..self.logos.len());
        self.current = Some(index);
        defmt_or_log::debug!("Selected logo {}", index);
        self.logos.get(index)
    }

    /// Force the next [`advance`](Self::advance) to select a logo again
    pub fn rewind(&mut self) {
        self.counter = ROTATION_PERIOD;
    }

    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// Index of the selected logo, `None` before the first selection
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<ImageId> {
        self.current.and_then(|index| self.logos.get(index))
    }

    pub fn logos(&self) -> LogoSet {
        self.logos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::LOGOS;

    #[test]
    fn first_advance_always_selects() {
        for seed in 0..32 {
            let mut rotator = LogoRotator::seeded(LOGOS, seed);
            assert_eq!(rotator.current(), None);
            assert!(rotator.advance().is_some());
            assert_eq!(rotator.counter(), 0);
        }
    }

    #[test]
    fn selects_exactly_every_period() {
        let mut rotator = LogoRotator::seeded(LOGOS, 7);
        for n in 0..200u32 {
            let selected = rotator.advance();
            assert_eq!(
                selected.is_some(),
                n % ROTATION_PERIOD as u32 == 0,
                "tick {}",
                n
            );
            assert!(rotator.counter() <= ROTATION_PERIOD);
        }
    }

    #[test]
    fn image_is_unchanged_between_selections() {
        let mut rotator = LogoRotator::seeded(LOGOS, 3);
        let first = rotator.advance();
        for _ in 1..ROTATION_PERIOD {
            assert_eq!(rotator.advance(), None);
            assert_eq!(rotator.current(), first);
        }
    }

    #[test]
    fn index_stays_in_range_and_covers_the_set() {
        let mut rotator = LogoRotator::seeded(LOGOS, 0xbeef);
        let mut seen = [false; 6];
        for _ in 0..(ROTATION_PERIOD as usize * 600) {
            if rotator.advance().is_some() {
                let index = rotator.current_index().unwrap();
                assert!(index < LOGOS.len());
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|s| *s), "{:?}", seen);
    }

    #[test]
    fn rewind_forces_a_selection() {
        let mut rotator = LogoRotator::seeded(LOGOS, 12);
        rotator.advance();
        rotator.advance();
        assert_eq!(rotator.counter(), 1);

        rotator.rewind();
        assert!(rotator.advance().is_some());
        assert_eq!(rotator.counter(), 0);
    }

    #[test]
    fn selection_matches_returned_image() {
        let mut rotator = LogoRotator::seeded(LOGOS, 11);
        let image = rotator.advance().unwrap();
        assert_eq!(LOGOS.get(rotator.current_index().unwrap()), Some(image));
    }
}
