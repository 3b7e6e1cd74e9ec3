//! Randomized Sample Generation

use crate::error::ValidationError;
use crate::sample::{FitnessSample, UserId};
use crate::validator::SampleRanges;
use chrono::{FixedOffset, SubsecRound, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Default offset for sample timestamps: Asia/Dubai, UTC+04:00 with no DST
pub const DEFAULT_UTC_OFFSET_SECONDS: i32 = 4 * 3600;

/// Generator of simulated fitness samples
pub struct SampleGenerator {
    rng: StdRng,
    ranges: SampleRanges,
    offset: FixedOffset,
}

impl SampleGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new(ranges: SampleRanges, utc_offset_seconds: i32) -> Result<Self, ValidationError> {
        Self::with_rng(StdRng::from_entropy(), ranges, utc_offset_seconds)
    }

    /// Create a reproducible generator
    pub fn with_seed(
        seed: u64,
        ranges: SampleRanges,
        utc_offset_seconds: i32,
    ) -> Result<Self, ValidationError> {
        Self::with_rng(StdRng::seed_from_u64(seed), ranges, utc_offset_seconds)
    }

    fn with_rng(
        rng: StdRng,
        ranges: SampleRanges,
        utc_offset_seconds: i32,
    ) -> Result<Self, ValidationError> {
        ranges.check()?;
        let offset = FixedOffset::east_opt(utc_offset_seconds)
            .ok_or(ValidationError::InvalidOffset(utc_offset_seconds))?;
        Ok(Self { rng, ranges, offset })
    }

    /// Pick a user id uniformly from the valid range
    pub fn random_user_id(&mut self) -> UserId {
        let (min, max) = self.ranges.user_id;
        UserId::new_unchecked(self.rng.gen_range(min..=max))
    }

    /// Generate a sample for `user_id` stamped with the current time
    pub fn generate(&mut self, user_id: UserId) -> FitnessSample {
        let (steps_min, steps_max) = self.ranges.steps;
        let (hr_min, hr_max) = self.ranges.heart_rate;

        let sample = FitnessSample {
            user_id,
            timestamp: Utc::now().with_timezone(&self.offset).trunc_subsecs(6),
            steps: self.rng.gen_range(steps_min..=steps_max),
            heart_rate: self.rng.gen_range(hr_min..=hr_max),
        };
        debug!(
            "Generated sample for user {}: {} steps, {} bpm",
            user_id, sample.steps, sample.heart_rate
        );
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validator;
    use proptest::prelude::*;

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = SampleGenerator::with_seed(42, SampleRanges::default(), 0).unwrap();
        let mut b = SampleGenerator::with_seed(42, SampleRanges::default(), 0).unwrap();

        for _ in 0..20 {
            let user = a.random_user_id();
            assert_eq!(user, b.random_user_id());
            let (sa, sb) = (a.generate(user), b.generate(user));
            assert_eq!((sa.steps, sa.heart_rate), (sb.steps, sb.heart_rate));
        }
    }

    #[test]
    fn test_timestamp_uses_configured_offset() {
        let mut generator =
            SampleGenerator::new(SampleRanges::default(), DEFAULT_UTC_OFFSET_SECONDS).unwrap();
        let user = generator.random_user_id();
        let sample = generator.generate(user);

        assert_eq!(sample.timestamp.offset().local_minus_utc(), 4 * 3600);
        assert!(sample.timestamp.to_rfc3339().ends_with("+04:00"));
    }

    #[test]
    fn test_rejects_bad_offset() {
        let result = SampleGenerator::new(SampleRanges::default(), 30 * 3600);
        assert!(matches!(result, Err(ValidationError::InvalidOffset(_))));
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let ranges = SampleRanges {
            heart_rate: (120, 60),
            ..SampleRanges::default()
        };
        assert!(SampleGenerator::new(ranges, 0).is_err());
    }

    proptest! {
        #[test]
        fn prop_generated_samples_in_range(seed in any::<u64>()) {
            let mut generator = SampleGenerator::with_seed(seed, SampleRanges::default(), 0).unwrap();
            let validator = Validator::default();

            let user = generator.random_user_id();
            prop_assert!((1..=10).contains(&user.get()));

            let sample = generator.generate(user);
            prop_assert!((1000..=10000).contains(&sample.steps));
            prop_assert!((60..=120).contains(&sample.heart_rate));
            prop_assert!(validator.validate_sample(&sample).valid);
        }
    }
}
