//! Build ID generation

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of generated build IDs
pub const BUILD_ID_LEN: usize = 12;

/// Generates a [`BUILD_ID_LEN`]-character ID from `[A-Za-z0-9]`
pub fn generate_build_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(BUILD_ID_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_id_length() {
        let id = generate_build_id(&mut rand::thread_rng());
        assert_eq!(id.len(), BUILD_ID_LEN);
    }

    #[test]
    fn test_generated_ids_differ() {
        let mut rng = rand::thread_rng();
        let first = generate_build_id(&mut rng);
        let second = generate_build_id(&mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_same_seed_same_id() {
        let a = generate_build_id(&mut StdRng::seed_from_u64(7));
        let b = generate_build_id(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_generated_id_is_alphanumeric(seed in any::<u64>()) {
            let id = generate_build_id(&mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(id.chars().count(), BUILD_ID_LEN);
            prop_assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
