//! Uniform random index drawing.

use rand::{CryptoRng, Rng};

use crate::error::Error;

/// Handle on the system CSPRNG used for every draw in a run.
pub fn csprng() -> impl Rng + CryptoRng {
    rand::rng()
}

/// Draw a uniform integer in `[0, bound)`.
///
/// `random_range` samples by widening multiply with rejection, so the
/// result carries no modulo bias. An empty range is a broken invariant:
/// valid configurations always produce a non-empty keyset, word count,
/// or length span.
pub fn uniform(rng: &mut impl Rng, bound: usize) -> Result<usize, Error> {
    if bound == 0 {
        return Err(Error::Internal("empty random range"));
    }
    Ok(rng.random_range(0..bound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn uniform_rejects_empty_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(uniform(&mut rng, 0), Err(Error::Internal("empty random range")));
    }

    #[test]
    fn uniform_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        for bound in [1, 2, 3, 26, 94, 114, 1024] {
            for _ in 0..200 {
                let n = uniform(&mut rng, bound).unwrap();
                assert!(n < bound);
            }
        }
    }

    #[test]
    fn uniform_covers_small_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[uniform(&mut rng, 5).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
