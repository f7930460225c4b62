// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

/// A process-wide RNG handle, consulted opportunistically by the signer.
///
/// `spec.md` §6/§9: "a query `is_initialized()` and a draw `fill(buf, n)`".
/// When unavailable, the signer substitutes empty randomness and relies on
/// the underlying scheme being deterministic.
pub trait CvcRng {
    fn is_initialized(&self) -> bool;
    fn fill(&mut self, buf: &mut [u8]);
}

/// Adapts any `rand_core` generator into a `CvcRng`. Always reports
/// initialized, since a caller who constructed one intends it to be used.
impl<T> CvcRng for T
where
    T: rand_core::RngCore + rand_core::CryptoRng,
{
    fn is_initialized(&self) -> bool {
        true
    }

    fn fill(&mut self, buf: &mut [u8]) {
        self.fill_bytes(buf);
    }
}

/// The "no RNG available" stub: `is_initialized` is always false, so the
/// adapter falls back to the scheme's deterministic path.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRng;

impl CvcRng for NoRng {
    fn is_initialized(&self) -> bool {
        false
    }

    fn fill(&mut self, _buf: &mut [u8]) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::SeedableRng;

    #[test]
    fn no_rng_is_never_initialized() {
        let mut rng = NoRng;
        assert!(!rng.is_initialized());
        let mut buf = [1u8; 4];
        rng.fill(&mut buf);
        assert_eq!(buf, [1u8; 4]);
    }

    #[test]
    fn any_rand_core_generator_is_usable() {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(42);
        assert!(CvcRng::is_initialized(&rng));
        let mut buf = [0u8; 32];
        rng.fill(&mut buf);
        assert_ne!(buf, [0u8; 32]);
    }
}
