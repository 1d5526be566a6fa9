//! The curve context every operation runs through.
//!
//! Creating a [`Context`] starts the curve engine: before handing the context
//! out it runs a power-up self test (a known answer test on the generator
//! encoding and a sign/verify pairwise consistency check). A context that
//! fails its self test is never handed out. Dropping a started context is its
//! teardown.
//!
//! With the `std` feature there is also a process-wide context behind
//! [`ensure_ready`], started at most once no matter how many threads race to
//! use it first.
use crate::{EcPoint, Hash, Secret};

const GENERATOR_X: [u8; 32] = [
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
    0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
];

const GENERATOR_Y: [u8; 32] = [
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08, 0xa8,
    0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10, 0xd4, 0xb8,
];

const SELF_TEST_SECRET: [u8; 32] = [0x01; 32];
const SELF_TEST_NONCE: [u8; 32] = [0x02; 32];
const SELF_TEST_HASH: Hash = [0x03; 32];

/// Handle to the secp256k1 engine.
///
/// All key, signature and tweak operations are methods on `Context`. It holds
/// no secrets and no interior mutability so a single context can be shared
/// between threads.
///
/// # Examples
///
/// ```
/// use eckey_fun::Context;
/// let ctx = Context::new();
/// let strict = Context::new().enforce_low_s();
/// ```
#[derive(Debug)]
pub struct Context {
    pub(crate) enforce_low_s: bool,
    started: bool,
}

impl Context {
    /// Starts a context, running the power-up self test.
    ///
    /// # Panics
    ///
    /// If the self test fails. That means the arithmetic underneath is broken
    /// and no result it produced could be trusted.
    pub fn new() -> Self {
        let mut context = Context {
            enforce_low_s: false,
            started: false,
        };
        if let Err(failure) = context.self_test() {
            tracing::error!(failure, "secp256k1 power-up self test failed");
            panic!("secp256k1 power-up self test failed: {}", failure);
        }
        context.started = true;
        tracing::debug!("secp256k1 context started");
        context
    }

    /// Makes [`verify_signature`] reject signatures whose `s` is greater than
    /// half the curve order (see [BIP-146]). Signatures produced by
    /// [`sign`] always have a low `s`.
    ///
    /// [`verify_signature`]: Self::verify_signature
    /// [`sign`]: Self::sign
    /// [BIP-146]: https://github.com/bitcoin/bips/blob/master/bip-0146.mediawiki#low_s
    pub fn enforce_low_s(mut self) -> Self {
        self.enforce_low_s = true;
        self
    }

    fn self_test(&self) -> Result<(), &'static str> {
        let mut one = [0u8; 32];
        one[31] = 1;
        let one = Secret::from_bytes(one);

        match self.derive_public_key(&one, true) {
            Some(EcPoint::Compressed(bytes))
                if bytes[0] == 0x02 && bytes[1..] == GENERATOR_X[..] => {}
            _ => return Err("1*G does not have the compressed generator encoding"),
        }

        match self.derive_public_key(&one, false) {
            Some(EcPoint::Uncompressed(bytes))
                if bytes[0] == 0x04
                    && bytes[1..33] == GENERATOR_X[..]
                    && bytes[33..] == GENERATOR_Y[..] => {}
            _ => return Err("1*G does not have the uncompressed generator encoding"),
        }

        let secret = Secret::from_bytes(SELF_TEST_SECRET);
        let nonce = Secret::from_bytes(SELF_TEST_NONCE);
        let public_key = self
            .derive_public_key(&secret, true)
            .ok_or("could not derive the self test public key")?;
        let signature = self
            .sign(&secret, &SELF_TEST_HASH, &nonce)
            .ok_or("could not sign the self test hash")?;

        if !self.verify_signature(&public_key, &SELF_TEST_HASH, signature.as_bytes()) {
            return Err("self test signature did not verify");
        }

        let mut other_hash = SELF_TEST_HASH;
        other_hash[0] ^= 0x01;
        if self.verify_signature(&public_key, &other_hash, signature.as_bytes()) {
            return Err("self test signature verified against the wrong hash");
        }

        Ok(())
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        if self.started {
            tracing::debug!("secp256k1 context stopped");
        }
    }
}

#[cfg(feature = "std")]
static GLOBAL_CONTEXT: std::sync::OnceLock<Context> = std::sync::OnceLock::new();

/// Returns the process-wide context, starting it on the first call.
///
/// Starting happens exactly once even if many threads call this at the same
/// time; every later call just returns the running context. The global
/// context is never stopped and never restarted.
#[cfg(feature = "std")]
pub fn ensure_ready() -> &'static Context {
    GLOBAL_CONTEXT.get_or_init(Context::new)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn self_test_passes() {
        let context = Context::new();
        assert!(context.started);
        assert!(!context.enforce_low_s);
        assert_eq!(context.self_test(), Ok(()));
    }

    #[test]
    fn enforce_low_s_keeps_context_started() {
        let context = Context::new().enforce_low_s();
        assert!(context.started);
        assert!(context.enforce_low_s);
    }

    #[cfg(feature = "std")]
    #[test]
    fn ensure_ready_is_idempotent_across_threads() {
        let addresses = std::thread::scope(|scope| {
            let handles = (0..8)
                .map(|_| scope.spawn(|| ensure_ready() as *const Context as usize))
                .collect::<std::vec::Vec<_>>();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect::<std::vec::Vec<_>>()
        });
        let first = addresses[0];
        assert!(addresses.iter().all(|address| *address == first));
        assert_eq!(ensure_ready() as *const Context as usize, first);
        assert!(ensure_ready().started);
    }
}
