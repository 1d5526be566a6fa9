//! ECDSA over a 32-byte hash with a nonce chosen by the caller.
//!
//! The nonce is taken as given. Reusing a nonce with the same secret key for
//! two different hashes reveals the secret key, so callers must derive it
//! carefully (e.g. [RFC 6979]).
//!
//! [RFC 6979]: https://datatracker.ietf.org/doc/html/rfc6979
use crate::{Context, EcPoint, Hash, Secret, Signature, der};
use secp256kfun::{
    G, Scalar, g,
    marker::{Public, Zero},
    s,
};

impl Context {
    /// Signs `hash` with `secret` using `nonce` as the ephemeral key.
    ///
    /// The hash is read as a big-endian integer reduced modulo the curve
    /// order. The result is strict DER with a low `s`.
    ///
    /// Returns `None` if `secret` or `nonce` is zero or not less than the curve
    /// order, or if the nonce happens to produce `r = 0` or `s = 0`.
    pub fn sign(&self, secret: &Secret, hash: &Hash, nonce: &Secret) -> Option<Signature> {
        let x = secret.to_scalar()?;
        let k = nonce.to_scalar()?;
        let m = Scalar::<Public, Zero>::from_bytes_mod_order(*hash);

        let R = g!(k * G).normalize();
        // r is the x-coordinate of R reduced mod the curve order
        let R_x = Scalar::<Public, Zero>::from_bytes_mod_order(R.to_xonly_bytes()).non_zero()?;

        let k_inv = k.invert();
        let mut s = s!(k_inv * (m + R_x * x)).non_zero()?;
        // (r, s) and (r, -s) are both valid so only the low one is ever produced
        s.conditional_negate(s.is_high());

        Some(der::encode(&R_x, &s.public()))
    }

    /// Verifies a DER encoded signature over `hash` against `public_key`.
    ///
    /// Returns `false` (never panics) for an invalid public key, a signature
    /// that isn't strict DER, `r` or `s` out of range, or a high `s` when
    /// [`enforce_low_s`](Self::enforce_low_s) is set.
    pub fn verify_signature(&self, public_key: &EcPoint, hash: &Hash, signature: &[u8]) -> bool {
        let Some(P) = public_key.decode() else {
            return false;
        };
        let Some((R_x, s)) = der::decode(signature) else {
            return false;
        };
        if s.is_high() && self.enforce_low_s {
            return false;
        }

        let m = Scalar::<Public, Zero>::from_bytes_mod_order(*hash);
        let s_inv = s.invert();

        g!((s_inv * m) * G + (s_inv * R_x) * P)
            .non_zero()
            .is_some_and(|implied_R| implied_R.x_eq_scalar(&R_x))
    }
}
