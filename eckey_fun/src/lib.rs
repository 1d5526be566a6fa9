//! secp256k1 key primitives: secret and public key validation, public key
//! derivation, DER-encoded ECDSA with caller supplied nonces and the tweak
//! arithmetic used to derive related keys.
//!
//! All curve arithmetic is done by [`secp256kfun`] (re-exported as [`fun`]).
//! The types in this crate are byte containers: they hold whatever bytes they
//! were given and validity is something you check, not something the type
//! guarantees. Every operation either returns the result or tells you it
//! failed with `None`/`false`.
//!
//! # Examples
//!
//! ```
//! use eckey_fun::{Context, Secret};
//!
//! let ctx = Context::new();
//! let secret = Secret::from_bytes([0x11; 32]);
//! let nonce = Secret::from_bytes([0x22; 32]);
//! let hash = [0x33; 32];
//!
//! let public_key = ctx.derive_public_key(&secret, true).unwrap();
//! let signature = ctx.sign(&secret, &hash, &nonce).unwrap();
//! assert!(ctx.verify_signature(&public_key, &hash, signature.as_bytes()));
//! ```
#![no_std]
#![allow(non_snake_case)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(feature = "alloc", not(feature = "std")))]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

pub use secp256kfun as fun;

#[macro_use]
mod macros;

mod context;
pub mod der;
mod ec_point;
mod ecdsa;
mod keys;
mod secret;
mod signature;
mod tweak;

#[cfg(feature = "libsecp_compat_0_30")]
mod libsecp_compat;

pub use context::Context;
#[cfg(feature = "std")]
pub use context::ensure_ready;
pub use ec_point::EcPoint;
pub use secret::Secret;
pub use signature::{MAX_SIGNATURE_SIZE, Signature};

/// A 32-byte message digest. This crate never hashes anything itself.
pub type Hash = [u8; 32];

#[cfg(feature = "std")]
mod global {
    //! The same operations as [`Context`](crate::Context) but run through the
    //! process-wide context returned by [`ensure_ready`](crate::ensure_ready).
    use crate::{EcPoint, Hash, Secret, Signature, ensure_ready};

    /// Derives the public key of `secret`. See [`Context::derive_public_key`].
    ///
    /// [`Context::derive_public_key`]: crate::Context::derive_public_key
    pub fn derive_public_key(secret: &Secret, compressed: bool) -> Option<EcPoint> {
        ensure_ready().derive_public_key(secret, compressed)
    }

    /// See [`Context::validate_public_key`](crate::Context::validate_public_key).
    pub fn validate_public_key(point: &EcPoint) -> bool {
        ensure_ready().validate_public_key(point)
    }

    /// See [`Context::validate_secret`](crate::Context::validate_secret).
    pub fn validate_secret(secret: &Secret) -> bool {
        ensure_ready().validate_secret(secret)
    }

    /// See [`Context::sign`](crate::Context::sign).
    pub fn sign(secret: &Secret, hash: &Hash, nonce: &Secret) -> Option<Signature> {
        ensure_ready().sign(secret, hash, nonce)
    }

    /// See [`Context::verify_signature`](crate::Context::verify_signature).
    pub fn verify_signature(public_key: &EcPoint, hash: &Hash, signature: &[u8]) -> bool {
        ensure_ready().verify_signature(public_key, hash, signature)
    }

    /// See [`Context::add_points`](crate::Context::add_points).
    pub fn add_points(a: &EcPoint, b: &EcPoint) -> Option<EcPoint> {
        ensure_ready().add_points(a, b)
    }

    /// See [`Context::tweak_add_point`](crate::Context::tweak_add_point).
    pub fn tweak_add_point(point: &EcPoint, tweak: &Secret) -> Option<EcPoint> {
        ensure_ready().tweak_add_point(point, tweak)
    }

    /// See [`Context::tweak_mul_point`](crate::Context::tweak_mul_point).
    pub fn tweak_mul_point(point: &EcPoint, tweak: &Secret) -> Option<EcPoint> {
        ensure_ready().tweak_mul_point(point, tweak)
    }

    /// See [`Context::add_secrets`](crate::Context::add_secrets).
    pub fn add_secrets(a: &Secret, b: &Secret) -> Option<Secret> {
        ensure_ready().add_secrets(a, b)
    }

    /// See [`Context::mul_secrets`](crate::Context::mul_secrets).
    pub fn mul_secrets(a: &Secret, b: &Secret) -> Option<Secret> {
        ensure_ready().mul_secrets(a, b)
    }
}

#[cfg(feature = "std")]
pub use global::*;
