//! Point and scalar arithmetic used to derive related keys.
//!
//! The point operations mirror the secret operations so that deriving then
//! tweaking a public key gives the same key as tweaking then deriving:
//!
//! ```text
//! tweak_add_point(x*G, t) == (x + t)*G
//! tweak_mul_point(x*G, t) == (x * t)*G
//! ```
//!
//! Any operation whose result would be the point at infinity or the zero
//! scalar fails.
use crate::{Context, EcPoint, Secret};
use secp256kfun::{G, g, s};

impl Context {
    /// Adds two points. The sum is always in compressed form, whatever the
    /// forms of `a` and `b`.
    ///
    /// Returns `None` if either input is invalid or if `b` is the negation of
    /// `a`.
    pub fn add_points(&self, a: &EcPoint, b: &EcPoint) -> Option<EcPoint> {
        let A = a.decode()?;
        let B = b.decode()?;
        let sum = g!(A + B).normalize().non_zero()?;
        Some(EcPoint::encode(&sum, true))
    }

    /// Computes `point + tweak * G`, keeping the form of `point`.
    ///
    /// `tweak` may be zero (leaving the point unchanged) but must be less than
    /// the curve order. Returns `None` if the point is invalid or the result is
    /// the point at infinity.
    pub fn tweak_add_point(&self, point: &EcPoint, tweak: &Secret) -> Option<EcPoint> {
        let P = point.decode()?;
        let t = tweak.to_scalar_zero()?;
        let tweaked = g!(P + t * G).normalize().non_zero()?;
        Some(EcPoint::encode(&tweaked, point.is_compressed()))
    }

    /// Computes `tweak * point`, keeping the form of `point`.
    ///
    /// Returns `None` if the point is invalid or `tweak` is zero or not less
    /// than the curve order.
    pub fn tweak_mul_point(&self, point: &EcPoint, tweak: &Secret) -> Option<EcPoint> {
        let P = point.decode()?;
        let t = tweak.to_scalar()?;
        let tweaked = g!(t * P).normalize();
        Some(EcPoint::encode(&tweaked, point.is_compressed()))
    }

    /// Computes `a + b` mod the curve order.
    ///
    /// `a` must be a valid secret key. `b` may be zero but must be less than
    /// the curve order. Returns `None` if the sum is zero.
    pub fn add_secrets(&self, a: &Secret, b: &Secret) -> Option<Secret> {
        let x = a.to_scalar()?;
        let t = b.to_scalar_zero()?;
        let sum = s!(x + t).non_zero()?;
        Some(Secret::from(sum))
    }

    /// Computes `a * b` mod the curve order. Both must be valid secret keys.
    pub fn mul_secrets(&self, a: &Secret, b: &Secret) -> Option<Secret> {
        let x = a.to_scalar()?;
        let t = b.to_scalar()?;
        Some(Secret::from(s!(x * t)))
    }
}
