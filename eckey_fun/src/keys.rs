use crate::{Context, EcPoint, Secret};
use secp256kfun::{G, g};

impl Context {
    /// Derives the public key `secret * G` in the requested encoding.
    ///
    /// Returns `None` if `secret` is zero or not less than the curve order.
    pub fn derive_public_key(&self, secret: &Secret, compressed: bool) -> Option<EcPoint> {
        let x = secret.to_scalar()?;
        let X = g!(x * G).normalize();
        let public_key = EcPoint::encode(&X, compressed);
        let expected_len = if compressed {
            EcPoint::COMPRESSED_SIZE
        } else {
            EcPoint::UNCOMPRESSED_SIZE
        };
        assert_eq!(public_key.len(), expected_len);
        Some(public_key)
    }

    /// Whether the bytes are a correctly encoded point on the curve.
    ///
    /// The point at infinity has no encoding so it is never valid.
    pub fn validate_public_key(&self, point: &EcPoint) -> bool {
        point.decode().is_some()
    }

    /// Whether the bytes are a usable secret key: non-zero and less than the
    /// curve order.
    pub fn validate_secret(&self, secret: &Secret) -> bool {
        secret.to_scalar().is_some()
    }
}
