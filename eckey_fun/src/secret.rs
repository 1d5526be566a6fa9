use secp256kfun::{
    Scalar,
    marker::{self, Zero},
};
use subtle::ConstantTimeEq;

/// A 32-byte big-endian secp256k1 scalar used as a secret key, a nonce or a tweak.
///
/// Any 32 bytes can be held in a `Secret`. Whether they are a usable secret
/// key (non-zero and less than the curve order) is checked by
/// [`Context::validate_secret`] and by every operation that consumes one.
///
/// [`Context::validate_secret`]: crate::Context::validate_secret
#[derive(Clone)]
pub struct Secret([u8; 32]);

impl Secret {
    /// Wraps 32 bytes without checking them.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Secret(bytes)
    }

    /// Wraps a 32-byte slice. Returns `None` only if the slice is the wrong length.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; 32] = slice.try_into().ok()?;
        Some(Secret(bytes))
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0[..]
    }

    /// The raw bytes as an array.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Decodes the bytes as a secret key scalar: `None` if they are zero or
    /// not less than the curve order.
    pub fn to_scalar(&self) -> Option<Scalar> {
        Scalar::from_bytes(self.0)
    }

    /// Decodes the bytes as a scalar that may be zero. `None` if they are not
    /// less than the curve order.
    pub(crate) fn to_scalar_zero(&self) -> Option<Scalar<marker::Secret, Zero>> {
        Scalar::from_bytes(self.0)
    }
}

impl<S, Z> From<Scalar<S, Z>> for Secret {
    fn from(scalar: Scalar<S, Z>) -> Self {
        Secret(scalar.to_bytes())
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for Secret {}

impl core::fmt::Debug for Secret {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("Secret(..)")
    }
}

impl_display_serialize!(Secret);
impl_fromstr_deserialize!(name => "32-byte secp256k1 secret", max_len => 32, Secret);
