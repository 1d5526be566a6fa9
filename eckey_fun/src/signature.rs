use crate::der;
use secp256kfun::{
    Scalar,
    marker::{NonZero, Public},
};

/// The largest DER encoded secp256k1 signature: two 33-byte integers with
/// their tags and lengths inside a sequence.
pub const MAX_SIGNATURE_SIZE: usize = 72;

/// A DER encoded ECDSA signature.
///
/// The bytes live in a [`MAX_SIGNATURE_SIZE`] buffer and only the first
/// [`len`](Self::len) of them are the signature. Signatures produced by
/// [`Context::sign`] are strict DER; one built with [`from_slice`] can hold
/// anything up to 72 bytes and is only checked when verified.
///
/// [`Context::sign`]: crate::Context::sign
/// [`from_slice`]: Self::from_slice
#[derive(Clone, Copy)]
pub struct Signature {
    bytes: [u8; MAX_SIGNATURE_SIZE],
    len: usize,
}

impl Signature {
    pub(crate) fn from_parts(bytes: [u8; MAX_SIGNATURE_SIZE], len: usize) -> Self {
        debug_assert!(len <= MAX_SIGNATURE_SIZE);
        Signature { bytes, len }
    }

    /// Copies up to [`MAX_SIGNATURE_SIZE`] bytes without checking the encoding.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() > MAX_SIGNATURE_SIZE {
            return None;
        }
        let mut bytes = [0u8; MAX_SIGNATURE_SIZE];
        bytes[..slice.len()].copy_from_slice(slice);
        Some(Signature::from_parts(bytes, slice.len()))
    }

    /// Builds the DER signature for a 64-byte `r || s` compact signature.
    /// Returns `None` if `r` or `s` is zero or not less than the curve order.
    pub fn from_compact(bytes: [u8; 64]) -> Option<Self> {
        let r = Scalar::<Public, NonZero>::from_slice(&bytes[..32])?;
        let s = Scalar::<Public, NonZero>::from_slice(&bytes[32..])?;
        Some(der::encode(&r, &s))
    }

    /// The 64-byte `r || s` form. `None` if this isn't a strict DER signature.
    pub fn to_compact(&self) -> Option<[u8; 64]> {
        let (r, s) = self.as_tuple()?;
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&r.to_bytes());
        bytes[32..].copy_from_slice(&s.to_bytes());
        Some(bytes)
    }

    /// Decodes `(r, s)`. `None` if this isn't a strict DER signature.
    pub fn as_tuple(&self) -> Option<(Scalar<Public, NonZero>, Scalar<Public, NonZero>)> {
        der::decode(self.as_bytes())
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Length of the encoding.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the signature holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Signature {}

impl core::hash::Hash for Signature {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl_display_debug_serialize!(Signature);
impl_fromstr_deserialize!(name => "DER encoded secp256k1 ECDSA signature", max_len => MAX_SIGNATURE_SIZE, Signature);
