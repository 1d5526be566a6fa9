use secp256kfun::{
    Point,
    marker::{Normal, NonZero},
};

/// A public key in the encoding specified by [_Standards for Efficient Cryptography_].
///
/// Either the 33-byte compressed form (first byte `0x02`/`0x03`) or the
/// 65-byte uncompressed form (first byte `0x04`). An `EcPoint` holds whatever
/// bytes it is given; [`Context::validate_public_key`] tells you whether they
/// are actually a point on the curve.
///
/// [_Standards for Efficient Cryptography_]: https://www.secg.org/sec1-v2.pdf
/// [`Context::validate_public_key`]: crate::Context::validate_public_key
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcPoint {
    /// 33-byte compressed encoding.
    Compressed([u8; 33]),
    /// 65-byte uncompressed encoding.
    Uncompressed([u8; 65]),
}

impl EcPoint {
    /// Size of the compressed encoding.
    pub const COMPRESSED_SIZE: usize = 33;
    /// Size of the uncompressed encoding.
    pub const UNCOMPRESSED_SIZE: usize = 65;

    /// Wraps a 33 or 65 byte slice without checking it is on the curve.
    /// Returns `None` for any other length.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        match slice.len() {
            Self::COMPRESSED_SIZE => slice.try_into().ok().map(EcPoint::Compressed),
            Self::UNCOMPRESSED_SIZE => slice.try_into().ok().map(EcPoint::Uncompressed),
            _ => None,
        }
    }

    /// Encodes a point in the requested form.
    pub fn encode<S>(point: &Point<Normal, S, NonZero>, compressed: bool) -> Self {
        if compressed {
            EcPoint::Compressed(point.to_bytes())
        } else {
            EcPoint::Uncompressed(point.to_bytes_uncompressed())
        }
    }

    /// Decodes the bytes into a point on the curve.
    pub fn decode(&self) -> Option<Point> {
        match self {
            EcPoint::Compressed(bytes) => Point::from_bytes(*bytes),
            EcPoint::Uncompressed(bytes) => Point::from_bytes_uncompressed(*bytes),
        }
    }

    /// Whether this is the 33-byte compressed form.
    pub fn is_compressed(&self) -> bool {
        matches!(self, EcPoint::Compressed(_))
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            EcPoint::Compressed(bytes) => &bytes[..],
            EcPoint::Uncompressed(bytes) => &bytes[..],
        }
    }

    /// Length of the encoding (33 or 65).
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }
}

impl AsRef<[u8]> for EcPoint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<S> From<Point<Normal, S, NonZero>> for EcPoint {
    fn from(point: Point<Normal, S, NonZero>) -> Self {
        EcPoint::encode(&point, true)
    }
}

impl_display_debug_serialize!(EcPoint);
impl_fromstr_deserialize!(name => "SEC1 encoded secp256k1 point", max_len => 65, EcPoint);
