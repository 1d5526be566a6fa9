//! Strict DER encoding of an ECDSA `(r, s)` pair.
//!
//! ```text
//! 0x30 <len> 0x02 <r_len> <r> 0x02 <s_len> <s>
//! ```
//!
//! Integers are big-endian, minimal, and padded with a single `0x00` when
//! their top bit is set so they read as positive. Decoding rejects anything
//! that isn't in exactly that shape: long-form lengths, trailing bytes,
//! negative integers, superfluous leading zeros, and values outside `[1, n-1]`.
use crate::Signature;
use secp256kfun::{
    Scalar,
    marker::{NonZero, Public},
};

const SEQUENCE: u8 = 0x30;
const INTEGER: u8 = 0x02;

/// Encodes `(r, s)` as a DER signature.
///
/// # Examples
///
/// ```
/// use eckey_fun::{der, fun::{Scalar, marker::*}};
/// let one = Scalar::<Public, NonZero>::one();
/// let sig = der::encode(&one, &one);
/// assert_eq!(sig.as_bytes(), &[0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01]);
/// assert_eq!(der::decode(sig.as_bytes()), Some((one, one)));
/// ```
pub fn encode<S1, Z1, S2, Z2>(r: &Scalar<S1, Z1>, s: &Scalar<S2, Z2>) -> Signature {
    let mut buf = [0u8; crate::MAX_SIGNATURE_SIZE];
    let mut len = 2;
    len += encode_integer(&r.to_bytes(), &mut buf[len..]);
    len += encode_integer(&s.to_bytes(), &mut buf[len..]);
    buf[0] = SEQUENCE;
    buf[1] = (len - 2) as u8;
    Signature::from_parts(buf, len)
}

/// Decodes a strict DER signature into `(r, s)`.
///
/// Returns `None` for anything malformed or for `r`/`s` that are zero or not
/// less than the curve order.
pub fn decode(bytes: &[u8]) -> Option<(Scalar<Public, NonZero>, Scalar<Public, NonZero>)> {
    let (&tag, rest) = bytes.split_first()?;
    if tag != SEQUENCE {
        return None;
    }
    let (&len, body) = rest.split_first()?;
    if len >= 0x80 || len as usize != body.len() {
        return None;
    }
    let (r, body) = decode_integer(body)?;
    let (s, body) = decode_integer(body)?;
    if !body.is_empty() {
        return None;
    }
    Some((r, s))
}

fn encode_integer(bytes: &[u8; 32], out: &mut [u8]) -> usize {
    let leading_zeros = bytes.iter().take_while(|byte| **byte == 0).count();
    let int = &bytes[leading_zeros..];
    // zero is encoded as a single 0x00 which falls out of the padding rule
    let pad = int.first().is_none_or(|first| first & 0x80 != 0);
    let int_len = int.len() + pad as usize;

    out[0] = INTEGER;
    out[1] = int_len as u8;
    let mut pos = 2;
    if pad {
        out[pos] = 0x00;
        pos += 1;
    }
    out[pos..pos + int.len()].copy_from_slice(int);
    pos + int.len()
}

fn decode_integer(bytes: &[u8]) -> Option<(Scalar<Public, NonZero>, &[u8])> {
    let (&tag, rest) = bytes.split_first()?;
    if tag != INTEGER {
        return None;
    }
    let (&len, rest) = rest.split_first()?;
    let len = len as usize;
    if len == 0 || len > 33 || rest.len() < len {
        return None;
    }
    let (int, rest) = rest.split_at(len);

    if int[0] & 0x80 != 0 {
        return None;
    }
    if len > 1 && int[0] == 0x00 && int[1] & 0x80 == 0 {
        return None;
    }

    let int = if int[0] == 0x00 { &int[1..] } else { int };
    if int.len() > 32 {
        return None;
    }
    let mut scalar_bytes = [0u8; 32];
    scalar_bytes[32 - int.len()..].copy_from_slice(int);
    let scalar = Scalar::from_bytes(scalar_bytes)?;
    Some((scalar, rest))
}
