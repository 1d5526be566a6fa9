//! Display, FromStr and serde impls shared by the byte container types.
//!
//! The containers here are not fixed length (a point is 33 or 65 bytes, a
//! signature anything up to 72) so each type provides `as_bytes` and
//! `from_slice` and the macros work in terms of those. `from_slice` only ever
//! rejects on length.
use secp256kfun::hex::HexError;

pub(crate) fn hex_val(c: u8) -> Result<u8, HexError> {
    match c {
        b'A'..=b'F' => Ok(c - b'A' + 10),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'0'..=b'9' => Ok(c - b'0'),
        _ => Err(HexError::InvalidHex),
    }
}

/// Decodes `hex` into the front of `buf` and returns how many bytes were written.
pub(crate) fn decode_hex_into(hex: &str, buf: &mut [u8]) -> Result<usize, HexError> {
    if hex.len() % 2 == 1 {
        return Err(HexError::InvalidHex);
    }
    let len = hex.len() / 2;
    if len > buf.len() {
        return Err(HexError::InvalidLength);
    }
    for (hex_byte, byte) in hex.as_bytes().chunks(2).zip(buf.iter_mut()) {
        *byte = hex_val(hex_byte[0])? << 4 | hex_val(hex_byte[1])?;
    }
    Ok(len)
}

macro_rules! impl_display_serialize {
    ($type:ident) => {
        impl core::fmt::Display for $type {
            /// Displays as hex.
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                for byte in self.as_bytes() {
                    write!(f, "{:02x}", byte)?
                }
                Ok(())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $type {
            fn serialize<Ser: serde::Serializer>(
                &self,
                serializer: Ser,
            ) -> Result<Ser::Ok, Ser::Error> {
                if serializer.is_human_readable() {
                    serializer.collect_str(self)
                } else {
                    serializer.serialize_bytes(self.as_bytes())
                }
            }
        }
    };
}

macro_rules! impl_display_debug_serialize {
    ($type:ident) => {
        impl_display_serialize!($type);

        impl core::fmt::Debug for $type {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{}({})", stringify!($type), self)
            }
        }
    };
}

macro_rules! impl_fromstr_deserialize {
    (name => $name:literal, max_len => $max:expr, $type:ident) => {
        impl core::str::FromStr for $type {
            type Err = secp256kfun::hex::HexError;

            /// Parses the string as hex. Fails with `InvalidLength` if the
            /// decoded bytes are not a length the type can hold.
            fn from_str(hex: &str) -> Result<$type, Self::Err> {
                let mut buf = [0u8; $max];
                let len = crate::macros::decode_hex_into(hex, &mut buf[..])?;
                <$type>::from_slice(&buf[..len]).ok_or(secp256kfun::hex::HexError::InvalidLength)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<Deser: serde::Deserializer<'de>>(
                deserializer: Deser,
            ) -> Result<$type, Deser::Error> {
                struct BytesVisitor;

                impl<'de> serde::de::Visitor<'de> for BytesVisitor {
                    type Value = $type;

                    fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                        write!(f, "a hex or byte encoded {}", $name)
                    }

                    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<$type, E> {
                        <$type as core::str::FromStr>::from_str(v)
                            .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
                    }

                    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<$type, E> {
                        <$type>::from_slice(v).ok_or_else(|| E::invalid_length(v.len(), &self))
                    }

                    fn visit_seq<A>(self, mut seq: A) -> Result<$type, A::Error>
                    where
                        A: serde::de::SeqAccess<'de>,
                    {
                        let mut buf = [0u8; $max];
                        let mut len = 0;
                        while let Some(byte) = seq.next_element::<u8>()? {
                            if len == buf.len() {
                                return Err(serde::de::Error::invalid_length(len + 1, &self));
                            }
                            buf[len] = byte;
                            len += 1;
                        }
                        <$type>::from_slice(&buf[..len])
                            .ok_or_else(|| serde::de::Error::invalid_length(len, &self))
                    }
                }

                if deserializer.is_human_readable() {
                    deserializer.deserialize_str(BytesVisitor)
                } else {
                    deserializer.deserialize_bytes(BytesVisitor)
                }
            }
        }
    };
}
