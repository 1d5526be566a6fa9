use crate::{EcPoint, Secret, Signature};
use secp256k1_0_30::{self as secp256k1, PublicKey, SecretKey};

impl From<SecretKey> for Secret {
    fn from(sk: SecretKey) -> Self {
        Secret::from_bytes(sk.secret_bytes())
    }
}

impl TryFrom<Secret> for SecretKey {
    type Error = secp256k1::Error;

    fn try_from(secret: Secret) -> Result<Self, Self::Error> {
        SecretKey::from_slice(secret.as_bytes())
    }
}

impl From<PublicKey> for EcPoint {
    fn from(pk: PublicKey) -> Self {
        EcPoint::Compressed(pk.serialize())
    }
}

impl TryFrom<EcPoint> for PublicKey {
    type Error = secp256k1::Error;

    fn try_from(point: EcPoint) -> Result<Self, Self::Error> {
        PublicKey::from_slice(point.as_bytes())
    }
}

impl TryFrom<secp256k1::ecdsa::Signature> for Signature {
    type Error = secp256k1::Error;

    fn try_from(sig: secp256k1::ecdsa::Signature) -> Result<Self, Self::Error> {
        Signature::from_compact(sig.serialize_compact()).ok_or(secp256k1::Error::InvalidSignature)
    }
}

impl TryFrom<Signature> for secp256k1::ecdsa::Signature {
    type Error = secp256k1::Error;

    fn try_from(sig: Signature) -> Result<Self, Self::Error> {
        secp256k1::ecdsa::Signature::from_der(sig.as_bytes())
    }
}
