//! Fixed vectors run through the process-wide context.
use eckey_fun::{EcPoint, Hash, Secret, Signature};
use sha2::{Digest, Sha256};
use std::str::FromStr;

fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

fn secret() -> Secret {
    Secret::from_bytes(sha256(b"eckey_fun secret"))
}

fn nonce() -> Secret {
    Secret::from_bytes(sha256(b"eckey_fun nonce"))
}

fn tweak() -> Secret {
    Secret::from_bytes(sha256(b"eckey_fun tweak"))
}

fn hash() -> Hash {
    sha256(b"Satoshi Nakamoto")
}

fn point(hex: &str) -> EcPoint {
    EcPoint::from_str(hex).unwrap()
}

const PUBLIC_KEY: &str = "0323a28ec94bea15be26abddd9e0841b3ac089ec80408e07032c82be221a045aab";
const PUBLIC_KEY_UNCOMPRESSED: &str = "0423a28ec94bea15be26abddd9e0841b3ac089ec80408e07032c82be221a045aab84af4543417951135c9aedf72c8c511cd007f6880f62de7824ddf44a6950d309";
const SIGNATURE: &str = "304402203aa7af8a3199aebe8d6400c3a6d10cafc10e9e9d96e0292e38a756f26f2ae34f02200d8c822cb9bfe78d34069a9816dbff623c522082eac0bcd35fe20faeb56470a9";

#[test]
fn derive() {
    assert_eq!(
        secret(),
        Secret::from_str("e1227269453b5a08deeb24eb4d92576e782e5db1149c7ec126e0ed42be51bd66")
            .unwrap()
    );
    assert!(eckey_fun::validate_secret(&secret()));
    assert_eq!(
        eckey_fun::derive_public_key(&secret(), true),
        Some(point(PUBLIC_KEY))
    );
    assert_eq!(
        eckey_fun::derive_public_key(&secret(), false),
        Some(point(PUBLIC_KEY_UNCOMPRESSED))
    );
    assert!(eckey_fun::validate_public_key(&point(PUBLIC_KEY)));
    assert!(eckey_fun::validate_public_key(&point(
        PUBLIC_KEY_UNCOMPRESSED
    )));
}

#[test]
fn sign_and_verify() {
    let signature = eckey_fun::sign(&secret(), &hash(), &nonce()).unwrap();
    assert_eq!(signature, Signature::from_str(SIGNATURE).unwrap());
    assert_eq!(signature.len(), 70);

    for public_key in [PUBLIC_KEY, PUBLIC_KEY_UNCOMPRESSED] {
        assert!(eckey_fun::verify_signature(
            &point(public_key),
            &hash(),
            signature.as_bytes()
        ));
    }

    let other_hash = sha256(b"Satoshi Nakamoto!");
    assert!(!eckey_fun::verify_signature(
        &point(PUBLIC_KEY),
        &other_hash,
        signature.as_bytes()
    ));
}

#[test]
fn sign_with_minimal_keys() {
    let mut one = [0u8; 32];
    one[31] = 1;
    let mut two = [0u8; 32];
    two[31] = 2;

    // r is the x-coordinate of 2G which has its top bit set
    let signature =
        eckey_fun::sign(&Secret::from_bytes(one), &[0u8; 32], &Secret::from_bytes(two)).unwrap();
    assert_eq!(
        signature.to_string(),
        "3045022100c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee502201cfdc035df09414967dd5fc8b51fc1932f1ba74d912cb1ca0a132a69b9e2d12e"
    );
    assert!(eckey_fun::verify_signature(
        &eckey_fun::derive_public_key(&Secret::from_bytes(one), true).unwrap(),
        &[0u8; 32],
        signature.as_bytes()
    ));
}

#[test]
fn tweak_points() {
    let tweaked = "025ab3253dd6991848f5dcc964313ece616190af76ff5d26507916dcad8495e7b3";
    assert_eq!(
        eckey_fun::tweak_add_point(&point(PUBLIC_KEY), &tweak()),
        Some(point(tweaked))
    );
    assert_eq!(
        eckey_fun::tweak_add_point(&point(PUBLIC_KEY_UNCOMPRESSED), &tweak()),
        Some(point(
            "045ab3253dd6991848f5dcc964313ece616190af76ff5d26507916dcad8495e7b3914bc7cb622a69b22beee687b427e7bb6f5782bbfa4d7a2ae9133125265b4ef4"
        ))
    );
    assert_eq!(
        eckey_fun::tweak_mul_point(&point(PUBLIC_KEY), &tweak()),
        Some(point(
            "0392534ff00708aa84e01466f498e5e37b04b16d430f82825495b2b5890bb11e44"
        ))
    );

    let tweak_point = point("03f56fe3887e59d9ee864c639c6b2d89605b210af81594ccff77503765357aa42f");
    assert_eq!(
        eckey_fun::derive_public_key(&tweak(), true),
        Some(tweak_point)
    );
    assert_eq!(
        eckey_fun::add_points(&point(PUBLIC_KEY_UNCOMPRESSED), &tweak_point),
        Some(point(tweaked))
    );
}

#[test]
fn tweak_secrets() {
    assert_eq!(
        eckey_fun::add_secrets(&secret(), &tweak()),
        Some(
            Secret::from_str("4b6bdc8567c3f07ea68043c982fb49eac48aa8f6532db5500d4619b668385169")
                .unwrap()
        )
    );
    assert_eq!(
        eckey_fun::mul_secrets(&secret(), &tweak()),
        Some(
            Secret::from_str("4607be2043ffcebb1befc690a83a684efed81fec4c93be6e91f46f7f77b1a6fc")
                .unwrap()
        )
    );
}

#[test]
fn rejected_inputs() {
    let zero = Secret::from_bytes([0u8; 32]);
    let order = Secret::from_str("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141")
        .unwrap();

    assert!(!eckey_fun::validate_secret(&zero));
    assert!(!eckey_fun::validate_secret(&order));
    assert!(eckey_fun::derive_public_key(&zero, true).is_none());
    assert!(eckey_fun::sign(&secret(), &hash(), &zero).is_none());
    assert!(eckey_fun::sign(&order, &hash(), &nonce()).is_none());
    assert!(!eckey_fun::validate_public_key(&EcPoint::Compressed([0u8; 33])));
    assert!(!eckey_fun::verify_signature(
        &point(PUBLIC_KEY),
        &hash(),
        &[0x30, 0x00]
    ));
    assert!(eckey_fun::tweak_mul_point(&point(PUBLIC_KEY), &zero).is_none());
    assert!(eckey_fun::mul_secrets(&secret(), &zero).is_none());
}
