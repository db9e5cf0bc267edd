//! Signatures produced by the RustCrypto curve crates, checked against this codec.
//!
//! Their DER form is the standard `SEQUENCE { r INTEGER, s INTEGER }`; the body of that SEQUENCE
//! must be exactly what `encode_signature` writes.

use ecdsa_asn1_der::{
    decode_signature_fixed, decode_signature_separate, encode_signature, EcCurve, EcdsaSignature,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn sequence_body(der: &[u8]) -> &[u8] {
    assert_eq!(der[0], 0x30, "not a SEQUENCE");
    assert!(der[1] < 0x80, "P-256 and P-384 signatures always use a short-form length");
    assert_eq!(der[1] as usize, der.len() - 2);
    &der[2..]
}

#[rstest]
#[case(b"hello".as_slice())]
#[case(b"".as_slice())]
#[case(b"ecdsa signature to der".as_slice())]
#[case(&[0xFF; 200])]
fn p256_signature_matches_sequence_body(#[case] msg: &[u8]) {
    use p256::ecdsa::signature::{Signer, Verifier};
    use p256::ecdsa::{Signature, SigningKey, VerifyingKey};

    let signing_key = SigningKey::from_slice(&[0x11; 32]).unwrap();
    let verifying_key = VerifyingKey::from(&signing_key);
    let signature: Signature = signing_key.sign(msg);

    let (r, s) = signature.split_bytes();
    let mut der = [0u8; 72];
    let len = encode_signature(&r, &s, &mut der).unwrap();

    let reference = signature.to_der();
    assert_eq!(&der[..len], sequence_body(reference.as_bytes()));

    let mut rs = [0u8; 64];
    let decoded = decode_signature_fixed(&der[..len], &mut rs).unwrap();
    assert_eq!(decoded.consumed, len);
    assert_eq!(&rs[..], &signature.to_bytes()[..]);

    let parsed = Signature::from_slice(&rs).unwrap();
    verifying_key.verify(msg, &parsed).unwrap();
}

#[test]
fn p256_many_signatures_round_trip() {
    use p256::ecdsa::signature::Signer;
    use p256::ecdsa::{Signature, SigningKey};

    let signing_key = SigningKey::from_slice(&[0x42; 32]).unwrap();

    // enough messages to hit both stuffed and unstuffed components
    let mut stuffed = 0;
    for i in 0u32..64 {
        let signature: Signature = signing_key.sign(&i.to_be_bytes());
        let fixed = signature.to_bytes();

        let owned = EcdsaSignature::from_fixed_bytes(&fixed).unwrap();
        let der = owned.to_der().unwrap();
        assert_eq!(der.as_slice(), sequence_body(signature.to_der().as_bytes()));

        if der[2] == 0x00 {
            stuffed += 1;
        }

        let back = EcdsaSignature::from_der(EcCurve::NistP256, &der).unwrap();
        assert_eq!(&back.to_fixed_bytes()[..], &fixed[..]);
    }
    assert!(stuffed > 0);
}

#[test]
fn p384_signature_round_trip() {
    use p384::ecdsa::signature::{Signer, Verifier};
    use p384::ecdsa::{Signature, SigningKey, VerifyingKey};

    let signing_key = SigningKey::from_slice(&[0x07; 48]).unwrap();
    let verifying_key = VerifyingKey::from(&signing_key);
    let signature: Signature = signing_key.sign(b"p384");

    let (r, s) = signature.split_bytes();
    let mut der = [0u8; 104];
    let len = encode_signature(&r, &s, &mut der).unwrap();
    assert_eq!(&der[..len], sequence_body(signature.to_der().as_bytes()));

    let mut r_out = [0u8; 48];
    let mut s_out = [0u8; 48];
    decode_signature_separate(&der[..len], &mut r_out, &mut s_out).unwrap();
    assert_eq!(&r_out[..], &r[..]);
    assert_eq!(&s_out[..], &s[..]);

    let mut rs = [0u8; 96];
    rs[..48].copy_from_slice(&r_out);
    rs[48..].copy_from_slice(&s_out);
    verifying_key
        .verify(b"p384", &Signature::from_slice(&rs).unwrap())
        .unwrap();
}

#[test]
fn sequence_wrapped_signature_is_rejected() {
    use p256::ecdsa::signature::Signer;
    use p256::ecdsa::{Signature, SigningKey};

    let signing_key = SigningKey::from_slice(&[0x11; 32]).unwrap();
    let signature: Signature = signing_key.sign(b"wrapped");

    let err = EcdsaSignature::from_der(EcCurve::NistP256, signature.to_der().as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ecdsa_asn1_der::ErrorKind::Malformed);
}
