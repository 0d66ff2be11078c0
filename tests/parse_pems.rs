use std::fs::File;
use std::io;
use std::path::PathBuf;

use rstest::rstest;

use pem_bundle::{ECPrivateKey, Error, Label, PemInput, PemObject, PrivateKey, parse_pems};

const RSA_CERT: &str = include_str!("testdata/rsa_2048.crt");
const RSA_KEY: &str = include_str!("testdata/rsa_2048.key");
const RSA_CSR: &str = include_str!("testdata/rsa_2048.csr");
const RSA_PKCS8_KEY: &str = include_str!("testdata/rsa_pkcs8.key");
const CA_CERT: &str = include_str!("testdata/ca.crt");
const CA_KEY: &str = include_str!("testdata/ca.key");
const EC_CERT: &str = include_str!("testdata/ec_p256.crt");
const EC_KEY: &str = include_str!("testdata/ec_p256.key");
const EC_PKCS8_KEY: &str = include_str!("testdata/ec_p256_pkcs8.key");
const EC_P384_KEY: &str = include_str!("testdata/ec_p384.key");
const INVALID_CERT: &str = include_str!("testdata/invalid_der.crt");

fn bundle(parts: &[&str]) -> String {
    parts.join("\n")
}

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(name)
}

fn spki(object: &PemObject) -> Vec<u8> {
    object.public_key_der().expect("object has a public key")
}

#[test]
fn test_parse_single_ec_key() {
    let mut objects = parse_pems(EC_KEY).unwrap();
    assert_eq!(1, objects.len());
    let key = objects.take_ec_private_key().unwrap();
    assert!(matches!(key, ECPrivateKey::P256(_)));
    assert!(objects.is_empty());
}

#[test]
fn test_mixed_bundle_preserves_order_and_skips_csr() {
    let input = bundle(&[
        RSA_CERT, RSA_KEY, CA_CERT, CA_KEY, RSA_CSR, EC_CERT, EC_KEY,
    ]);
    let mut objects = parse_pems(input).unwrap();
    // the certificate request is not a recognized block
    assert_eq!(6, objects.len());

    let rsa_cert = objects.take_certificate().unwrap();
    let rsa_key = objects.take_rsa_private_key().unwrap();
    let ca_cert = objects.take_certificate().unwrap();
    let ca_key = objects.take_rsa_private_key().unwrap();
    let ec_cert = objects.take_certificate().unwrap();
    let ec_key = objects.take_ec_private_key().unwrap();
    assert!(objects.is_empty());

    let pairs = [
        (
            PemObject::Certificate(rsa_cert),
            PemObject::RSAPrivateKey(rsa_key),
        ),
        (
            PemObject::Certificate(ca_cert),
            PemObject::RSAPrivateKey(ca_key),
        ),
        (
            PemObject::Certificate(ec_cert),
            PemObject::ECPrivateKey(ec_key),
        ),
    ];
    for (cert, key) in &pairs {
        assert_eq!(spki(cert), spki(key));
    }
}

#[test]
fn test_concrete_scenario_variants() {
    let input = bundle(&[RSA_CERT, RSA_KEY, RSA_CSR, EC_KEY]);
    let mut objects = parse_pems(input).unwrap();
    assert_eq!(3, objects.len());

    let cert = objects.take_next().unwrap();
    let key = objects.take_next().unwrap();
    let ec_key = objects.take_next().unwrap();
    assert_eq!(Label::Certificate, cert.label());
    assert_eq!(Label::RSAPrivateKey, key.label());
    assert_eq!(Label::ECPrivateKey, ec_key.label());

    // the certificate was issued from the same RSA key
    assert_eq!(spki(&cert), spki(&key));
}

fn fingerprint(input: PemInput) -> Vec<(Label, Option<Vec<u8>>)> {
    parse_pems(input)
        .unwrap()
        .into_iter()
        .map(|object| (object.label(), object.public_key_der()))
        .collect()
}

#[test]
fn test_input_shapes_are_equivalent() {
    let input = bundle(&[RSA_CERT, RSA_KEY, EC_KEY]);

    let from_text = fingerprint(PemInput::from(input.as_str()));
    let from_bytes = fingerprint(PemInput::from(input.as_bytes()));
    let from_reader = fingerprint(PemInput::reader(io::Cursor::new(input.clone())));

    assert_eq!(from_text, from_bytes);
    assert_eq!(from_text, from_reader);
}

#[test]
fn test_file_input() {
    let file = File::open(testdata("ec_p256.key")).unwrap();
    let mut objects = parse_pems(file).unwrap();
    assert_eq!(1, objects.len());
    assert!(matches!(
        objects.take_ec_private_key().unwrap(),
        ECPrivateKey::P256(_)
    ));
}

#[rstest(
    input,
    case(String::new()),
    case("plain text, no blocks at all".to_string()),
    case(RSA_CSR.to_string()),
    case(bundle(&[RSA_CSR, RSA_CSR]))
)]
fn test_no_recognized_blocks(input: String) {
    assert!(matches!(parse_pems(input), Err(Error::NoSupportedBlocks)));
}

#[test]
fn test_malformed_block_aborts_whole_parse() {
    let input = bundle(&[RSA_CERT, INVALID_CERT, EC_KEY]);
    match parse_pems(input) {
        Err(Error::BlockParse { label, .. }) => assert_eq!(Label::Certificate, label),
        other => panic!("expected a block parse failure, got {other:?}"),
    }
}

#[test]
fn test_underrun() {
    let mut objects = parse_pems(EC_KEY).unwrap();
    assert!(objects.take_next().is_ok());
    assert_eq!(0, objects.len());
    assert!(matches!(objects.take_next(), Err(Error::NoObjectsLeft)));
    assert!(matches!(
        objects.take_ec_private_key(),
        Err(Error::NoObjectsLeft)
    ));
}

#[test]
fn test_mismatched_take_leaves_object_in_place() {
    let mut objects = parse_pems(EC_KEY).unwrap();
    match objects.take_rsa_private_key() {
        Err(Error::ObjectMismatch { expected, actual }) => {
            assert_eq!(Label::RSAPrivateKey, expected);
            assert_eq!(Label::ECPrivateKey, actual);
        }
        other => panic!("expected an object mismatch, got {other:?}"),
    }
    // the mismatched object is still there for a retry
    assert_eq!(1, objects.len());
    assert!(objects.take_ec_private_key().is_ok());
}

#[test]
fn test_pkcs8_rsa_key() {
    let mut objects = parse_pems(bundle(&[RSA_CERT, RSA_PKCS8_KEY])).unwrap();
    let cert = objects.take_next().unwrap();
    let key = objects.take_private_key().unwrap();
    assert!(matches!(key, PrivateKey::Rsa(_)));
    assert_eq!(spki(&cert), key.public_key_der().unwrap());
}

#[test]
fn test_pkcs8_ec_key() {
    let mut objects = parse_pems(bundle(&[EC_CERT, EC_PKCS8_KEY])).unwrap();
    let cert = objects.take_next().unwrap();
    let key = objects.take_private_key().unwrap();
    assert!(matches!(key, PrivateKey::Ec(ECPrivateKey::P256(_))));
    assert_eq!(spki(&cert), key.public_key_der().unwrap());
}

#[test]
fn test_p384_sec1_key() {
    let mut objects = parse_pems(EC_P384_KEY).unwrap();
    let key = objects.take_ec_private_key().unwrap();
    assert!(matches!(key, ECPrivateKey::P384(_)));
    assert!(key.public_key_der().is_some());
}
