//! The parsed objects a PEM bundle can yield.
//!
//! Every block with a recognized label is handed to the matching parser
//! from the ecosystem's cryptographic crates; the results are wrapped in
//! [`PemObject`], a closed tagged union over the four recognized
//! structures. DER and ASN.1 are never interpreted here.

use const_oid::ObjectIdentifier;
use const_oid::db::rfc5912::{ID_EC_PUBLIC_KEY, SECP_256_R_1, SECP_384_R_1};
use der::{Decode, Encode};
use pkcs8::{EncodePublicKey, PrivateKeyInfo};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::{RsaPrivateKey, RsaPublicKey};
use thiserror::Error;
use x509_cert::Certificate;

use crate::label::Label;

// rsaEncryption (RFC 8017)
const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// Failure to parse the DER body of a block whose label was recognized.
#[derive(Debug, Error)]
pub enum ObjectParseError {
    /// The certificate DER was malformed
    #[error("certificate: {0}")]
    Certificate(#[from] der::Error),

    /// The PKCS#1 RSA private key DER was malformed
    #[error("rsa private key: {0}")]
    Pkcs1(#[from] rsa::pkcs1::Error),

    /// The PKCS#8 container was malformed or its key did not parse
    #[error("pkcs#8 private key: {0}")]
    Pkcs8(#[from] pkcs8::Error),

    /// The SEC1 key is not on a supported curve, or its DER was malformed
    #[error("ec private key is not a SEC1 key on a supported curve (P-256, P-384)")]
    UnsupportedSec1Key,

    /// The PKCS#8 EC key carries no readable named-curve parameter
    #[error("pkcs#8 ec key has missing or malformed named-curve parameters")]
    MalformedEcParameters,

    /// The PKCS#8 EC named curve is outside the supported set
    #[error("unsupported ec named curve {0}")]
    UnsupportedCurve(ObjectIdentifier),

    /// The PKCS#8 algorithm is outside the supported set
    #[error("unsupported pkcs#8 algorithm {0}")]
    UnsupportedAlgorithm(ObjectIdentifier),
}

type Result<T> = std::result::Result<T, ObjectParseError>;

/// An elliptic-curve private key on one of the supported named curves.
#[derive(Debug, Clone)]
pub enum ECPrivateKey {
    /// NIST P-256 (secp256r1)
    P256(p256::SecretKey),
    /// NIST P-384 (secp384r1)
    P384(p384::SecretKey),
}

impl ECPrivateKey {
    fn from_sec1_der(der: &[u8]) -> Result<Self> {
        if let Ok(key) = p256::SecretKey::from_sec1_der(der) {
            return Ok(ECPrivateKey::P256(key));
        }
        if let Ok(key) = p384::SecretKey::from_sec1_der(der) {
            return Ok(ECPrivateKey::P384(key));
        }
        Err(ObjectParseError::UnsupportedSec1Key)
    }

    /// The public key derived from this key, as DER-encoded
    /// SubjectPublicKeyInfo.
    #[must_use]
    pub fn public_key_der(&self) -> Option<Vec<u8>> {
        let document = match self {
            ECPrivateKey::P256(key) => key.public_key().to_public_key_der().ok()?,
            ECPrivateKey::P384(key) => key.public_key().to_public_key_der().ok()?,
        };
        Some(document.as_bytes().to_vec())
    }
}

/// A private key extracted from a PKCS#8 container.
///
/// PKCS#8 is algorithm-generic, so the concrete key inside is only known
/// after parsing the container's AlgorithmIdentifier.
#[derive(Debug, Clone)]
pub enum PrivateKey {
    /// rsaEncryption
    Rsa(RsaPrivateKey),
    /// id-ecPublicKey with a supported named curve
    Ec(ECPrivateKey),
}

impl PrivateKey {
    fn from_pkcs8_der(der: &[u8]) -> Result<Self> {
        let info = PrivateKeyInfo::try_from(der)?;
        let algorithm = info.algorithm.oid;
        if algorithm == RSA_ENCRYPTION {
            Ok(PrivateKey::Rsa(RsaPrivateKey::try_from(info)?))
        } else if algorithm == ID_EC_PUBLIC_KEY {
            let curve = info
                .algorithm
                .parameters_oid()
                .map_err(|_| ObjectParseError::MalformedEcParameters)?;
            if curve == SECP_256_R_1 {
                let key = p256::SecretKey::try_from(info)?;
                Ok(PrivateKey::Ec(ECPrivateKey::P256(key)))
            } else if curve == SECP_384_R_1 {
                let key = p384::SecretKey::try_from(info)?;
                Ok(PrivateKey::Ec(ECPrivateKey::P384(key)))
            } else {
                Err(ObjectParseError::UnsupportedCurve(curve))
            }
        } else {
            Err(ObjectParseError::UnsupportedAlgorithm(algorithm))
        }
    }

    /// The public key derived from this key, as DER-encoded
    /// SubjectPublicKeyInfo.
    #[must_use]
    pub fn public_key_der(&self) -> Option<Vec<u8>> {
        match self {
            PrivateKey::Rsa(key) => rsa_public_key_der(key),
            PrivateKey::Ec(key) => key.public_key_der(),
        }
    }
}

/// One parsed object from a PEM bundle.
///
/// A closed tagged union over the four structures a recognized block can
/// hold. Matching on it is the way to reach the underlying value from the
/// parsing crate.
#[derive(Debug, Clone)]
pub enum PemObject {
    /// From a `CERTIFICATE` block
    Certificate(Certificate),
    /// From an `RSA PRIVATE KEY` (PKCS#1) block
    RSAPrivateKey(RsaPrivateKey),
    /// From an `EC PRIVATE KEY` (SEC1) block
    ECPrivateKey(ECPrivateKey),
    /// From a `PRIVATE KEY` (PKCS#8) block
    PrivateKey(PrivateKey),
}

impl PemObject {
    pub(crate) fn from_der(label: Label, der: &[u8]) -> Result<Self> {
        match label {
            Label::Certificate => Ok(PemObject::Certificate(Certificate::from_der(der)?)),
            Label::RSAPrivateKey => Ok(PemObject::RSAPrivateKey(RsaPrivateKey::from_pkcs1_der(
                der,
            )?)),
            Label::ECPrivateKey => ECPrivateKey::from_sec1_der(der).map(PemObject::ECPrivateKey),
            Label::PrivateKey => PrivateKey::from_pkcs8_der(der).map(PemObject::PrivateKey),
        }
    }

    /// The label of the block this object was parsed from.
    #[must_use]
    pub fn label(&self) -> Label {
        match self {
            PemObject::Certificate(_) => Label::Certificate,
            PemObject::RSAPrivateKey(_) => Label::RSAPrivateKey,
            PemObject::ECPrivateKey(_) => Label::ECPrivateKey,
            PemObject::PrivateKey(_) => Label::PrivateKey,
        }
    }

    /// The object's public key as DER-encoded SubjectPublicKeyInfo.
    ///
    /// For certificates this is the embedded SubjectPublicKeyInfo; for
    /// private keys it is derived from the key material. Useful for
    /// checking that a certificate and a private key belong together.
    #[must_use]
    pub fn public_key_der(&self) -> Option<Vec<u8>> {
        match self {
            PemObject::Certificate(cert) => cert
                .tbs_certificate
                .subject_public_key_info
                .to_der()
                .ok(),
            PemObject::RSAPrivateKey(key) => rsa_public_key_der(key),
            PemObject::ECPrivateKey(key) => key.public_key_der(),
            PemObject::PrivateKey(key) => key.public_key_der(),
        }
    }
}

fn rsa_public_key_der(key: &RsaPrivateKey) -> Option<Vec<u8>> {
    let document = RsaPublicKey::from(key).to_public_key_der().ok()?;
    Some(document.as_bytes().to_vec())
}
