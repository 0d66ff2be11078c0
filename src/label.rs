use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

const CERTIFICATE_LABEL: &str = "CERTIFICATE";
const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";
const EC_PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";
const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";

/// The recognized PEM block labels.
///
/// Blocks carrying any other label are skipped during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// X.509 certificate
    Certificate,
    /// PKCS#1 RSA private key
    RSAPrivateKey,
    /// SEC1 EC private key
    ECPrivateKey,
    /// PKCS#8 private key (any supported algorithm)
    PrivateKey,
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Certificate => write!(f, "{}", CERTIFICATE_LABEL),
            Label::RSAPrivateKey => write!(f, "{}", RSA_PRIVATE_KEY_LABEL),
            Label::ECPrivateKey => write!(f, "{}", EC_PRIVATE_KEY_LABEL),
            Label::PrivateKey => write!(f, "{}", PRIVATE_KEY_LABEL),
        }
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CERTIFICATE_LABEL => Ok(Label::Certificate),
            RSA_PRIVATE_KEY_LABEL => Ok(Label::RSAPrivateKey),
            EC_PRIVATE_KEY_LABEL => Ok(Label::ECPrivateKey),
            PRIVATE_KEY_LABEL => Ok(Label::PrivateKey),
            _ => Err(Error::UnrecognizedLabel(s.to_string())),
        }
    }
}
