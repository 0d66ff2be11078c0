//! The ordered set of objects a successful parse returns.

use std::collections::VecDeque;

use rsa::RsaPrivateKey;
use x509_cert::Certificate;

use crate::error::{Error, Result};
use crate::label::Label;
use crate::object::{ECPrivateKey, PemObject, PrivateKey};

/// The objects parsed from a PEM bundle, in discovery order.
///
/// Consumption is destructive: every successful take removes the
/// frontmost object. A set returned by
/// [`parse_pems`](crate::parse_pems) is never empty; it only shrinks from
/// there. The typed accessors fail with
/// [`Error::ObjectMismatch`] without consuming anything when the
/// frontmost object is of a different kind, so the caller can retry with
/// the matching accessor.
#[derive(Debug, Clone)]
pub struct PemObjects {
    objects: VecDeque<PemObject>,
}

impl PemObjects {
    pub(crate) fn new(objects: Vec<PemObject>) -> Self {
        PemObjects {
            objects: objects.into(),
        }
    }

    /// The number of objects remaining to be taken.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Removes and returns the frontmost object in its tagged form.
    pub fn take_next(&mut self) -> Result<PemObject> {
        self.objects.pop_front().ok_or(Error::NoObjectsLeft)
    }

    /// Removes and returns the frontmost object as a certificate.
    pub fn take_certificate(&mut self) -> Result<Certificate> {
        match self.take_next()? {
            PemObject::Certificate(cert) => Ok(cert),
            other => Err(self.put_back(other, Label::Certificate)),
        }
    }

    /// Removes and returns the frontmost object as a PKCS#1 RSA private
    /// key.
    pub fn take_rsa_private_key(&mut self) -> Result<RsaPrivateKey> {
        match self.take_next()? {
            PemObject::RSAPrivateKey(key) => Ok(key),
            other => Err(self.put_back(other, Label::RSAPrivateKey)),
        }
    }

    /// Removes and returns the frontmost object as a SEC1 EC private key.
    pub fn take_ec_private_key(&mut self) -> Result<ECPrivateKey> {
        match self.take_next()? {
            PemObject::ECPrivateKey(key) => Ok(key),
            other => Err(self.put_back(other, Label::ECPrivateKey)),
        }
    }

    /// Removes and returns the frontmost object as a PKCS#8 private key.
    pub fn take_private_key(&mut self) -> Result<PrivateKey> {
        match self.take_next()? {
            PemObject::PrivateKey(key) => Ok(key),
            other => Err(self.put_back(other, Label::PrivateKey)),
        }
    }

    fn put_back(&mut self, object: PemObject, expected: Label) -> Error {
        let actual = object.label();
        self.objects.push_front(object);
        Error::ObjectMismatch { expected, actual }
    }
}

impl IntoIterator for PemObjects {
    type Item = PemObject;
    type IntoIter = std::collections::vec_deque::IntoIter<PemObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}
