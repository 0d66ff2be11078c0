//! # pem-bundle
//!
//! Ergonomic extraction of certificates and private keys from PEM
//! bundles.
//!
//! A bundle is handed to [`parse_pems`] as text, bytes, or a readable
//! stream. Every PEM block with a recognized label is parsed into its
//! typed form and collected, in discovery order, into a [`PemObjects`]
//! set the caller consumes from the front:
//!
//! ```no_run
//! use std::fs::File;
//!
//! use pem_bundle::parse_pems;
//!
//! fn main() -> pem_bundle::Result<()> {
//!     let bundle = File::open("server.pem")?;
//!     let mut objects = parse_pems(bundle)?;
//!
//!     let certificate = objects.take_certificate()?;
//!     let key = objects.take_rsa_private_key()?;
//!     println!("{} object(s) left", objects.len());
//!     Ok(())
//! }
//! ```
//!
//! Recognized labels are `CERTIFICATE`, `RSA PRIVATE KEY`,
//! `EC PRIVATE KEY`, and `PRIVATE KEY`; blocks with any other label
//! (a `CERTIFICATE REQUEST`, say) are skipped, so mixed bundles work as
//! long as at least one recognized block is present. A recognized block
//! whose body does not parse aborts the whole call, without partial
//! results.
//!
//! The textual PEM framing and all DER parsing are delegated to the
//! ecosystem's crates (`pem`, `x509-cert`, `rsa`, `p256`, `p384`,
//! `pkcs8`); this crate only demultiplexes blocks and types the results.

#![forbid(unsafe_code)]

pub mod error;

mod input;
mod label;
mod object;
mod objects;

pub use error::{Error, Result};
pub use input::PemInput;
pub use label::Label;
pub use object::{ECPrivateKey, ObjectParseError, PemObject, PrivateKey};
pub use objects::PemObjects;

/// Parses every recognized PEM block in the input into its typed form.
///
/// The input may be text, bytes, or a readable stream (see [`PemInput`]);
/// a stream is drained completely before parsing. Blocks with
/// unrecognized labels are skipped. A recognized block that fails to
/// parse fails the whole call with [`Error::BlockParse`], and an input
/// yielding no recognized block at all fails with
/// [`Error::NoSupportedBlocks`], so a returned set always holds at least
/// one object.
pub fn parse_pems(input: impl Into<PemInput>) -> Result<PemObjects> {
    let bytes = input.into().into_bytes()?;
    let mut objects = Vec::new();
    for block in pem::parse_many(&bytes)? {
        let Ok(label) = block.tag().parse::<Label>() else {
            continue;
        };
        let object = PemObject::from_der(label, block.contents())
            .map_err(|source| Error::BlockParse { label, source })?;
        objects.push(object);
    }
    if objects.is_empty() {
        return Err(Error::NoSupportedBlocks);
    }
    Ok(PemObjects::new(objects))
}
