//! Signature header parsing.
//!
//! The header is a space-separated list of `tag,digest` entries, e.g.
//! `v1,K5oZfzN95Z9UVu1EsfQmfVNQhnkZ2pj9o9NDN/H/pI4= v1,Ym9ndXM=`. Several
//! entries let the provider sign with an old and a new secret during
//! rotation.

use base64::Engine;

use super::BASE64_LENIENT;

/// The only signature scheme currently accepted.
pub const SIGNATURE_VERSION: &str = "v1";

/// One decoded entry from the signature header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureCandidate<'a> {
    version_tag: &'a str,
    digest: Vec<u8>,
}

impl<'a> SignatureCandidate<'a> {
    /// Parses a single `tag,digest` token.
    ///
    /// Returns `None` for anything that cannot be checked: a missing comma,
    /// a tag other than `v1`, an empty digest, or a digest that is not
    /// base64. Unknown versions are skipped rather than rejected so newer
    /// schemes can be added alongside `v1`.
    pub fn parse(token: &'a str) -> Option<Self> {
        let (version_tag, encoded) = token.split_once(',')?;

        if version_tag != SIGNATURE_VERSION || encoded.is_empty() {
            return None;
        }

        let digest = BASE64_LENIENT.decode(encoded).ok()?;

        Some(Self {
            version_tag,
            digest,
        })
    }

    /// Returns every usable candidate in header order.
    pub fn parse_header(header: &'a str) -> impl Iterator<Item = SignatureCandidate<'a>> + 'a {
        header.split(' ').filter_map(SignatureCandidate::parse)
    }

    pub fn version_tag(&self) -> &str {
        self.version_tag
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }
}
