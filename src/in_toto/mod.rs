//! # in-toto Statement Envelope
//!
//! The outer attestation envelope shared by every vendor variant:
//! `{_type, subject, predicateType, predicate}`. Two envelope schema
//! versions are in use, matching the SLSA predicate version each vendor
//! targets (see [`crate::slsa`]).
//!
//! Field declaration order is load-bearing: downstream attestation consumers
//! compare serialized statements byte-for-byte, so the struct serializes its
//! keys exactly in the order shown above.

use crate::subject::Subject;
use serde::Serialize;

/// in-toto Statement v0.1 schema URI (used with SLSA predicate v0.2).
pub const INTOTO_STATEMENT_V01_TYPE: &str = "https://in-toto.io/Statement/v0.1";

/// in-toto Statement v1 schema URI (used with SLSA predicate v1).
pub const INTOTO_STATEMENT_V1_TYPE: &str = "https://in-toto.io/Statement/v1";

/// An unsigned in-toto statement, generic over the predicate body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement<P> {
    #[serde(rename = "_type")]
    pub statement_type: &'static str,
    pub subject: Subject,
    #[serde(rename = "predicateType")]
    pub predicate_type: &'static str,
    pub predicate: P,
}
