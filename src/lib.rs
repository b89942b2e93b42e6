/// keri-cesr: the CESR primitive layer for KERI.
///
/// Composable Event Streaming Representation (CESR) is the dual
/// binary/text self-describing encoding used to carry cryptographic
/// primitives in KERI event streams. This crate provides the encoding
/// engine (`Matter`), its derivation-code tables, and the typed
/// primitives built on top of it (keys, signatures, digests, sequence
/// numbers, dates, and the small set of text/bytes containers used in
/// self-addressing identifiers).
///
/// Stream parsing (group codes, counters), event validation, and
/// identifier lifecycle management live outside this crate.
pub mod core;
pub mod error;

pub use core::{
    matter_codes, Bexter, Cigar, Dater, Diger, Ilker, Labeler, Matter, Number, Pather, Prefixer,
    Saider, Seqner, Signer, Tagger, Texter, Traitor, Verfer, Verser,
};
pub use error::{CesrError, Result};
