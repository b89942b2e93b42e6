/// Core CESR primitives: derivation codes, the Matter encoding engine, and
/// the typed wrappers built on top of it.
pub mod bexter;
pub mod cigar;
pub mod codes;
pub mod crypto;
pub mod dater;
pub mod diger;
pub mod ilker;
pub mod labeler;
pub mod matter;
pub mod number;
pub mod pather;
pub mod prefixer;
pub mod saider;
pub mod seqner;
pub mod signer;
pub mod tagger;
pub mod texter;
pub mod traitor;
pub mod utils;
pub mod verfer;
pub mod verser;

pub use bexter::Bexter;
pub use cigar::Cigar;
pub use codes::matter_codes;
pub use crypto::{CryptoGateway, Ed25519Gateway};
pub use dater::Dater;
pub use diger::Diger;
pub use ilker::Ilker;
pub use labeler::Labeler;
pub use matter::Matter;
pub use number::Number;
pub use pather::Pather;
pub use prefixer::{DerivationCode, Prefixer};
pub use saider::Saider;
pub use seqner::Seqner;
pub use signer::{IndexedSignature, Signer};
pub use tagger::Tagger;
pub use texter::Texter;
pub use traitor::Traitor;
pub use utils::*;
pub use verfer::Verfer;
pub use verser::Verser;
