/// Utility functions shared across the CESR primitive types.
use crate::error::{CesrError, Result};
use serde_json::Value;

/// Concatenate byte slices.
pub fn concat(slices: &[&[u8]]) -> Vec<u8> {
    let total_len = slices.iter().map(|s| s.len()).sum();
    let mut result = Vec::with_capacity(total_len);
    for slice in slices {
        result.extend_from_slice(slice);
    }
    result
}

/// KERI protocol identifiers, used by Verser's genus/protocol byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocols {
    KERI,
    ACDC,
}

impl Protocols {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocols::KERI => "KERI",
            Protocols::ACDC => "ACDC",
        }
    }

    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            0 => Ok(Protocols::KERI),
            1 => Ok(Protocols::ACDC),
            _ => Err(CesrError::InvalidCode(format!("unknown protocol id {id}"))),
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            Protocols::KERI => 0,
            Protocols::ACDC => 1,
        }
    }
}

/// Event types (Ilks), as carried by the Ilker primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ilks {
    Icp,
    Rot,
    Ixn,
    Dip,
    Drt,
    Rct,
    Vrc,
}

impl Ilks {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ilks::Icp => "icp",
            Ilks::Rot => "rot",
            Ilks::Ixn => "ixn",
            Ilks::Dip => "dip",
            Ilks::Drt => "drt",
            Ilks::Rct => "rct",
            Ilks::Vrc => "vrc",
        }
    }

    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "icp" => Ok(Ilks::Icp),
            "rot" => Ok(Ilks::Rot),
            "ixn" => Ok(Ilks::Ixn),
            "dip" => Ok(Ilks::Dip),
            "drt" => Ok(Ilks::Drt),
            "rct" => Ok(Ilks::Rct),
            "vrc" => Ok(Ilks::Vrc),
            _ => Err(CesrError::InvalidEvent(format!("unknown ilk '{s}'"))),
        }
    }

    pub fn from_index(i: u16) -> Result<Self> {
        match i {
            0 => Ok(Ilks::Icp),
            1 => Ok(Ilks::Rot),
            2 => Ok(Ilks::Ixn),
            3 => Ok(Ilks::Dip),
            4 => Ok(Ilks::Drt),
            5 => Ok(Ilks::Rct),
            6 => Ok(Ilks::Vrc),
            _ => Err(CesrError::InvalidEvent(format!("unknown ilk index {i}"))),
        }
    }

    pub fn index(&self) -> u16 {
        match self {
            Ilks::Icp => 0,
            Ilks::Rot => 1,
            Ilks::Ixn => 2,
            Ilks::Dip => 3,
            Ilks::Drt => 4,
            Ilks::Rct => 5,
            Ilks::Vrc => 6,
        }
    }
}

/// Serialization kinds, used by Verser's kind byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Serials {
    JSON,
    CBOR,
    MGPK,
}

impl Serials {
    pub fn as_str(&self) -> &'static str {
        match self {
            Serials::JSON => "JSON",
            Serials::CBOR => "CBOR",
            Serials::MGPK => "MGPK",
        }
    }

    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            0 => Ok(Serials::JSON),
            1 => Ok(Serials::CBOR),
            2 => Ok(Serials::MGPK),
            _ => Err(CesrError::InvalidCode(format!("unknown serialization kind id {id}"))),
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            Serials::JSON => 0,
            Serials::CBOR => 1,
            Serials::MGPK => 2,
        }
    }
}

/// Protocol genus version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

pub const VRSN_1_0: Version = Version { major: 1, minor: 0 };

/// JSON canonicalization for hashing/signing over a SAD.
pub fn canonicalize_json(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(CesrError::JsonError)
}
