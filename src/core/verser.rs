/// Verser: protocol/version/serialization-kind/genus marker, packed as 7
/// literal raw bytes (not base64-text embedding, unlike Dater -- 7 bytes has
/// no clean whole-quadlet text form).
use crate::core::codes::matter_codes;
use crate::core::matter::Matter;
use crate::core::utils::{Protocols, Serials, Version};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Verser {
    matter: Matter,
    protocol: Protocols,
    version: Version,
    kind: Serials,
    genus: [u8; 3],
}

impl Verser {
    pub fn new(protocol: Protocols, version: Version, kind: Serials, genus: [u8; 3]) -> Result<Self> {
        let raw = [
            protocol.id(),
            version.major,
            version.minor,
            kind.id(),
            genus[0],
            genus[1],
            genus[2],
        ];
        let matter = Matter::from_raw(&raw, matter_codes::VERSER)?;
        Ok(Self {
            matter,
            protocol,
            version,
            kind,
            genus,
        })
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        let matter = Matter::from_qb64(qb64)?;
        let raw = matter.raw();
        let protocol = Protocols::from_id(raw[0])?;
        let version = Version { major: raw[1], minor: raw[2] };
        let kind = Serials::from_id(raw[3])?;
        let genus = [raw[4], raw[5], raw[6]];
        Ok(Self {
            matter,
            protocol,
            version,
            kind,
            genus,
        })
    }

    pub fn protocol(&self) -> Protocols {
        self.protocol
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn kind(&self) -> Serials {
        self.kind
    }

    pub fn genus(&self) -> [u8; 3] {
        self.genus
    }

    pub fn qb64(&self) -> String {
        self.matter.qb64()
    }

    pub fn code(&self) -> &str {
        self.matter.code()
    }

    pub fn raw(&self) -> &[u8] {
        self.matter.raw()
    }

    pub fn matter(&self) -> &Matter {
        &self.matter
    }
}
