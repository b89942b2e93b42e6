/// Ilker: the event-type (ilk) marker. A three-character message-type tag
/// carried in a fixed Tagger code -- `icp`, `rot`, `ixn`, and the rest are
/// just particular Tagger values, not a distinct wire encoding.
use crate::core::tagger::Tagger;
use crate::core::utils::Ilks;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Ilker {
    tagger: Tagger,
    ilk: Ilks,
}

impl Ilker {
    pub fn new(ilk: Ilks) -> Result<Self> {
        let tagger = Tagger::new(ilk.as_str())?;
        Ok(Self { tagger, ilk })
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        let tagger = Tagger::from_qb64(qb64)?;
        let ilk = Ilks::from_str(&tagger.tag())?;
        Ok(Self { tagger, ilk })
    }

    pub fn ilk(&self) -> Ilks {
        self.ilk
    }

    pub fn ilk_str(&self) -> &'static str {
        self.ilk.as_str()
    }

    pub fn qb64(&self) -> String {
        self.tagger.qb64()
    }

    pub fn code(&self) -> &str {
        self.tagger.code()
    }

    pub fn raw(&self) -> &[u8] {
        self.tagger.raw()
    }

    pub fn matter(&self) -> &crate::core::matter::Matter {
        self.tagger.matter()
    }
}
