/// Traitor: arbitrary-length trait/capability markers. A thin wrapper
/// around Bexter's variable-code family with no dedicated code of its own.
use crate::core::bexter::Bexter;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Traitor {
    bexter: Bexter,
}

impl Traitor {
    pub fn new(trait_name: &str) -> Result<Self> {
        Ok(Self {
            bexter: Bexter::new(trait_name)?,
        })
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        Ok(Self {
            bexter: Bexter::from_qb64(qb64)?,
        })
    }

    pub fn trait_name(&self) -> String {
        self.bexter.text()
    }

    pub fn qb64(&self) -> String {
        self.bexter.qb64()
    }

    pub fn code(&self) -> &str {
        self.bexter.code()
    }

    pub fn raw(&self) -> &[u8] {
        self.bexter.raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let t = Traitor::new("EO").unwrap();
        assert_eq!(t.trait_name(), "EO");
        let t2 = Traitor::from_qb64(&t.qb64()).unwrap();
        assert_eq!(t2.trait_name(), "EO");
    }

    #[test]
    fn long_trait_name() {
        let name = "some-long-capability-marker-string";
        let t = Traitor::new(name).unwrap();
        assert_eq!(t.trait_name(), name);
    }
}
