/// Dater: a fully-qualified, self-inverse encoding of an RFC3339 datetime.
///
/// Since `1AAF` has zero pad characters (rs=24 is already a multiple of 3),
/// the qb64 body is exactly the canonical datetime text with `:` -> `c`,
/// `.` -> `d`, `+` -> `p` substitutions applied -- those substitutions
/// replace the only non-base64url characters RFC3339 can produce.
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::core::codes::matter_codes;
use crate::core::matter::Matter;
use crate::error::{CesrError, Result};

#[derive(Debug, Clone)]
pub struct Dater {
    matter: Matter,
    dt: DateTime<Utc>,
}

impl Dater {
    pub fn new(dt: DateTime<Utc>) -> Result<Self> {
        let text = canonical_text(dt);
        let raw = URL_SAFE_NO_PAD
            .decode(text.as_bytes())
            .map_err(CesrError::Base64Error)?;
        let matter = Matter::from_raw(&raw, matter_codes::DATER)?;
        Ok(Self { matter, dt })
    }

    /// Build from an RFC3339 datetime string (the natural Dater constructor).
    pub fn from_dts(dts: &str) -> Result<Self> {
        let dt = DateTime::parse_from_rfc3339(dts)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| CesrError::InvalidFormat(format!("invalid Dater timestamp: {e}")))?;
        Self::new(dt)
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        let matter = Matter::from_qb64(qb64)?;
        if matter.code() != matter_codes::DATER {
            return Err(CesrError::InvalidCode(format!(
                "'{}' is not a registered Dater code",
                matter.code()
            )));
        }
        let text = URL_SAFE_NO_PAD.encode(matter.raw());
        let dt = parse_canonical_text(&text)?;
        Ok(Self { matter, dt })
    }

    pub fn dt(&self) -> DateTime<Utc> {
        self.dt
    }

    /// Canonical RFC3339 datetime string, reconstructed from `dt` rather than
    /// cached, so it always matches what `qb64` encodes.
    pub fn dts(&self) -> String {
        self.dt.to_rfc3339_opts(SecondsFormat::Micros, false)
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

fn canonical_text(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, false)
        .replace(':', "c")
        .replace('.', "d")
        .replace('+', "p")
}

fn parse_canonical_text(text: &str) -> Result<DateTime<Utc>> {
    let rfc3339 = text.replace('c', ":").replace('d', ".").replace('p', "+");
    DateTime::parse_from_rfc3339(&rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CesrError::InvalidFormat(format!("invalid Dater timestamp: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn qb64_body_is_canonical_text() {
        let dt = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let dater = Dater::new(dt).unwrap();
        let qb64 = dater.qb64();
        assert_eq!(qb64.len(), 36);
        assert_eq!(&qb64[..4], matter_codes::DATER);
        assert_eq!(&qb64[4..], canonical_text(dt));
    }

    #[test]
    fn roundtrip() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 45).unwrap();
        let dater = Dater::new(dt).unwrap();
        let dater2 = Dater::from_qb64(&dater.qb64()).unwrap();
        assert_eq!(dater.dt(), dater2.dt());
    }

    #[test]
    fn fixture_dts_roundtrips_exactly() {
        let dts = "2020-08-22T17:50:09.988921+00:00";
        let dater = Dater::from_dts(dts).unwrap();
        assert_eq!(dater.dts(), dts);
        let dater2 = Dater::from_qb64(&dater.qb64()).unwrap();
        assert_eq!(dater2.dts(), dts);
    }

    #[test]
    fn invalid_qb64_is_rejected() {
        let raw = [0u8; 24];
        let matter = Matter::from_raw(&raw, matter_codes::DATER).unwrap();
        assert!(Dater::from_qb64(&matter.qb64()).is_err());
    }
}
