/// Tagger: a fixed-size base64 token (1-10 characters) stored in its own
/// compact code family, one member per token length. Unlike Bexter, a
/// Tagger's code alone tells a reader how many characters the token holds --
/// there is no soft quadlet-count field to decode first.
use crate::core::codes::matter_codes;
use crate::core::matter::Matter;
use crate::error::{CesrError, Result};

fn is_b64_safe(text: &str) -> bool {
    text.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn code_for_len(n: usize) -> Result<&'static str> {
    use matter_codes::*;
    match n {
        1 => Ok(TAG1),
        2 => Ok(TAG2),
        3 => Ok(TAG3),
        4 => Ok(TAG4),
        5 => Ok(TAG5),
        6 => Ok(TAG6),
        7 => Ok(TAG7),
        8 => Ok(TAG8),
        9 => Ok(TAG9),
        10 => Ok(TAG10),
        _ => Err(CesrError::InvalidFormat(format!(
            "tag length {n} is outside the supported 1..=10 range"
        ))),
    }
}

fn len_for_code(code: &str) -> Option<usize> {
    use matter_codes::*;
    match code {
        TAG1 => Some(1),
        TAG2 => Some(2),
        TAG3 => Some(3),
        TAG4 => Some(4),
        TAG5 => Some(5),
        TAG6 => Some(6),
        TAG7 => Some(7),
        TAG8 => Some(8),
        TAG9 => Some(9),
        TAG10 => Some(10),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct Tagger {
    matter: Matter,
}

impl Tagger {
    pub fn new(tag: &str) -> Result<Self> {
        if tag.is_empty() {
            return Err(CesrError::InvalidFormat("tag must not be empty".to_string()));
        }
        if !is_b64_safe(tag) {
            return Err(CesrError::InvalidFormat(format!(
                "'{tag}' is not a base64url-safe string"
            )));
        }
        let code = code_for_len(tag.len())?;
        let matter = Matter::from_raw(tag.as_bytes(), code)?;
        Ok(Self { matter })
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        let matter = Matter::from_qb64(qb64)?;
        if len_for_code(matter.code()).is_none() {
            return Err(CesrError::InvalidCode(format!(
                "'{}' is not a registered Tagger code",
                matter.code()
            )));
        }
        Ok(Self { matter })
    }

    pub fn tag(&self) -> String {
        String::from_utf8_lossy(self.matter.raw()).into_owned()
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
