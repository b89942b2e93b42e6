/// Texter: variable-length primitive carrying arbitrary text as literal
/// bytes (unlike Bexter, which treats its raw material as base64url-decoded
/// text).
use crate::core::matter::{select_variable_code, Matter};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Texter {
    matter: Matter,
}

impl Texter {
    pub fn new(text: &str) -> Result<Self> {
        let raw = text.as_bytes();
        let code = select_variable_code(raw.len());
        let matter = Matter::from_raw(raw, code)?;
        Ok(Self { matter })
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        let matter = Matter::from_qb64(qb64)?;
        Ok(Self { matter })
    }

    pub fn text(&self) -> Result<String> {
        Ok(String::from_utf8(self.matter.raw().to_vec())?)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_arbitrary_text() {
        let t = Texter::new("hello, world!").unwrap();
        assert_eq!(t.text().unwrap(), "hello, world!");
        let t2 = Texter::from_qb64(&t.qb64()).unwrap();
        assert_eq!(t2.text().unwrap(), "hello, world!");
    }

    #[test]
    fn roundtrip_empty() {
        let t = Texter::new("").unwrap();
        assert_eq!(t.text().unwrap(), "");
    }

    #[test]
    fn carries_bytes_outside_base64_alphabet() {
        let t = Texter::new("not valid base64url!! @#").unwrap();
        assert_eq!(t.text().unwrap(), "not valid base64url!! @#");
    }
}
