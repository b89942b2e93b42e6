/// Pather: a SAD field path (e.g. `/a/b/0`), encoded through the Bexter wire
/// family. `/` is not in the base64url alphabet Bexter requires, so path
/// segments are joined with `-` on the wire and rendered back to `/` for
/// display. A literal `-` inside a segment would be indistinguishable from a
/// separator, so segments are escaped before joining: `_` becomes `_u` and
/// `-` becomes `_h`, which keeps every literal `-` out of the wire text
/// except the ones that are genuine separators.
use crate::core::bexter::Bexter;
use crate::error::Result;

const WIRE_SEP: char = '-';
const DISPLAY_SEP: char = '/';
const ESCAPED_ESCAPE: &str = "_u";
const ESCAPED_SEP: &str = "_h";

#[derive(Debug, Clone)]
pub struct Pather {
    bexter: Bexter,
    segments: Vec<String>,
}

impl Pather {
    pub fn new(segments: &[&str]) -> Result<Self> {
        let wire = Self::join(segments);
        let bexter = Bexter::new(&wire)?;
        Ok(Self {
            bexter,
            segments: segments.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        let bexter = Bexter::from_qb64(qb64)?;
        let segments = Self::split(&bexter.text());
        Ok(Self { bexter, segments })
    }

    // Escape order matters: the escape marker itself must be neutralized
    // first so a literal `_` in the input can never combine with a
    // subsequently-inserted `_h`/`_u` to form a spurious escape sequence.
    fn escape(segment: &str) -> String {
        segment
            .replace('_', ESCAPED_ESCAPE)
            .replace(WIRE_SEP, ESCAPED_SEP)
    }

    fn unescape(segment: &str) -> String {
        segment
            .replace(ESCAPED_SEP, &WIRE_SEP.to_string())
            .replace(ESCAPED_ESCAPE, "_")
    }

    fn join(segments: &[&str]) -> String {
        let mut wire = String::new();
        for seg in segments {
            wire.push(WIRE_SEP);
            wire.push_str(&Self::escape(seg));
        }
        wire
    }

    fn split(wire: &str) -> Vec<String> {
        if wire.is_empty() {
            return Vec::new();
        }
        wire[1..]
            .split(WIRE_SEP)
            .map(Self::unescape)
            .collect()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn path(&self) -> String {
        if self.segments.is_empty() {
            return DISPLAY_SEP.to_string();
        }
        let mut path = String::new();
        for seg in &self.segments {
            path.push(DISPLAY_SEP);
            path.push_str(seg);
        }
        path
    }

    pub fn qb64(&self) -> String {
        self.bexter.qb64()
    }

    pub fn code(&self) -> &str {
        self.bexter.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_nested_path() {
        let p = Pather::new(&["a", "b", "0"]).unwrap();
        assert_eq!(p.path(), "/a/b/0");
        let p2 = Pather::from_qb64(&p.qb64()).unwrap();
        assert_eq!(p2.segments(), p.segments());
    }

    #[test]
    fn root_path() {
        let p = Pather::new(&[]).unwrap();
        assert_eq!(p.path(), "/");
        assert!(p.segments().is_empty());
    }

    #[test]
    fn segment_with_literal_hyphen_round_trips() {
        let p = Pather::new(&["a-b", "c"]).unwrap();
        let p2 = Pather::from_qb64(&p.qb64()).unwrap();
        assert_eq!(p2.segments(), &["a-b".to_string(), "c".to_string()]);
    }

    #[test]
    fn segment_of_only_hyphens_round_trips() {
        let p = Pather::new(&["--", "x"]).unwrap();
        let p2 = Pather::from_qb64(&p.qb64()).unwrap();
        assert_eq!(p2.segments(), &["--".to_string(), "x".to_string()]);
    }
}
