/// Matter: the CESR encoding engine shared by every typed primitive.
///
/// A Matter couples a derivation code with a raw byte payload and knows how
/// to move between the three CESR domains: `raw` (unframed bytes), `qb64`
/// (text, self-framing via the derivation code) and `qb2` (binary form of
/// the same framed stream). Typed primitives (Verfer, Diger, Seqner, ...)
/// wrap a Matter rather than inheriting from it.
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

use crate::core::codes::{extract_hard, sizage, Sizage};
use crate::error::{CesrError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matter {
    code: String,
    raw: Vec<u8>,
    /// Quadlet count for variable-length codes; unused (0) for fixed codes.
    size: usize,
    /// Cached from the code at construction, so later projections never
    /// need to re-validate the code through a fallible lookup.
    sizage: Sizage,
}

impl Matter {
    /// Build from raw bytes and a derivation code, validating raw length
    /// against the code's registered sizage.
    pub fn from_raw(raw: &[u8], code: &str) -> Result<Self> {
        let sz = sizage(code)?;
        match sz.fs {
            Some(_) => {
                let expected = match sz.raw_size() {
                    Some(rs) => rs,
                    None => {
                        return Err(CesrError::InvalidCode(format!(
                            "'{code}' is registered as fixed but has no raw size"
                        )))
                    }
                };
                if raw.len() != expected {
                    return Err(CesrError::RawMaterialSize {
                        code: code.to_string(),
                        expected,
                        actual: raw.len(),
                    });
                }
                Ok(Self {
                    code: code.to_string(),
                    raw: raw.to_vec(),
                    size: 0,
                    sizage: sz,
                })
            }
            None => {
                let lead = sz.ls;
                let padded_len = lead + raw.len();
                if padded_len % 3 != 0 {
                    return Err(CesrError::RawMaterialSize {
                        code: code.to_string(),
                        expected: ((raw.len() + 2) / 3) * 3 - lead,
                        actual: raw.len(),
                    });
                }
                let size = padded_len / 3;
                let max_size = 1usize << (6 * sz.ss);
                if size >= max_size {
                    return Err(CesrError::ValueOverflow(format!(
                        "raw material too large for code '{code}': {size} quadlets"
                    )));
                }
                Ok(Self {
                    code: code.to_string(),
                    raw: raw.to_vec(),
                    size,
                    sizage: sz,
                })
            }
        }
    }

    /// Parse from a qb64 (text) encoding.
    ///
    /// The registry keys variable codes by their hard part alone (the soft
    /// digits that follow are per-instance quadlet counts, not part of the
    /// code identity), so one table lookup on the extracted hard part always
    /// resolves both fixed and variable codes.
    pub fn from_qb64(qb64: &str) -> Result<Self> {
        let hard = extract_hard(qb64)?.to_string();
        let sz = sizage(&hard)?;
        match sz.fs {
            Some(fs) => Self::decode_fixed(qb64, &hard, sz, fs),
            None => Self::decode_variable(qb64, &hard, sz),
        }
    }

    fn decode_fixed(qb64: &str, code: &str, sz: Sizage, fs: usize) -> Result<Self> {
        if qb64.len() < fs {
            return Err(CesrError::ShortMaterial {
                expected: fs,
                actual: qb64.len(),
            });
        }
        let hs = sz.hs;
        let rs = match sz.raw_size() {
            Some(rs) => rs,
            None => {
                return Err(CesrError::InvalidCode(format!(
                    "'{code}' is registered as fixed but has no raw size"
                )))
            }
        };
        let ps = (hs + sz.ss) % 4;
        let body = &qb64[hs..fs];

        let mut full_b64 = String::with_capacity(ps + body.len());
        full_b64.push_str(&"A".repeat(ps));
        full_b64.push_str(body);

        let decoded = URL_SAFE_NO_PAD
            .decode(full_b64.as_bytes())
            .map_err(CesrError::Base64Error)?;

        if decoded.len() != rs + ps {
            return Err(CesrError::RawMaterialSize {
                code: code.to_string(),
                expected: rs,
                actual: decoded.len().saturating_sub(ps),
            });
        }
        if decoded[..ps].iter().any(|&b| b != 0) {
            return Err(CesrError::NonZeroPadding(code.to_string()));
        }

        Ok(Self {
            code: code.to_string(),
            raw: decoded[ps..].to_vec(),
            size: 0,
            sizage: sz,
        })
    }

    fn decode_variable(qb64: &str, code: &str, sz: Sizage) -> Result<Self> {
        let hs = sz.hs;
        let ss = sz.ss;
        if qb64.len() < hs + ss {
            return Err(CesrError::ShortMaterial {
                expected: hs + ss,
                actual: qb64.len(),
            });
        }
        let soft = &qb64[hs..hs + ss];
        let size = b64_to_int(soft)?;
        let nchars = size * 4;
        let fs = hs + ss + nchars;
        if qb64.len() < fs {
            return Err(CesrError::ShortMaterial {
                expected: fs,
                actual: qb64.len(),
            });
        }
        let body = &qb64[hs + ss..fs];
        let decoded = URL_SAFE_NO_PAD
            .decode(body.as_bytes())
            .map_err(CesrError::Base64Error)?;

        let lead = sz.ls;
        if decoded.len() < lead || decoded[..lead].iter().any(|&b| b != 0) {
            return Err(CesrError::NonZeroPadding(code.to_string()));
        }

        Ok(Self {
            code: code.to_string(),
            raw: decoded[lead..].to_vec(),
            size,
            sizage: sz,
        })
    }

    /// Parse from the binary (qb2) domain: qb2 is the raw decode of the full
    /// qb64 stream, so we rebuild the qb64 text and reuse `from_qb64`.
    pub fn from_qb2(qb2: &[u8]) -> Result<Self> {
        let qb64 = URL_SAFE_NO_PAD.encode(qb2);
        Self::from_qb64(&qb64)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Quadlet count for a variable-length code (0 for fixed codes).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Text (qb64) encoding.
    pub fn qb64(&self) -> String {
        match self.sizage.fs {
            Some(_) => self.encode_fixed(&self.sizage),
            None => self.encode_variable(&self.sizage),
        }
    }

    /// Qualified text, as bytes.
    pub fn qb64b(&self) -> Vec<u8> {
        self.qb64().into_bytes()
    }

    /// Binary (qb2) form: base64url decode of the full qb64 stream.
    pub fn qb2(&self) -> Result<Vec<u8>> {
        URL_SAFE_NO_PAD
            .decode(self.qb64().as_bytes())
            .map_err(CesrError::Base64Error)
    }

    fn encode_fixed(&self, sz: &Sizage) -> String {
        let hs = sz.hs;
        let ps = hs % 4;
        let mut padded = vec![0u8; ps];
        padded.extend_from_slice(&self.raw);

        let full_b64 = URL_SAFE_NO_PAD.encode(&padded);
        let body = &full_b64[ps..];

        let mut qb64 = String::with_capacity(hs + body.len());
        qb64.push_str(&self.code);
        qb64.push_str(body);
        qb64
    }

    fn encode_variable(&self, sz: &Sizage) -> String {
        let lead = sz.ls;
        let mut padded = vec![0u8; lead];
        padded.extend_from_slice(&self.raw);

        let soft = int_to_b64(self.size, sz.ss);
        let body = URL_SAFE_NO_PAD.encode(&padded);

        let mut qb64 = String::with_capacity(sz.hs + sz.ss + body.len());
        qb64.push_str(&self.code);
        qb64.push_str(&soft);
        qb64.push_str(&body);
        qb64
    }
}

/// Pick the smallest registered variable-length code family member that fits
/// `raw_len` bytes of payload, given the lead-byte class needed to pad it to
/// a multiple of 3.
pub fn select_variable_code(raw_len: usize) -> &'static str {
    use crate::core::codes::matter_codes::*;
    let lead = (3 - raw_len % 3) % 3;
    let size = (lead + raw_len) / 3;
    const SMALL_MAX: usize = 1 << (6 * 2); // ss=2 digits
    if size < SMALL_MAX {
        match lead {
            0 => VAR_LEAD0,
            1 => VAR_LEAD1,
            _ => VAR_LEAD2,
        }
    } else {
        match lead {
            0 => VAR_BIG_LEAD0,
            1 => VAR_BIG_LEAD1,
            _ => VAR_BIG_LEAD2,
        }
    }
}

/// Encode `num` as a fixed-width base64url string of `length` digits.
pub fn int_to_b64(num: usize, length: usize) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
    let mut digits = vec![0u8; length];
    let mut n = num;
    for i in (0..length).rev() {
        digits[i] = ALPHABET[n & 0x3f];
        n >>= 6;
    }
    String::from_utf8_lossy(&digits).into_owned()
}

/// Decode a fixed-width base64url digit string to an integer.
pub fn b64_to_int(s: &str) -> Result<usize> {
    const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
    let mut n: usize = 0;
    for c in s.chars() {
        let v = ALPHABET
            .find(c)
            .ok_or_else(|| CesrError::InvalidSoft(s.to_string(), format!("'{c}' not in base64url alphabet")))?;
        n = (n << 6) | v;
    }
    Ok(n)
}
