//! Canonical decimal rendering of finite doubles.

/// Size of buffer sufficient for the canonical rendering of any `f64`: sign, 17
/// mantissa digits, decimal point, `E`, exponent sign, 3 exponent digits.
const BUFFER_LEN: usize = 24;

/// The canonical decimal form of a finite `f64`: the shortest string that parses back
/// to the same value, with `.` as the decimal separator, `-` for the sign, and an
/// upper-case `E` plus signed exponent when the magnitude calls for exponent notation.
/// Integer-valued doubles render with no decimal part (`1234`, `0`, `-0`).
///
/// The digits come from [ryu]; this type re-lays them out over a stack buffer.
pub(crate) struct Canonical {
    bytes: [u8; BUFFER_LEN],
    len: usize,
}

impl Canonical {
    /// Renders `num`, **provided that `num.is_finite()`**. This is not checked except
    /// in debug assertions; a non-finite `num` renders as an unspecified string.
    pub(crate) fn new(num: f64) -> Self {
        debug_assert!(num.is_finite());

        let mut digits = ryu::Buffer::new();
        let printed = digits.format_finite(num);

        let mut canonical = Canonical { bytes: [0; BUFFER_LEN], len: 0 };
        match printed.split_once('e') {
            // 12.34 passes through; an integer value drops its trailing `.0`.
            None => canonical.push(printed.strip_suffix(".0").unwrap_or(printed)),
            // 1.234e33 -> 1.234E+33, 5e-324 -> 5E-324.
            Some((mantissa, exp)) => {
                canonical.push(mantissa);
                match exp.strip_prefix('-') {
                    Some(magnitude) => {
                        canonical.push("E-");
                        canonical.push(magnitude);
                    }
                    None => {
                        canonical.push("E+");
                        canonical.push(exp);
                    }
                }
            }
        }
        canonical
    }

    fn push(&mut self, str: &str) {
        self.bytes[self.len..self.len + str.len()].copy_from_slice(str.as_bytes());
        self.len += str.len();
    }

    pub(crate) fn as_str(&self) -> &str {
        debug_assert!(self.bytes[..self.len].is_ascii());
        // SAFETY: `push` only ever wrote bytes of a valid `&str`.
        unsafe { core::str::from_utf8_unchecked(&self.bytes[..self.len]) }
    }
}
