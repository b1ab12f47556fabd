//! Numeric-literal evaluator.
//!
//! One entry point, [`eval_number`], applies the format's fixed priority
//! order to a matched numeric spelling:
//!
//! 1. `-0` is always a double (negative zero has no integer encoding).
//! 2. `-inf` is the double negative infinity.
//! 3. All digits: u64, falling back to a double **with a range warning**
//!    when the value exceeds 64 bits.
//! 4. `-` then all digits: i64, with the same overflow-to-double fallback.
//! 5. Anything else well-formed: a double, no fallback — doubles saturate
//!    to infinity silently per IEEE-754.
//!
//! Positive `inf` and `nan` spellings are deliberately *not* numbers here:
//! they collide with ordinary identifiers, and only the grammar has the
//! context to tell them apart.

use usda_ir::TokenValue;

/// Result of evaluating a numeric spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberParse {
    /// The parsed payload: `Uint`, `Int`, or `Double`.
    pub value: TokenValue,
    /// `true` when an integer spelling exceeded its 64-bit range and was
    /// demoted to a double. The caller owes the diagnostic sink exactly one
    /// warning for it.
    pub overflow: bool,
}

impl NumberParse {
    fn exact(value: TokenValue) -> Self {
        NumberParse {
            value,
            overflow: false,
        }
    }
}

/// Evaluate a matched numeric spelling.
///
/// Returns `None` only for text that is not a well-formed literal; spellings
/// produced by the scanner's number rule always parse.
pub fn eval_number(text: &str) -> Option<NumberParse> {
    // Rules 1 and 2: exact spellings outrank the general forms.
    if text == "-0" {
        return Some(NumberParse::exact(TokenValue::double(-0.0)));
    }
    if text == "-inf" {
        return Some(NumberParse::exact(TokenValue::double(f64::NEG_INFINITY)));
    }

    let bytes = text.as_bytes();
    if !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit) {
        // Rule 3: unsigned 64-bit, overflow demotes to double.
        return match text.parse::<u64>() {
            Ok(n) => Some(NumberParse::exact(TokenValue::Uint(n))),
            Err(_) => text.parse::<f64>().ok().map(|d| NumberParse {
                value: TokenValue::double(d),
                overflow: true,
            }),
        };
    }
    if let Some(digits) = text.strip_prefix('-') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            // Rule 4: signed 64-bit, overflow demotes to double.
            return match text.parse::<i64>() {
                Ok(n) => Some(NumberParse::exact(TokenValue::Int(n))),
                Err(_) => text.parse::<f64>().ok().map(|d| NumberParse {
                    value: TokenValue::double(d),
                    overflow: true,
                }),
            };
        }
    }

    // Rule 5: general decimal/exponential form. Out-of-range magnitudes
    // saturate to infinity inside the f64 parse itself; that is not an
    // overflow in this format's sense.
    text.parse::<f64>()
        .ok()
        .map(|d| NumberParse::exact(TokenValue::double(d)))
}
