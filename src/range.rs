//! Bounded, steppable, precision-aware numeric values.
//!
//! A [`NumericRange`] models slider-style state: a value inside (or
//! temporarily outside) a `[min, max]` interval, stepped in `step`
//! increments and formatted to a decimal precision. Unlike the geometry
//! types it is deliberately stateful: transition methods take `&mut self`,
//! queries take `&self`.

use std::fmt;

use crate::errors::RangeError;

/// A range's current value: a number, or free text awaiting coercion.
///
/// Text typically arrives from an input field; the empty string is the
/// "no value yet" sentinel.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// True for the empty-string sentinel.
    pub fn is_unset(&self) -> bool {
        matches!(self, Value::Text(t) if t.is_empty())
    }

    /// Numeric coercion.
    ///
    /// Text is stripped of every character that is not a digit, `.`, `-`,
    /// or a word character, then parsed as a leading float; NaN when no
    /// numeric prefix remains.
    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Text(t) => parse_loose(t),
        }
    }
}

impl Default for Value {
    fn default() -> Value {
        Value::Text(String::new())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

/// Construction options for [`NumericRange`].
#[derive(Clone, Debug, PartialEq)]
pub struct RangeOptions {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Fixed decimal places for formatting; `None` derives a precision
    /// from the value and the step.
    pub precision: Option<u32>,
    pub value: Value,
}

impl Default for RangeOptions {
    fn default() -> RangeOptions {
        RangeOptions {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            precision: None,
            value: Value::default(),
        }
    }
}

/// A bounded scalar with stepping and precision rules.
///
/// The value is NOT forced into `[min, max]`; only [`NumericRange::clamp`]
/// does that. The bounds themselves are validated once, at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Explicit formatting precision, when one was requested.
    pub precision: Option<u32>,
    value: Value,
    step_precision: u32,
    /// Construction-time options, kept verbatim for [`NumericRange::reset`].
    original: RangeOptions,
}

impl NumericRange {
    /// Build a range, validating `max >= min` before any instance exists.
    pub fn new(options: RangeOptions) -> Result<NumericRange, RangeError> {
        if options.max < options.min {
            return Err(RangeError::Inverted {
                min: options.min,
                max: options.max,
            });
        }
        Ok(NumericRange {
            min: options.min,
            max: options.max,
            step: options.step,
            precision: options.precision,
            value: options.value.clone(),
            step_precision: decimal_count(options.step),
            original: options,
        })
    }

    /// Range over `min..=max` with defaults for everything else.
    pub fn between(min: f64, max: f64) -> Result<NumericRange, RangeError> {
        NumericRange::new(RangeOptions {
            min,
            max,
            ..RangeOptions::default()
        })
    }

    /// Range whose value sits at fraction `p` of the span:
    /// `min + p × (max − min)`.
    ///
    /// `p` is not restricted to `[0, 1]`; out-of-range fractions land
    /// outside the bounds (clamp separately when that matters).
    pub fn from_percent(p: f64, min: f64, max: f64) -> Result<NumericRange, RangeError> {
        NumericRange::new(RangeOptions {
            min,
            max,
            value: Value::Number(min + p * (max - min)),
            ..RangeOptions::default()
        })
    }

    /// Partition a sorted value list into adjacent ranges.
    ///
    /// Entry i is bounded by its neighbors: `(values[i−1]` or `min`,
    /// `values[i+1]` or `max)`, so dragging any value is confined between
    /// the values on either side.
    pub fn from_values(
        values: &[f64],
        min: f64,
        max: f64,
    ) -> Result<Vec<NumericRange>, RangeError> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let lo = if i == 0 { min } else { values[i - 1] };
                let hi = if i + 1 == values.len() { max } else { values[i + 1] };
                NumericRange::new(RangeOptions {
                    min: lo,
                    max: hi,
                    value: Value::Number(v),
                    ..RangeOptions::default()
                })
            })
            .collect()
    }

    /// Linear interpolation from `input` to `output`.
    ///
    /// Degenerates to the output minimum when either interval has zero
    /// width, instead of dividing by zero.
    pub fn transform(input: [f64; 2], output: [f64; 2]) -> impl Fn(f64) -> f64 {
        let [in_min, in_max] = input;
        let [out_min, out_max] = output;
        move |v| {
            if in_max - in_min == 0.0 || out_max - out_min == 0.0 {
                out_min
            } else {
                out_min + (v - in_min) * (out_max - out_min) / (in_max - in_min)
            }
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Current value as a number; NaN when the value does not coerce.
    pub fn value_of(&self) -> f64 {
        self.value.to_f64()
    }

    /// Decimal digits of `step`, derived once at construction.
    pub fn step_precision(&self) -> u32 {
        self.step_precision
    }

    /// Effective formatting precision: the explicit setting if there is
    /// one, else the wider of the value's own decimals and the step's.
    /// A non-numeric value falls back to the step's precision alone.
    pub fn computed_precision(&self) -> u32 {
        if let Some(p) = self.precision {
            return p;
        }
        let v = self.value_of();
        if v.is_nan() {
            self.step_precision
        } else {
            decimal_count(v).max(self.step_precision)
        }
    }

    /// True for the unset sentinel; otherwise an inclusive bounds check.
    pub fn is_in_range(&self) -> bool {
        if self.value.is_unset() {
            return true;
        }
        let v = self.value_of();
        self.min <= v && v <= self.max
    }

    /// Position within `[min, max]` expressed as 0–100.
    pub fn to_percent(&self) -> f64 {
        (self.value_of() - self.min) * 100.0 / (self.max - self.min)
    }

    /// Fresh traversal from `min` to `max` inclusive, stepping by `step`.
    ///
    /// Each call starts over from `min`; the iterator holds no state on
    /// the range, so traversals never exhaust it.
    pub fn iter(&self) -> RangeIter {
        RangeIter {
            next: self.min,
            max: self.max,
            step: self.step,
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Replace the current value (number or text).
    pub fn set(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// Clip the value into `[min, max]`.
    ///
    /// Reformats to the explicit precision only; the computed precision is
    /// a display concern and does not round the stored value. A
    /// non-numeric value clamps to NaN and stays NaN.
    pub fn clamp(&mut self) {
        let clipped = self.value_of().clamp(self.min, self.max);
        let stored = match self.precision {
            Some(p) => round_to(clipped, p),
            None => clipped,
        };
        self.value = Value::Number(stored);
    }

    /// Step the value up. An unset value seeds from the step itself.
    ///
    /// No clamping: call [`NumericRange::clamp`] afterward if bounding is
    /// required.
    pub fn increment(&mut self, step: Option<f64>) {
        let step = step.unwrap_or(self.step);
        let next = if self.value.is_unset() {
            step
        } else {
            self.value_of() + step
        };
        self.value = Value::Number(next);
    }

    /// Step the value down. An unset value seeds from the negated step.
    pub fn decrement(&mut self, step: Option<f64>) {
        let step = step.unwrap_or(self.step);
        let next = if self.value.is_unset() {
            -step
        } else {
            self.value_of() - step
        };
        self.value = Value::Number(next);
    }

    /// Round to the nearest multiple of `step`, stored at the step's own
    /// precision (not the computed precision).
    pub fn snap_to_step(&mut self) {
        let snapped = (self.value_of() / self.step).round() * self.step;
        self.value = Value::Number(round_to(snapped, self.step_precision));
    }

    /// Restore value, step, min, max, and precision from the options
    /// captured at construction time (not the current mutated state).
    pub fn reset(&mut self) {
        let RangeOptions {
            min,
            max,
            step,
            precision,
            value,
        } = self.original.clone();
        self.min = min;
        self.max = max;
        self.step = step;
        self.precision = precision;
        self.value = value;
        self.step_precision = decimal_count(step);
    }
}

/// Formats the numeric value at [`NumericRange::computed_precision`]
/// fixed decimal places.
impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.*}",
            self.computed_precision() as usize,
            self.value_of()
        )
    }
}

impl<'a> IntoIterator for &'a NumericRange {
    type Item = f64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Finite traversal of a range's step grid. See [`NumericRange::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    next: f64,
    max: f64,
    step: f64,
}

impl Iterator for RangeIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        // a non-positive (or NaN) step would never terminate
        if !(self.step > 0.0) || !(self.next <= self.max) {
            return None;
        }
        let current = self.next;
        self.next = current + self.step;
        Some(current)
    }
}

/// Count decimal digits by scaling until rounding is exact.
///
/// `0.25` has two, `3.0` has none. Capped at 15 digits, the edge of f64
/// decimal precision; non-finite input reports zero.
fn decimal_count(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let mut factor = 1.0;
    let mut digits = 0;
    while (value * factor).round() / factor != value && digits < 15 {
        factor *= 10.0;
        digits += 1;
    }
    digits
}

/// Round to `digits` decimal places.
fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// parseFloat-style coercion: strip everything that is not a digit, `.`,
/// `-`, or a word character, then take the longest numeric prefix.
fn parse_loose(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c == '.' || c == '-')
        .collect();
    let mut ends: Vec<usize> = cleaned.char_indices().map(|(i, _)| i).collect();
    ends.push(cleaned.len());
    for &end in ends.iter().rev() {
        if end == 0 {
            break;
        }
        if let Ok(v) = cleaned[..end].parse::<f64>() {
            return v;
        }
    }
    f64::NAN
}
