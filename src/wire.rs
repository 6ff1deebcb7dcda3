//! JSON wire shapes.
//!
//! Flat object per type, no envelope:
//!
//! - `Point` → `{"x": number, "y": number}`
//! - `Size` → `{"width": number, "height": number}`
//! - `Rect` → `{"x": number, "y": number, "width": number, "height": number}`
//! - `Line` → `{"start": Point, "end": Point}`
//! - `NumericRange` → `{"min": number, "max": number, "value": number|string}`
//!
//! `Rect` flattens on the wire; the origin/size composition is an
//! implementation detail. `NumericRange` re-runs the max ≥ min check
//! inside deserialization, so a malformed or inverted shape never yields
//! an instance. External collaborators (bounding-box sources, pointer
//! event adapters) are expected to produce these shapes; the event-type
//! disambiguation is entirely theirs.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::WireError;
use crate::line::Line;
use crate::log::debug;
use crate::point::Point;
use crate::range::{NumericRange, RangeOptions, Value};
use crate::rect::Rect;
use crate::size::Size;

// ============================================================================
// Parsing / encoding entry points
// ============================================================================

pub fn point_from_json(text: &str) -> Result<Point, WireError> {
    parse(text, "Point")
}

pub fn size_from_json(text: &str) -> Result<Size, WireError> {
    parse(text, "Size")
}

pub fn rect_from_json(text: &str) -> Result<Rect, WireError> {
    parse(text, "Rect")
}

pub fn line_from_json(text: &str) -> Result<Line, WireError> {
    parse(text, "Line")
}

pub fn range_from_json(text: &str) -> Result<NumericRange, WireError> {
    parse(text, "NumericRange")
}

/// Encode any wire-shaped value to JSON text.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, WireError> {
    serde_json::to_string(value).map_err(|source| WireError::Encode { source })
}

fn parse<T: DeserializeOwned>(text: &str, target: &'static str) -> Result<T, WireError> {
    serde_json::from_str(text).map_err(|source| {
        debug!("rejected {} wire shape: {}", target, source);
        WireError::Shape { target, source }
    })
}

// ============================================================================
// Rect: flattened shape
// ============================================================================

#[derive(Serialize, Deserialize)]
struct RectShape {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Serialize for Rect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        RectShape {
            x: self.origin.x,
            y: self.origin.y,
            width: self.size.width,
            height: self.size.height,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rect {
    fn deserialize<D>(deserializer: D) -> Result<Rect, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let shape = RectShape::deserialize(deserializer)?;
        Ok(Rect::new(shape.x, shape.y, shape.width, shape.height))
    }
}

// ============================================================================
// NumericRange: validated shape
// ============================================================================

#[derive(Serialize, Deserialize)]
struct RangeShape {
    min: f64,
    max: f64,
    value: Value,
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Text(t) => serializer.serialize_str(t),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Number(f64),
            Text(String),
        }
        Ok(match Shape::deserialize(deserializer)? {
            Shape::Number(n) => Value::Number(n),
            Shape::Text(t) => Value::Text(t),
        })
    }
}

/// Serializes the wire fields only; step and precision are local state,
/// not part of the shape.
impl Serialize for NumericRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        RangeShape {
            min: self.min,
            max: self.max,
            value: self.value().clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NumericRange {
    fn deserialize<D>(deserializer: D) -> Result<NumericRange, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let shape = RangeShape::deserialize(deserializer)?;
        NumericRange::new(RangeOptions {
            min: shape.min,
            max: shape.max,
            value: shape.value,
            ..RangeOptions::default()
        })
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = point_from_json(r#"{"x": 1.5, "y": -2.0}"#).unwrap();
        assert_eq!(p, Point::new(1.5, -2.0));
        insta::assert_snapshot!(to_json(&p).unwrap(), @r#"{"x":1.5,"y":-2.0}"#);
    }

    #[test]
    fn point_missing_key_is_a_shape_error() {
        let err = point_from_json(r#"{"x": 1.5}"#).unwrap_err();
        assert!(matches!(err, WireError::Shape { target: "Point", .. }));
    }

    #[test]
    fn size_shape_uses_width_and_height() {
        let s = size_from_json(r#"{"width": 3.0, "height": 4.0}"#).unwrap();
        assert_eq!(s, Size::new(3.0, 4.0));
        assert!(size_from_json(r#"{"w": 3.0, "h": 4.0}"#).is_err());
    }

    #[test]
    fn rect_flattens_on_the_wire() {
        let r = rect_from_json(r#"{"x": 60, "y": 20, "width": 20, "height": 45}"#).unwrap();
        assert_eq!(r, Rect::new(60.0, 20.0, 20.0, 45.0));
        insta::assert_snapshot!(
            to_json(&r).unwrap(),
            @r#"{"x":60.0,"y":20.0,"width":20.0,"height":45.0}"#
        );
    }

    #[test]
    fn rect_rejects_nested_origin_shape() {
        let err = rect_from_json(r#"{"origin": {"x": 0, "y": 0}, "size": {"width": 1, "height": 1}}"#)
            .unwrap_err();
        assert!(matches!(err, WireError::Shape { target: "Rect", .. }));
    }

    #[test]
    fn line_nests_point_shapes() {
        let l = line_from_json(r#"{"start": {"x": 0, "y": 0}, "end": {"x": 3, "y": 4}}"#).unwrap();
        assert_eq!(l.length(), 5.0);
        // a non-composite endpoint is a shape error
        assert!(line_from_json(r#"{"start": 5, "end": {"x": 3, "y": 4}}"#).is_err());
    }

    #[test]
    fn range_accepts_number_and_string_values() {
        let r = range_from_json(r#"{"min": 0, "max": 10, "value": 7}"#).unwrap();
        assert_eq!(r.value_of(), 7.0);
        let r = range_from_json(r#"{"min": 0, "max": 10, "value": "7.5"}"#).unwrap();
        assert_eq!(r.value_of(), 7.5);
    }

    #[test]
    fn range_wire_shape_omits_step_and_precision() {
        let r = range_from_json(r#"{"min": 0, "max": 10, "value": "3"}"#).unwrap();
        insta::assert_snapshot!(to_json(&r).unwrap(), @r#"{"min":0.0,"max":10.0,"value":"3"}"#);
    }

    #[test]
    fn inverted_range_fails_during_deserialization() {
        let err = range_from_json(r#"{"min": 6, "max": 2, "value": 3}"#).unwrap_err();
        assert!(matches!(err, WireError::Shape { target: "NumericRange", .. }));
    }

    #[test]
    fn out_of_bounds_value_still_deserializes() {
        // the value is not forced into [min, max]; only clamp does that
        let r = range_from_json(r#"{"min": 0, "max": 10, "value": 42}"#).unwrap();
        assert_eq!(r.value_of(), 42.0);
        assert!(!r.is_in_range());
    }

    #[test]
    fn garbage_text_is_a_shape_error() {
        assert!(point_from_json("not json").is_err());
        assert!(rect_from_json("[1, 2]").is_err());
    }
}
