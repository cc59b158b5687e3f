//! Deterministic rendering of plain values as Go source literals.
//!
//! Mapping keys are held in a [`BTreeMap`], so key order in the output
//! is fixed structurally rather than by a post-hoc sort. Conversion
//! from [`serde_json::Value`] re-keys objects into that sorted form,
//! which is what makes literal emission reproducible across runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::emitter::Emitter;

/// A plain value that can be embedded in generated source as a literal.
///
/// The shapes form a closed set: scalars, an ordered sequence, and a
/// key-sorted mapping. Nesting is unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// The absent value, rendered `nil`.
    Nil,
    /// Boolean literal.
    Bool(bool),
    /// Signed integer literal.
    Int(i64),
    /// Unsigned integer literal.
    Uint(u64),
    /// Floating point literal.
    Float(f64),
    /// String literal, quoted with Go escapes.
    Str(String),
    /// Ordered sequence, rendered `[]interface{}{...}`.
    Array(Vec<Literal>),
    /// Key-sorted mapping, rendered `map[string]interface{}{...}`.
    Object(BTreeMap<String, Literal>),
}

impl Literal {
    /// Create a string literal.
    pub fn str(v: impl Into<String>) -> Self {
        Self::Str(v.into())
    }

    /// Create a signed integer literal.
    pub fn int(v: i64) -> Self {
        Self::Int(v)
    }

    /// Create an unsigned integer literal.
    pub fn uint(v: u64) -> Self {
        Self::Uint(v)
    }

    /// Create a float literal.
    pub fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Create a boolean literal.
    pub fn bool(v: bool) -> Self {
        Self::Bool(v)
    }

    /// Create a sequence literal.
    pub fn array(items: impl IntoIterator<Item = Literal>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    /// Create a mapping literal; keys are sorted on insertion.
    pub fn object(entries: impl IntoIterator<Item = (String, Literal)>) -> Self {
        Self::Object(entries.into_iter().collect())
    }

    /// Write the value as Go literal syntax.
    ///
    /// Non-empty sequences and mappings span multiple lines, one
    /// element per line, indented one level past the cursor line.
    pub fn generate(&self, out: &mut Emitter) {
        match self {
            Self::Nil => out.print("nil"),
            Self::Bool(v) => out.print(if *v { "true" } else { "false" }),
            Self::Int(v) => out.print(&v.to_string()),
            Self::Uint(v) => out.print(&v.to_string()),
            Self::Float(v) => out.print(&format_float(*v)),
            Self::Str(v) => out.print(&quote(v)),
            Self::Array(items) => {
                if items.is_empty() {
                    out.print("[]interface{}{}");
                    return;
                }
                out.println("[]interface{}{");
                out.indent(1);
                for item in items {
                    item.generate(out);
                    out.println(",");
                }
                out.indent(-1);
                out.print("}");
            }
            Self::Object(entries) => {
                if entries.is_empty() {
                    out.print("map[string]interface{}{}");
                    return;
                }
                out.println("map[string]interface{}{");
                out.indent(1);
                for (key, value) in entries {
                    out.print(&quote(key));
                    out.print(": ");
                    value.generate(out);
                    out.println(",");
                }
                out.indent(-1);
                out.print("}");
            }
        }
    }
}

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Literal {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Literal {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<serde_json::Value> for Literal {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(v) => Self::Bool(v),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Uint(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(entries) => Self::Object(
                entries.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

/// Quote a string as a Go double-quoted literal.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

// Whole floats print without a fraction, matching Go's %v verb.
fn format_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: &Literal) -> String {
        let mut out = Emitter::go();
        value.generate(&mut out);
        out.finish()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(&Literal::Nil), "nil");
        assert_eq!(render(&Literal::bool(true)), "true");
        assert_eq!(render(&Literal::int(-42)), "-42");
        assert_eq!(render(&Literal::uint(7)), "7");
        assert_eq!(render(&Literal::float(3.0)), "3");
        assert_eq!(render(&Literal::float(2.5)), "2.5");
        assert_eq!(render(&Literal::str("hi")), "\"hi\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a \"b\"\n"), "\"a \\\"b\\\"\\n\"");
        assert_eq!(quote("tab\there"), "\"tab\\there\"");
        assert_eq!(quote("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn test_empty_composites() {
        assert_eq!(render(&Literal::array([])), "[]interface{}{}");
        assert_eq!(render(&Literal::object([])), "map[string]interface{}{}");
    }

    #[test]
    fn test_array_multi_line() {
        let value = Literal::array([Literal::int(1), Literal::str("two")]);
        assert_eq!(
            render(&value),
            "[]interface{}{\n\t1,\n\t\"two\",\n}"
        );
    }

    #[test]
    fn test_object_keys_sorted() {
        let value = Literal::object([
            ("zebra".to_string(), Literal::int(1)),
            ("apple".to_string(), Literal::int(2)),
        ]);
        assert_eq!(
            render(&value),
            "map[string]interface{}{\n\t\"apple\": 2,\n\t\"zebra\": 1,\n}"
        );
    }

    #[test]
    fn test_nested_composite_indentation() {
        let value = Literal::object([(
            "items".to_string(),
            Literal::array([Literal::bool(false)]),
        )]);
        assert_eq!(
            render(&value),
            "map[string]interface{}{\n\t\"items\": []interface{}{\n\t\tfalse,\n\t},\n}"
        );
    }

    #[test]
    fn test_from_json_value_sorts_keys() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"b": 1, "a": [null, true]}"#).unwrap();
        let value = Literal::from(json);
        assert_eq!(
            render(&value),
            "map[string]interface{}{\n\t\"a\": []interface{}{\n\t\tnil,\n\t\ttrue,\n\t},\n\t\"b\": 1,\n}"
        );
    }

    #[test]
    fn test_from_json_rendering_is_stable() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"x": 1, "c": 2, "m": 3}"#).unwrap();
        let value = Literal::from(json);
        assert_eq!(render(&value), render(&value.clone()));
        assert!(render(&value).find("\"c\"").unwrap() < render(&value).find("\"m\"").unwrap());
    }
}
