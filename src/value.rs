//! The YAML value model.
//!
//! This module provides [`Element`], the tagged union representing any
//! parsed YAML value, and [`Item`], the thin wrapper that lets sequences
//! and mappings contain values recursively without an infinite-size type.
//!
//! ## Core Types
//!
//! - [`Element`]: a closed variant over null, string, double, int, bool,
//!   sequence, and mapping
//! - [`Item`]: one wrapped `Element`; semantically identical to it
//! - [`Sequence`]: an ordered list of items (`Vec<Item>`)
//!
//! An element exclusively owns its nested payload: cloning performs a
//! full deep copy, and `std::mem::take` leaves `Element::None` behind.
//!
//! ## Usage Patterns
//!
//! ```rust
//! use yamlite::Element;
//!
//! let value = Element::from(42);
//! assert!(value.is_int());
//! assert!(value.is_scalar());
//! assert_eq!(value.as_int().unwrap(), 42);
//! assert!(value.as_str().is_err());
//! ```
//!
//! Bounds-checked container access goes through the associated functions:
//!
//! ```rust
//! use yamlite::{Element, Item};
//!
//! let seq = vec![Item::new(Element::from("a"))];
//! assert_eq!(Element::at(&seq, 0).unwrap().value.as_str().unwrap(), "a");
//! assert!(Element::at(&seq, 5).is_err());
//! ```

use crate::{Error, Mapping, Result};
use serde::de::{self, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A YAML sequence: an ordered list of items.
pub type Sequence = Vec<Item>;

/// A dynamically-typed representation of any YAML value.
///
/// Exactly one variant payload is meaningful per instance. Accessing a
/// payload through the wrong `as_*` accessor fails with [`Error::Type`].
///
/// # Examples
///
/// ```rust
/// use yamlite::Element;
///
/// let null = Element::None;
/// let num = Element::Int(42);
/// let text = Element::String("hello".to_string());
///
/// assert!(null.is_none());
/// assert!(num.is_int());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Element {
    /// No value (null in YAML)
    #[default]
    None,
    /// UTF-8 string value
    String(String),
    /// Double precision float
    Double(f64),
    /// Signed integer
    Int(i64),
    /// Boolean true/false
    Bool(bool),
    /// Sequence (ordered list of items)
    Seq(Sequence),
    /// Mapping (string-keyed, key-sorted)
    Map(Mapping),
}

/// Wrapper holding one [`Element`].
///
/// Exists purely so `Seq`/`Map` can contain values recursively; treat it
/// as the element it wraps.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Item {
    /// The wrapped element
    pub value: Element,
}

impl Item {
    /// Wraps an element.
    #[must_use]
    pub fn new(value: Element) -> Self {
        Item { value }
    }
}

impl From<Element> for Item {
    fn from(value: Element) -> Self {
        Item { value }
    }
}

impl Element {
    /// Returns `true` if the element is null.
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Element::None)
    }

    /// Returns `true` if the element is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Element::String(_))
    }

    /// Returns `true` if the element is a double.
    #[inline]
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Element::Double(_))
    }

    /// Returns `true` if the element is an integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Element::Int(_))
    }

    /// Returns `true` if the element is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Element::Bool(_))
    }

    /// Returns `true` if the element is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_seq(&self) -> bool {
        matches!(self, Element::Seq(_))
    }

    /// Returns `true` if the element is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Element::Map(_))
    }

    /// Returns `true` for string, double, int, and bool elements.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Element::String(_) | Element::Double(_) | Element::Int(_) | Element::Bool(_)
        )
    }

    /// The kind name of this element, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Element::None => "none",
            Element::String(_) => "string",
            Element::Double(_) => "double",
            Element::Int(_) => "int",
            Element::Bool(_) => "bool",
            Element::Seq(_) => "sequence",
            Element::Map(_) => "mapping",
        }
    }

    /// Returns the string payload, or [`Error::Type`] for any other kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlite::Element;
    ///
    /// assert_eq!(Element::from("hello").as_str().unwrap(), "hello");
    /// assert!(Element::from(42).as_str().is_err());
    /// ```
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Element::String(s) => Ok(s),
            other => Err(Error::type_mismatch("string", other.type_name())),
        }
    }

    /// Returns the double payload, or [`Error::Type`] for any other kind.
    pub fn as_double(&self) -> Result<f64> {
        match self {
            Element::Double(d) => Ok(*d),
            other => Err(Error::type_mismatch("double", other.type_name())),
        }
    }

    /// Returns the integer payload, or [`Error::Type`] for any other kind.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Element::Int(i) => Ok(*i),
            other => Err(Error::type_mismatch("int", other.type_name())),
        }
    }

    /// Returns the boolean payload, or [`Error::Type`] for any other kind.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Element::Bool(b) => Ok(*b),
            other => Err(Error::type_mismatch("bool", other.type_name())),
        }
    }

    /// Returns the sequence payload, or [`Error::Type`] for any other kind.
    pub fn as_seq(&self) -> Result<&Sequence> {
        match self {
            Element::Seq(seq) => Ok(seq),
            other => Err(Error::type_mismatch("sequence", other.type_name())),
        }
    }

    /// Returns the mapping payload, or [`Error::Type`] for any other kind.
    pub fn as_map(&self) -> Result<&Mapping> {
        match self {
            Element::Map(map) => Ok(map),
            other => Err(Error::type_mismatch("mapping", other.type_name())),
        }
    }

    /// Bounds-checked sequence access.
    ///
    /// # Errors
    ///
    /// [`Error::Index`] when `index` is out of bounds.
    pub fn at(seq: &Sequence, index: usize) -> Result<&Item> {
        seq.get(index).ok_or_else(|| Error::index(index, seq.len()))
    }

    /// Checked mapping access.
    ///
    /// # Errors
    ///
    /// [`Error::Key`] when `key` is absent.
    pub fn at_key<'a>(map: &'a Mapping, key: &str) -> Result<&'a Item> {
        map.get(key).ok_or_else(|| Error::key(key))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::None => write!(f, "null"),
            Element::String(s) => write!(f, "{}", s),
            Element::Double(d) => write!(f, "{}", d),
            Element::Int(i) => write!(f, "{}", i),
            Element::Bool(b) => write!(f, "{}", b),
            Element::Seq(seq) => write!(f, "[{} items]", seq.len()),
            Element::Map(map) => write!(f, "{{{} keys}}", map.len()),
        }
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::Bool(value)
    }
}

impl From<i8> for Element {
    fn from(value: i8) -> Self {
        Element::Int(value as i64)
    }
}

impl From<i16> for Element {
    fn from(value: i16) -> Self {
        Element::Int(value as i64)
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Element::Int(value as i64)
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Int(value)
    }
}

impl From<u8> for Element {
    fn from(value: u8) -> Self {
        Element::Int(value as i64)
    }
}

impl From<u16> for Element {
    fn from(value: u16) -> Self {
        Element::Int(value as i64)
    }
}

impl From<u32> for Element {
    fn from(value: u32) -> Self {
        Element::Int(value as i64)
    }
}

impl From<f32> for Element {
    fn from(value: f32) -> Self {
        Element::Double(value as f64)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Double(value)
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::String(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::String(value.to_string())
    }
}

impl From<Sequence> for Element {
    fn from(value: Sequence) -> Self {
        Element::Seq(value)
    }
}

impl From<Mapping> for Element {
    fn from(value: Mapping) -> Self {
        Element::Map(value)
    }
}

impl Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Element::None => serializer.serialize_unit(),
            Element::String(s) => serializer.serialize_str(s),
            Element::Double(d) => serializer.serialize_f64(*d),
            Element::Int(i) => serializer.serialize_i64(*i),
            Element::Bool(b) => serializer.serialize_bool(*b),
            Element::Seq(seq) => {
                let mut s = serializer.serialize_seq(Some(seq.len()))?;
                for item in seq {
                    s.serialize_element(&item.value)?;
                }
                s.end()
            }
            Element::Map(map) => {
                let mut m = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    m.serialize_entry(k, &v.value)?;
                }
                m.end()
            }
        }
    }
}

impl Serialize for Item {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ElementVisitor;

        impl<'de> Visitor<'de> for ElementVisitor {
            type Value = Element;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any YAML value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(Element::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(Element::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Element::Int(value as i64))
                } else {
                    Ok(Element::Double(value as f64))
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(Element::Double(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(Element::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(Element::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(Element::None)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(Element::None)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Sequence::new();
                while let Some(elem) = seq.next_element::<Element>()? {
                    items.push(Item::new(elem));
                }
                Ok(Element::Seq(items))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = Mapping::new();
                while let Some((key, value)) = map.next_entry::<String, Element>()? {
                    entries.insert(key, Item::new(value));
                }
                Ok(Element::Map(entries))
            }
        }

        deserializer.deserialize_any(ElementVisitor)
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Element::deserialize(deserializer).map(Item::new)
    }
}
