use crate::node::NodeLocation;
use std::borrow::Borrow;
use std::fmt;
use std::hash;
use std::sync::Arc;

/// Create a [`Name`] from a string literal or identifier, checked for validity
/// at compile time.
///
/// A `Name` created this way does not own allocated memory.
///
/// ```
/// use graphql_values::name;
///
/// let name = name!("Query");
/// let name_2 = name!(Query);
/// assert_eq!(name, name_2);
/// ```
#[macro_export]
macro_rules! name {
    ($value: ident) => {
        $crate::name!(stringify!($value))
    };
    ($value: expr) => {{
        const _: () = { assert!($crate::Name::valid_syntax($value)) };
        $crate::Name::new_static_unchecked($value)
    }};
}

/// A GraphQL identifier
///
/// Like [`Node`][crate::Node], this string type has cheap `Clone`
/// and carries an optional source location.
///
/// Internally, the string value is either an atomically reference-counted
/// `Arc<str>` or a `&'static str` borrow that lives until the end of the program.
#[derive(Clone)]
pub struct Name {
    repr: Repr,
    location: Option<NodeLocation>,
}

#[derive(Clone)]
enum Repr {
    Static(&'static str),
    Heap(Arc<str>),
}

/// Refers to the name of a GraphQL type defined elsewhere
pub type NamedType = Name;

/// Tried to create a [`Name`] from a string that is not in valid
/// [GraphQL name](https://spec.graphql.org/October2021/#sec-Names) syntax.
#[derive(Clone, Eq, PartialEq, thiserror::Error)]
#[error("`{name}` is not a valid GraphQL name")]
pub struct InvalidNameError {
    pub name: String,
    pub location: Option<NodeLocation>,
}

impl Name {
    /// Create a new `Name` parsed from the given source location
    pub fn new_parsed(value: &str, location: NodeLocation) -> Result<Self, InvalidNameError> {
        Self::check_valid_syntax(value, Some(location))?;
        Ok(Self {
            repr: Repr::Heap(Arc::from(value)),
            location: Some(location),
        })
    }

    /// Create a new `Name` programatically, not parsed from a source file
    pub fn new(value: &str) -> Result<Self, InvalidNameError> {
        Self::check_valid_syntax(value, None)?;
        Ok(Self {
            repr: Repr::Heap(Arc::from(value)),
            location: None,
        })
    }

    /// Create a new static `Name` programatically, not parsed from a source file
    pub fn new_static(value: &'static str) -> Result<Self, InvalidNameError> {
        Self::check_valid_syntax(value, None)?;
        Ok(Self::new_static_unchecked(value))
    }

    /// Create a new static `Name` programatically, not parsed from a source file,
    /// without validity checking.
    ///
    /// Constructing an invalid name may cause invalid serialization
    /// but not memory-safety issues.
    pub const fn new_static_unchecked(value: &'static str) -> Self {
        Self {
            repr: Repr::Static(value),
            location: None,
        }
    }

    pub fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.repr {
            Repr::Static(s) => s,
            Repr::Heap(arc) => arc,
        }
    }

    /// If this `Name` was created with [`new_static`][Self::new_static]
    /// or the [`name!`][crate::name!] macro, return the string with `'static` lifetime.
    pub fn as_static_str(&self) -> Option<&'static str> {
        match self.repr {
            Repr::Static(s) => Some(s),
            Repr::Heap(_) => None,
        }
    }

    /// Returns whether the given string is a valid GraphQL name.
    ///
    /// <https://spec.graphql.org/October2021/#Name>
    pub const fn valid_syntax(value: &str) -> bool {
        let bytes = value.as_bytes();
        if bytes.is_empty() || !Self::char_is_name_start(bytes[0]) {
            return false;
        }
        let mut i = 1;
        while i < bytes.len() {
            if !Self::char_is_name_continue(bytes[i]) {
                return false;
            }
            i += 1
        }
        true
    }

    fn check_valid_syntax(
        value: &str,
        location: Option<NodeLocation>,
    ) -> Result<(), InvalidNameError> {
        if Self::valid_syntax(value) {
            Ok(())
        } else {
            Err(InvalidNameError {
                name: value.to_owned(),
                location,
            })
        }
    }

    /// <https://spec.graphql.org/October2021/#NameStart>
    const fn char_is_name_start(byte: u8) -> bool {
        byte.is_ascii_alphabetic() || byte == b'_'
    }

    /// <https://spec.graphql.org/October2021/#NameContinue>
    const fn char_is_name_continue(byte: u8) -> bool {
        byte.is_ascii_alphanumeric() || byte == b'_'
    }
}

impl std::ops::Deref for Name {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl hash::Hash for Name {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        // Must agree with `str` for `Borrow<str>` keyed lookups
        self.as_str().hash(state)
    }
}

impl Eq for Name {}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl TryFrom<&str> for Name {
    type Error = InvalidNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Name {
    type Error = InvalidNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Debug for InvalidNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

impl serde::Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct NameVisitor;

        impl serde::de::Visitor<'_> for NameVisitor {
            type Value = Name;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a GraphQL name")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Name::new(v).map_err(|err| E::custom(err.to_string()))
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_and_invalid_syntax() {
        assert!(Name::valid_syntax("_"));
        assert!(Name::valid_syntax("_Type"));
        assert!(Name::valid_syntax("snake_case"));
        assert!(Name::valid_syntax("v123"));
        assert!(!Name::valid_syntax(""));
        assert!(!Name::valid_syntax("1leading_digit"));
        assert!(!Name::valid_syntax("kebab-case"));
        assert!(!Name::valid_syntax("è_é"));
    }

    #[test]
    fn lookup_by_str() {
        let mut map = indexmap::IndexMap::new();
        map.insert(name!("episode"), 42);
        assert_eq!(map.get("episode"), Some(&42));
    }
}
