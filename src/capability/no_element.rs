//! The placeholder element type.

use std::fmt;

/// An element type with no values.
///
/// `NoElement` fills the element-type slot of containers that can never
/// hold anything: `ImmutableEnumSet::<NoElement>::all_of()` is empty, and
/// so is every other container over it. Type-erased factories refuse to
/// build into it.
///
/// # Examples
///
/// ```rust
/// use frozen::capability::NoElement;
/// use frozen::immutable::ImmutableList;
///
/// let nothing: ImmutableList<NoElement> = ImmutableList::empty();
/// assert!(nothing.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoElement {}

impl fmt::Display for NoElement {
    fn fmt(&self, _formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NoElement {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {}
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NoElement {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Err(serde::de::Error::custom("NoElement has no values"))
    }
}
