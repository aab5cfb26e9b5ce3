//! Run-time element type descriptors.
//!
//! Containers are generic over their element type, which the compiler
//! already tracks. [`ElementType`] makes that type observable at run time
//! as well, so a container can report what it holds without an instance
//! and can check type-erased values before admitting them.

use std::any::{Any, TypeId};
use std::fmt;

use crate::capability::NoElement;
use crate::error::CollectionError;

/// Describes the element type of a container at run time.
///
/// # Examples
///
/// ```rust
/// use frozen::immutable::{ElementType, ImmutableList};
///
/// assert_eq!(ImmutableList::<u8>::element_type(), ElementType::of::<u8>());
/// assert_eq!(ElementType::of::<u8>().name(), "u8");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ElementType {
    id: TypeId,
    name: &'static str,
}

impl ElementType {
    /// Returns the descriptor of `T`.
    #[inline]
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the type name, as reported by the compiler.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the underlying type identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns `true` for the [`NoElement`] placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.id == TypeId::of::<NoElement>()
    }

    /// Returns `true` if `value` is an instance of this element type.
    #[must_use]
    pub fn matches(&self, value: &dyn Any) -> bool {
        value.type_id() == self.id
    }
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ElementType {}

impl std::hash::Hash for ElementType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name)
    }
}

/// Downcasts every erased value to `T`, all or nothing.
///
/// Fails with `UnsupportedFactoryCall` when `T` is the placeholder type
/// and with `TypeMismatch` at the first value of another type.
pub(crate) fn checked_elements<T, I>(
    factory: &'static str,
    values: I,
) -> Result<Vec<T>, CollectionError>
where
    T: 'static,
    I: IntoIterator<Item = Box<dyn Any>>,
{
    let expected = ElementType::of::<T>();
    if expected.is_placeholder() {
        let error = CollectionError::UnsupportedFactoryCall {
            factory,
            guidance: "name a concrete element type, for example ImmutableList::<String>::from_erased",
        };
        tracing::debug!(%error, "rejected placeholder element type");
        return Err(error);
    }
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .downcast::<T>()
                .map(|element| *element)
                .map_err(|_| CollectionError::TypeMismatch {
                    expected: expected.name(),
                    index,
                })
        })
        .collect::<Result<Vec<T>, _>>()
        .inspect_err(|error| tracing::debug!(factory, %error, "rejected erased elements"))
}
