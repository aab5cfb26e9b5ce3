//! Error types for immutable collection construction and access.
//!
//! Every fallible operation in this crate reports a [`CollectionError`].
//! Failures are raised at the API boundary before any container is built,
//! so a failed factory call never yields a partially constructed value.

/// Which half of a map entry was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingPart {
    /// The entry had no key.
    Key,
    /// The entry had no value.
    Value,
}

impl std::fmt::Display for MissingPart {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key => formatter.write_str("key"),
            Self::Value => formatter.write_str("value"),
        }
    }
}

/// Represents errors raised while building or querying an immutable collection.
///
/// # Examples
///
/// ```rust
/// use frozen::CollectionError;
///
/// let error = CollectionError::IndexOutOfBounds { index: 5, length: 3 };
/// assert_eq!(format!("{error}"), "index 5 out of bounds for length 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A required argument (builder field, collector stage) was never supplied.
    NullArgument {
        /// The name of the missing argument.
        argument: &'static str,
    },
    /// An element source contained a missing (`None`) element.
    NullElement {
        /// Position of the first missing element in the source.
        index: usize,
    },
    /// A map entry source contained a missing key or value.
    NullKeyOrValue {
        /// Position of the first offending entry in the source.
        index: usize,
        /// Which half of the entry was missing.
        missing: MissingPart,
    },
    /// Positional access outside `[0, length)`.
    IndexOutOfBounds {
        /// The requested position.
        index: usize,
        /// The length of the container.
        length: usize,
    },
    /// A factory entry point that cannot produce a container was called.
    UnsupportedFactoryCall {
        /// The factory that was called.
        factory: &'static str,
        /// What to call instead.
        guidance: &'static str,
    },
    /// A type-erased element did not have the container's element type.
    TypeMismatch {
        /// The element type the container holds.
        expected: &'static str,
        /// Position of the first offending element in the source.
        index: usize,
    },
    /// An ordinal range whose start lies after its end.
    InvalidRange {
        /// Ordinal of the first constant of the range.
        from: usize,
        /// Ordinal of the last constant of the range.
        to: usize,
    },
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullArgument { argument } => {
                write!(formatter, "required argument `{argument}` was not supplied")
            }
            Self::NullElement { index } => {
                write!(formatter, "missing element at position {index}")
            }
            Self::NullKeyOrValue { index, missing } => {
                write!(formatter, "missing {missing} in entry at position {index}")
            }
            Self::IndexOutOfBounds { index, length } => {
                write!(formatter, "index {index} out of bounds for length {length}")
            }
            Self::UnsupportedFactoryCall { factory, guidance } => {
                write!(formatter, "{factory} is not supported: {guidance}")
            }
            Self::TypeMismatch { expected, index } => {
                write!(
                    formatter,
                    "element at position {index} is not of type {expected}"
                )
            }
            Self::InvalidRange { from, to } => {
                write!(
                    formatter,
                    "range start ordinal {from} is after range end ordinal {to}"
                )
            }
        }
    }
}

impl std::error::Error for CollectionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        CollectionError::NullArgument { argument: "combiner" },
        "required argument `combiner` was not supplied"
    )]
    #[case(CollectionError::NullElement { index: 2 }, "missing element at position 2")]
    #[case(
        CollectionError::NullKeyOrValue { index: 0, missing: MissingPart::Value },
        "missing value in entry at position 0"
    )]
    #[case(
        CollectionError::IndexOutOfBounds { index: 3, length: 3 },
        "index 3 out of bounds for length 3"
    )]
    #[case(
        CollectionError::InvalidRange { from: 4, to: 1 },
        "range start ordinal 4 is after range end ordinal 1"
    )]
    fn test_display(#[case] error: CollectionError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_unsupported_factory_call_mentions_guidance() {
        let error = CollectionError::UnsupportedFactoryCall {
            factory: "ImmutableList::from_erased",
            guidance: "name the element type",
        };
        let message = format!("{error}");
        assert!(message.starts_with("ImmutableList::from_erased"));
        assert!(message.ends_with("name the element type"));
    }

    #[rstest]
    fn test_type_mismatch_display() {
        let error = CollectionError::TypeMismatch {
            expected: "i32",
            index: 1,
        };
        assert_eq!(format!("{error}"), "element at position 1 is not of type i32");
    }

    #[rstest]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CollectionError::NullElement { index: 0 });
    }

    #[rstest]
    fn test_equality() {
        let left = CollectionError::NullElement { index: 1 };
        let right = CollectionError::NullElement { index: 1 };
        let other = CollectionError::NullElement { index: 2 };
        assert_eq!(left, right);
        assert_ne!(left, other);
    }
}
