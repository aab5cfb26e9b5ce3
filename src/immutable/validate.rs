//! All-or-nothing validation of element and entry sources.
//!
//! Sources arrive as `Option`s when they come from nullable data. A single
//! `None` rejects the whole source before any container is built.

use crate::error::{CollectionError, MissingPart};

/// Unwraps every element, failing at the first `None`.
pub(crate) fn present_elements<T, I>(
    container: &'static str,
    elements: I,
) -> Result<Vec<T>, CollectionError>
where
    I: IntoIterator<Item = Option<T>>,
{
    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| element.ok_or(CollectionError::NullElement { index }))
        .collect::<Result<Vec<T>, _>>()
        .inspect_err(|error| tracing::debug!(container, %error, "rejected element source"))
}

/// Unwraps every key and value, failing at the first missing half.
pub(crate) fn present_entries<K, V, I>(
    container: &'static str,
    entries: I,
) -> Result<Vec<(K, V)>, CollectionError>
where
    I: IntoIterator<Item = (Option<K>, Option<V>)>,
{
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            (Some(key), Some(value)) => Ok((key, value)),
            (None, _) => Err(CollectionError::NullKeyOrValue {
                index,
                missing: MissingPart::Key,
            }),
            (Some(_), None) => Err(CollectionError::NullKeyOrValue {
                index,
                missing: MissingPart::Value,
            }),
        })
        .collect::<Result<Vec<(K, V)>, _>>()
        .inspect_err(|error| tracing::debug!(container, %error, "rejected entry source"))
}
