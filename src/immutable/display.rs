//! Bounded debug rendering shared by every container.
//!
//! Containers render as JSON-like arrays (`[1, 2, 3]`) or objects
//! (`{"a": 1}`) built from each element's `Debug` form. Hash-backed
//! containers render in ascending `Ord` order (maps by key) so the output
//! is stable across hashers. Every rendering is cut to [`DISPLAY_LIMIT`]
//! characters.

use std::fmt::{self, Debug, Write};

/// Maximum number of characters in any container rendering.
pub const DISPLAY_LIMIT: usize = 1000;

/// Longest UTF-8 encoding of one `char`, used to stop rendering early.
const MAX_CHAR_BYTES: usize = 4;

/// Cuts `rendered` to at most [`DISPLAY_LIMIT`] characters.
pub(crate) fn truncate(mut rendered: String) -> String {
    if let Some((byte_index, _)) = rendered.char_indices().nth(DISPLAY_LIMIT) {
        rendered.truncate(byte_index);
    }
    rendered
}

/// Writes `items` between `open` and `close`, separated by `", "`.
///
/// Stops once the buffer holds more bytes than any [`DISPLAY_LIMIT`]-char
/// prefix can need, so huge containers are never rendered in full.
fn render_bounded<I, W>(open: char, close: char, items: I, mut write_item: W) -> String
where
    I: IntoIterator,
    W: FnMut(&mut String, I::Item),
{
    let mut rendered = String::new();
    rendered.push(open);
    for (position, item) in items.into_iter().enumerate() {
        if position > 0 {
            rendered.push_str(", ");
        }
        write_item(&mut rendered, item);
        if rendered.len() > DISPLAY_LIMIT * MAX_CHAR_BYTES {
            return truncate(rendered);
        }
    }
    rendered.push(close);
    truncate(rendered)
}

/// Renders elements in iteration order as `[e1, e2, ...]`.
pub(crate) fn render_sequence<I>(elements: I) -> String
where
    I: IntoIterator,
    I::Item: Debug,
{
    // Writing into a String cannot fail.
    render_bounded('[', ']', elements, |rendered, element| {
        let _ = write!(rendered, "{element:?}");
    })
}

/// Collects element references in ascending order.
pub(crate) fn sorted<'a, T, I>(elements: I) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    T: Ord + 'a,
{
    let mut sorted: Vec<&T> = elements.into_iter().collect();
    sorted.sort_unstable();
    sorted
}

/// Renders elements as `[e1, e2, ...]` in ascending order.
pub(crate) fn render_sorted_sequence<'a, T, I>(elements: I) -> String
where
    I: IntoIterator<Item = &'a T>,
    T: Debug + Ord + 'a,
{
    render_sequence(sorted(elements))
}

/// Renders key/value pairs in iteration order as `{k1: v1, ...}`.
pub(crate) fn render_entries<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Debug,
    V: Debug,
{
    render_bounded('{', '}', entries, |rendered, (key, value)| {
        let _ = write!(rendered, "{key:?}: {value:?}");
    })
}

/// Renders key/value pairs as `{k1: v1, ...}` in ascending key order.
pub(crate) fn render_sorted_entries<'a, K, V, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a K, &'a V)>,
    K: Debug + Ord + 'a,
    V: Debug + 'a,
{
    let mut sorted: Vec<(&K, &V)> = entries.into_iter().collect();
    sorted.sort_unstable_by(|(left, _), (right, _)| left.cmp(right));
    render_entries(sorted)
}

/// Writes an already bounded rendering.
pub(crate) fn write_rendered(formatter: &mut fmt::Formatter<'_>, rendered: &str) -> fmt::Result {
    formatter.write_str(rendered)
}

/// Renders `value` as JSON, falling back to `fallback` when serialization fails.
///
/// The result is bounded by [`DISPLAY_LIMIT`] either way; failures are
/// logged and never reach the caller.
#[cfg(feature = "serde")]
pub(crate) fn render_json<T, F>(value: &T, fallback: F) -> String
where
    T: serde::Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match serde_json::to_string(value) {
        Ok(json) => truncate(json),
        Err(error) => {
            tracing::warn!(%error, "json rendering failed, using plain rendering");
            truncate(fallback())
        }
    }
}
