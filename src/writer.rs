//! Vertex attribute-list writer.
//!
//! Emits, for one vertex, the dot-style ` [key=value, ...]` attribute
//! list drawn from a dynamic property collection, restricted to entries
//! of one runtime value tag.
//!
//! ```text
//! DynamicProperties → write_vertex_attributes() → " [B=blue, C=red]"
//!   → embed directly after the vertex declaration in the export stream
//! ```
//!
//! A single synchronous pass in stored order, no allocation beyond the
//! output text. Entries owned by the vertex itself are always skipped,
//! whatever their tag — a vertex never lists its own identifier property
//! among its displayed attributes.

use std::fmt::Write;

use crate::Result;
use crate::escape::escape_dot_string;
use crate::model::{DynamicProperties, ValueKind};

/// Stream the attribute list for `vertex_id` into `out`.
///
/// Skips entries whose owner equals `vertex_id` and entries whose value
/// tag differs from `kind` (silently; in a mixed collection a mismatch
/// is the common case, not an error). Writes nothing when no entry survives both
/// filters; otherwise the emitted text is `" ["`, the surviving entries
/// as `owner=value` joined by `", "` in stored order, then `"]"`.
/// Every emitted value goes through [`escape_dot_string`].
///
/// Extraction only runs on entries that passed both filters, so a
/// corrupt value elsewhere in the collection cannot fail the call. On a
/// surviving entry it can: a tag-matched value that cannot render
/// (non-UTF-8 bytes) aborts the export with [`Error::InvalidUtf8`],
/// possibly after part of the list has been written.
///
/// [`Error::InvalidUtf8`]: crate::Error::InvalidUtf8
pub fn write_vertex_attributes<W: Write>(
    out: &mut W,
    vertex_id: &str,
    properties: &DynamicProperties,
    kind: ValueKind,
) -> Result<()> {
    let mut emitted = 0usize;

    for entry in properties.iter() {
        if entry.owner == vertex_id {
            continue;
        }
        let Some(text) = entry.value.try_as_string(kind)? else {
            continue;
        };

        out.write_str(if emitted == 0 { " [" } else { ", " })?;
        write!(out, "{}={}", entry.owner, escape_dot_string(&text))?;
        emitted += 1;
    }

    if emitted > 0 {
        out.write_str("]")?;
    }

    tracing::trace!(
        vertex = vertex_id,
        kind = kind.type_name(),
        emitted,
        scanned = properties.len(),
        "formatted vertex attribute list"
    );

    Ok(())
}

/// Format the attribute list for `vertex_id` as a `String`.
///
/// Returns the empty string when no entry matches. Purely a function of
/// its inputs; see [`write_vertex_attributes`] for the filtering rules.
pub fn vertex_attributes(
    vertex_id: &str,
    properties: &DynamicProperties,
    kind: ValueKind,
) -> Result<String> {
    let mut out = String::new();
    write_vertex_attributes(&mut out, vertex_id, properties, kind)?;
    Ok(out)
}
