// codec.rs - StyledDocument <-> `.rte` JSON bytes
//
// Format:
//   {"content": "<text>", "tags": {"<tag>": [["<line.col>", "<line.col>"], ...]}}

use crate::document::{SELECTION_TAG, StyledDocument, TagRange};
use crate::error::{Result, RteError};
use crate::position::TextIndex;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
struct WireDocumentRef<'a> {
    content: &'a str,
    tags: BTreeMap<&'a str, Vec<(String, String)>>,
}

#[derive(Deserialize)]
struct WireDocument {
    content: String,
    #[serde(default)]
    tags: BTreeMap<String, Vec<(String, String)>>,
}

/// Serialize a document. Ranges keep their stored order; the selection tag is dropped.
pub fn encode(doc: &StyledDocument) -> Result<Vec<u8>> {
    let tags = doc
        .tags
        .iter()
        .filter(|(name, _)| name.as_str() != SELECTION_TAG)
        .map(|(name, ranges)| {
            let pairs = ranges
                .iter()
                .map(|r| (r.start.to_string(), r.end.to_string()))
                .collect();
            (name.as_str(), pairs)
        })
        .collect();

    let wire = WireDocumentRef {
        content: &doc.content,
        tags,
    };
    Ok(serde_json::to_vec(&wire)?)
}

/// Parse `.rte` bytes. Range bounds are not checked against the content and
/// unknown tag names are kept.
pub fn decode(bytes: &[u8]) -> Result<StyledDocument> {
    let wire: WireDocument =
        serde_json::from_slice(bytes).map_err(|e| RteError::MalformedDocument(e.to_string()))?;

    let mut tags = BTreeMap::new();
    for (name, pairs) in wire.tags {
        let ranges = pairs
            .iter()
            .map(|(start, end)| {
                Ok(TagRange::new(parse_index(&name, start)?, parse_index(&name, end)?))
            })
            .collect::<Result<Vec<_>>>()?;
        tags.insert(name, ranges);
    }

    debug!(
        "Decoded document: {} chars, {} tags",
        wire.content.chars().count(),
        tags.len()
    );

    Ok(StyledDocument {
        content: wire.content,
        tags,
    })
}

fn parse_index(tag: &str, raw: &str) -> Result<TextIndex> {
    raw.parse()
        .map_err(|e| RteError::MalformedDocument(format!("tag {:?}: {}", tag, e)))
}
