//! Doc-comment lookup: canonical identifiers and the member index.
//!
//! Documentation XML carries one `member` element per documented symbol,
//! keyed by a `name` attribute like `M:Sample.Auth.LoginTests.Login_Succeeds`.
//! The index extracts four fields per member: the standard `summary` tag
//! and the custom `preconditions`/`steps`/`expected` extensions, all
//! treated identically.

use anyhow::{Context, Result};
use std::collections::HashMap;

/// Canonical documentation identifier for a method: kind prefix `M:`
/// followed by the dotted fully-qualified member path.
///
/// No parameter-list encoding or generic-arity suffixes. Valid for the
/// simple, non-overloaded methods test suites are made of.
pub fn method_doc_id(type_full_name: &str, method_name: &str) -> String {
    format!("M:{type_full_name}.{method_name}")
}

/// Raw (un-normalized) field texts of one documented member. Absent tags
/// are the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocFields {
    pub summary: String,
    pub preconditions: String,
    pub steps: String,
    pub expected: String,
}

/// Index of documented members by canonical identifier.
///
/// Built once from the full tree; immutable afterwards.
pub struct DocIndex {
    members: HashMap<String, DocFields>,
}

impl DocIndex {
    /// Parse documentation XML and index every `member` element by its
    /// `name` attribute. Members without a `name` attribute are skipped.
    ///
    /// When identifiers collide (overloads), the first member in document
    /// order wins; collisions are not detected or reported.
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml).context("malformed documentation XML")?;

        let mut members: HashMap<String, DocFields> = HashMap::new();
        for node in doc.descendants().filter(|n| n.has_tag_name("member")) {
            let Some(id) = node.attribute("name") else {
                continue;
            };
            members.entry(id.to_string()).or_insert_with(|| DocFields {
                summary: child_text(node, "summary"),
                preconditions: child_text(node, "preconditions"),
                steps: child_text(node, "steps"),
                expected: child_text(node, "expected"),
            });
        }

        Ok(Self { members })
    }

    /// Fields for the given identifier. A missing identifier yields four
    /// empty fields, never an error.
    pub fn lookup(&self, id: &str) -> DocFields {
        self.members.get(id).cloned().unwrap_or_default()
    }
}

/// Text content of the member's first child with the given tag name,
/// concatenated across nested markup. Empty when the tag is absent.
fn child_text(member: roxmltree::Node, tag: &str) -> String {
    let Some(child) = member.children().find(|c| c.has_tag_name(tag)) else {
        return String::new();
    };
    child
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
