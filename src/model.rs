//! Data model for reflected test metadata and collected spec rows.
//!
//! The reflected side is an explicit data contract rather than a live
//! reflection API: a metadata dump (symbol-table reader, codegen step,
//! static analysis pass) produces it as JSON, and the engine only reads.

use serde::Deserialize;
use std::collections::HashMap;

/// Root of the reflected-metadata dump: all declared types, in listing
/// order.
#[derive(Debug, Deserialize)]
pub struct ModuleMetadata {
    pub types: Vec<ReflectedType>,
}

/// A type declared in the scanned module, with its directly declared
/// methods in listing order.
#[derive(Debug, Deserialize)]
pub struct ReflectedType {
    /// Fully qualified name, e.g. "Sample.Auth.LoginTests"
    pub full_name: String,
    /// Simple name, e.g. "LoginTests"
    pub name: String,
    #[serde(default)]
    pub methods: Vec<ReflectedMethod>,
}

/// A method as seen by the metadata reader.
#[derive(Debug, Deserialize)]
pub struct ReflectedMethod {
    pub name: String,
    /// Visibility flag. Defaults to public when the dump omits it.
    #[serde(default = "default_true", rename = "public")]
    pub is_public: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// True when the method comes from a base type rather than the
    /// scanned type itself.
    #[serde(default, rename = "inherited")]
    pub is_inherited: bool,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

/// An attribute/decorator attached to a method. `name` is the marker's
/// metadata type name, e.g. "FactAttribute" or "TestIdAttribute".
#[derive(Debug, Clone, Deserialize)]
pub struct Marker {
    pub name: String,
    /// Named property values where the marker carries any.
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
}

fn default_true() -> bool {
    true
}

/// One collected row of the specification sheet.
///
/// `class_name` and `title` are always populated; the remaining fields use
/// the empty string as the canonical "no value".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseSpec {
    pub test_id: String,
    pub class_name: String,
    /// Method name, verbatim. Identifiers are not prose and skip
    /// normalization.
    pub title: String,
    pub preconditions: String,
    pub steps: String,
    pub expected: String,
    pub summary: String,
}
