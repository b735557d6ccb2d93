//! Test-method discovery.
//!
//! Markers are matched by name prefix so the scan recognizes methods from
//! unrelated test frameworks without depending on any of them: "Test"
//! covers Test/TestMethod/TestCase conventions, "Fact" and "Theory" cover
//! fact-style suites.

use crate::model::ReflectedMethod;
use serde_json::Value;

/// Default recognized marker-name prefixes, compared case-sensitively.
pub const DEFAULT_MARKER_PREFIXES: &[&str] = &["Test", "Fact", "Theory"];

/// Marker type name carrying the declared test identifier.
const TEST_ID_MARKER: &str = "TestIdAttribute";

/// Property on the test-id marker holding the identifier value.
const TEST_ID_PROPERTY: &str = "Id";

/// Decides whether a reflected method counts as a test case.
///
/// The prefix list is configurable so unknown future marker names can be
/// admitted without a code change.
pub struct Classifier {
    prefixes: Vec<String>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::with_prefixes(DEFAULT_MARKER_PREFIXES.iter().map(|p| p.to_string()).collect())
    }

    pub fn with_prefixes(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// A method qualifies iff it is public, instance-scoped, declared on
    /// the scanned type itself, and carries at least one marker whose name
    /// starts with a recognized prefix.
    pub fn is_test(&self, method: &ReflectedMethod) -> bool {
        if !method.is_public || method.is_static || method.is_inherited {
            return false;
        }
        method
            .markers
            .iter()
            .any(|marker| self.prefixes.iter().any(|p| marker.name.starts_with(p.as_str())))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Declared test id from a `TestIdAttribute` marker.
///
/// A missing marker, a missing `Id` property, or a null value is a normal
/// case and yields the empty string.
pub fn declared_test_id(method: &ReflectedMethod) -> String {
    let Some(marker) = method.markers.iter().find(|m| m.name == TEST_ID_MARKER) else {
        return String::new();
    };
    match marker.properties.get(TEST_ID_PROPERTY) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
    }
}
