//! Row collection: join classified methods with their doc entries.

use crate::classify::{self, Classifier};
use crate::docs::{method_doc_id, DocIndex};
use crate::model::{ReflectedMethod, ReflectedType, TestCaseSpec};
use crate::normalize::normalize;

/// Build the sheet row for a single method already known to be a test.
pub fn build_spec(ty: &ReflectedType, method: &ReflectedMethod, docs: &DocIndex) -> TestCaseSpec {
    let fields = docs.lookup(&method_doc_id(&ty.full_name, &method.name));

    TestCaseSpec {
        test_id: classify::declared_test_id(method),
        class_name: ty.name.clone(),
        title: method.name.clone(),
        preconditions: normalize(&fields.preconditions),
        steps: normalize(&fields.steps),
        expected: normalize(&fields.expected),
        summary: normalize(&fields.summary),
    }
}

/// Walk all types in listing order and collect one row per test method.
/// Rows keep discovery order; nothing is sorted or deduplicated.
pub fn collect_specs(
    types: &[ReflectedType],
    docs: &DocIndex,
    classifier: &Classifier,
) -> Vec<TestCaseSpec> {
    let mut specs = Vec::new();
    for ty in types {
        for method in &ty.methods {
            if !classifier.is_test(method) {
                continue;
            }
            specs.push(build_spec(ty, method, docs));
        }
    }
    specs
}
