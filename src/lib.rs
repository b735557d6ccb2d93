//! specdoc - collect test-case specifications from compiled-test metadata
//! and doc-comment XML into a reviewable sheet.
//!
//! The pipeline: classify reflected methods as test cases, derive each
//! method's doc-comment identifier, look the identifier up in the XML
//! member index, normalize the extracted text, and render one CSV row per
//! test case.

pub mod classify;
pub mod collect;
pub mod docs;
pub mod model;
pub mod normalize;
pub mod render;
