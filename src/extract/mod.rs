//! Field extraction from job-listing fragments.
//!
//! Two document representations feed the same six-field contract: a live
//! element in a rendered page and a parsed node in a fetched body. Each is a
//! [`Fragment`]; per-field lookups return `Option<String>` so one missing
//! selector never disturbs the others.

mod rendered;
mod static_html;

pub use rendered::*;
pub use static_html::*;

use crate::record::{JobRecord, NOT_AVAILABLE};

/// How to read a value out of a selected element.
#[derive(Debug, Clone, Copy)]
pub enum Accessor {
    /// Visible text content, trimmed.
    Text,
    /// A named attribute.
    Attr(&'static str),
    /// The `href` of an anchor. Static fragments resolve it against the
    /// base origin; rendered fragments carry it absolute already.
    Link,
}

/// One field lookup: where to look and what to read.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub selector: &'static str,
    pub accessor: Accessor,
}

/// Lookup table covering all six fields of a [`JobRecord`].
#[derive(Debug, Clone, Copy)]
pub struct FieldSpecs {
    pub title: FieldSpec,
    pub company: FieldSpec,
    pub location: FieldSpec,
    pub salary: FieldSpec,
    pub summary: FieldSpec,
    pub url: FieldSpec,
}

/// A listing fragment that can be queried field by field.
pub trait Fragment {
    /// Look up one field. Absent elements, bad selectors and read failures
    /// all yield `None`.
    fn find_field(&self, spec: &FieldSpec) -> Option<String>;
}

/// Assemble a record from a fragment, substituting the placeholder for
/// every field that does not resolve.
pub fn extract_job(fragment: &impl Fragment, specs: &FieldSpecs) -> JobRecord {
    let field = |spec: &FieldSpec| {
        fragment
            .find_field(spec)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };
    JobRecord {
        title: field(&specs.title),
        company: field(&specs.company),
        location: field(&specs.location),
        salary: field(&specs.salary),
        summary: field(&specs.summary),
        url: field(&specs.url),
    }
}
