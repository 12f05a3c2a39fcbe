//! Live-document fragment extraction.

use headless_chrome::Element;

use super::{Accessor, FieldSpec, FieldSpecs, Fragment};

/// Lookups for live `div.job_seen_beacon` fragments in a rendered page.
pub const RENDERED_SPECS: FieldSpecs = FieldSpecs {
    title: FieldSpec {
        selector: "h2.jobTitle a span",
        accessor: Accessor::Text,
    },
    company: FieldSpec {
        selector: r#"span[data-testid="company-name"]"#,
        accessor: Accessor::Text,
    },
    location: FieldSpec {
        selector: r#"div[data-testid="text-location"]"#,
        accessor: Accessor::Text,
    },
    salary: FieldSpec {
        selector: r#"div[data-testid="attribute_snippet_testid"]"#,
        accessor: Accessor::Text,
    },
    summary: FieldSpec {
        selector: "div.job-snippet",
        accessor: Accessor::Text,
    },
    url: FieldSpec {
        selector: "h2.jobTitle a",
        accessor: Accessor::Link,
    },
};

/// One live listing element in the rendered results page.
pub struct RenderedFragment<'a> {
    element: &'a Element<'a>,
}

impl<'a> RenderedFragment<'a> {
    pub fn new(element: &'a Element<'a>) -> Self {
        Self { element }
    }
}

impl Fragment for RenderedFragment<'_> {
    fn find_field(&self, spec: &FieldSpec) -> Option<String> {
        let element = self.element.find_element(spec.selector).ok()?;
        match spec.accessor {
            Accessor::Text => element
                .get_inner_text()
                .ok()
                .map(|text| text.trim().to_string()),
            Accessor::Attr(name) => element
                .get_attribute_value(name)
                .ok()
                .flatten()
                .map(|value| value.trim().to_string()),
            // hrefs in the rendered page are served absolute
            Accessor::Link => element
                .get_attribute_value("href")
                .ok()
                .flatten()
                .map(|href| href.trim().to_string()),
        }
    }
}
