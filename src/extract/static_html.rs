//! Static-markup fragment extraction for the direct-fetch backend.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{extract_job, Accessor, FieldSpec, FieldSpecs, Fragment};
use crate::record::JobRecord;

/// Lookups for fragments parsed out of a raw response body.
///
/// The title is read from the `title` attribute here, not the span text.
pub const STATIC_SPECS: FieldSpecs = FieldSpecs {
    title: FieldSpec {
        selector: "span[title]",
        accessor: Accessor::Attr("title"),
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
        selector: "a[href]",
        accessor: Accessor::Link,
    },
};

/// One parsed listing node plus the origin used to absolutize links.
pub struct StaticFragment<'a> {
    element: ElementRef<'a>,
    base: &'a Url,
}

impl<'a> StaticFragment<'a> {
    pub fn new(element: ElementRef<'a>, base: &'a Url) -> Self {
        Self { element, base }
    }
}

impl Fragment for StaticFragment<'_> {
    fn find_field(&self, spec: &FieldSpec) -> Option<String> {
        let selector = Selector::parse(spec.selector).ok()?;
        let element = self.element.select(&selector).next()?;
        match spec.accessor {
            Accessor::Text => Some(element.text().collect::<String>().trim().to_string()),
            Accessor::Attr(name) => element
                .value()
                .attr(name)
                .map(|value| value.trim().to_string()),
            Accessor::Link => {
                let href = element.value().attr("href")?.trim();
                if href.is_empty() {
                    return None;
                }
                self.base.join(href).ok().map(|url| url.to_string())
            }
        }
    }
}

/// Extract every job fragment (nodes carrying the `data-jk` job key) from a
/// results page body.
pub fn extract_listing_page(body: &str, base: &Url) -> Vec<JobRecord> {
    let document = Html::parse_document(body);
    let selector = match Selector::parse("div[data-jk]") {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    document
        .select(&selector)
        .map(|element| extract_job(&StaticFragment::new(element, base), &STATIC_SPECS))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NOT_AVAILABLE;

    fn base() -> Url {
        Url::parse("https://www.indeed.com").unwrap()
    }

    #[test]
    fn test_two_fragments_one_missing_salary() {
        let html = r#"
        <html>
        <body>
            <div data-jk="a1b2c3">
                <h2 class="jobTitle">
                    <a href="/viewjob?jk=a1b2c3"><span title="Python Developer">Python Developer</span></a>
                </h2>
                <span data-testid="company-name">Acme Corp</span>
                <div data-testid="text-location">Delhi</div>
                <div data-testid="attribute_snippet_testid">&#8377;12,00,000 a year</div>
                <div class="job-snippet">Build and maintain data pipelines.</div>
            </div>
            <div data-jk="d4e5f6">
                <h2 class="jobTitle">
                    <a href="/viewjob?jk=d4e5f6"><span title="Backend Engineer">Backend Engineer</span></a>
                </h2>
                <span data-testid="company-name">Globex</span>
                <div data-testid="text-location">Remote</div>
                <div class="job-snippet">Own the API surface.</div>
            </div>
        </body>
        </html>
        "#;

        let records = extract_listing_page(html, &base());
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].salary, "₹12,00,000 a year");
        assert_eq!(records[1].salary, NOT_AVAILABLE);
        assert_eq!(records[1].title, "Backend Engineer");
        assert_eq!(records[1].company, "Globex");
    }

    #[test]
    fn test_relative_link_resolves_against_base() {
        let html = r#"
        <div data-jk="abc">
            <a href="/viewjob?jk=abc">view</a>
        </div>
        "#;

        let records = extract_listing_page(html, &base());
        assert_eq!(records[0].url, "https://www.indeed.com/viewjob?jk=abc");
    }

    #[test]
    fn test_title_comes_from_attribute_not_text() {
        let html = r#"
        <div data-jk="abc">
            <span title="Senior Python Developer - Platform Team">Senior Python Dev…</span>
        </div>
        "#;

        let records = extract_listing_page(html, &base());
        assert_eq!(records[0].title, "Senior Python Developer - Platform Team");
    }

    #[test]
    fn test_bare_fragment_yields_placeholder_record() {
        let html = r#"<div data-jk="zzz"><p>listing markup changed</p></div>"#;

        let records = extract_listing_page(html, &base());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], JobRecord::default());
    }

    #[test]
    fn test_empty_href_is_treated_as_missing() {
        let html = r#"<div data-jk="abc"><a href="">view</a></div>"#;

        let records = extract_listing_page(html, &base());
        assert_eq!(records[0].url, NOT_AVAILABLE);
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let html = r#"
        <div data-jk="abc">
            <span data-testid="company-name">
                Acme Corp
            </span>
        </div>
        "#;

        let records = extract_listing_page(html, &base());
        assert_eq!(records[0].company, "Acme Corp");
    }
}
