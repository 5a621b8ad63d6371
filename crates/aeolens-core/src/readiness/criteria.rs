//! The ten readiness criteria, evaluated in table order.
//!
//! Every criterion is an independent predicate over a [`PageContext`]; none
//! looks at another's outcome. Each contributes
//! [`crate::types::POINTS_PER_CRITERION`] points when it passes.

use super::PageContext;
use super::probe::ProbeOutcome;
use crate::types::{CriterionResult, Indicator};

/// Minimum visible text length (exclusive) for the content volume check
pub const MIN_TEXT_LENGTH: usize = 500;

/// Minimum internal link count (exclusive) for the internal linking check
pub const MIN_INTERNAL_LINKS: usize = 3;

/// Description used when an auxiliary request could not be completed
pub const CHECK_FAILED: &str = "Check failed.";

/// What a predicate concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,

    /// Nothing to inspect; scored as a pass
    NotApplicable,

    Fail,

    /// The check could not be carried out; scored as a failure
    Unknown,
}

impl Verdict {
    pub fn passed(self) -> bool {
        matches!(self, Verdict::Pass | Verdict::NotApplicable)
    }
}

/// Static definition of one criterion
pub struct Criterion {
    pub title: &'static str,
    pub pass_description: &'static str,
    pub fail_description: &'static str,
    /// Overrides `pass_description` for [`Verdict::NotApplicable`]
    pub not_applicable_description: Option<&'static str>,
    /// Indicator shown when the criterion fails
    pub fail_indicator: Indicator,
    pub check: fn(&PageContext<'_>) -> Verdict,
}

impl Criterion {
    pub fn evaluate(&self, context: &PageContext<'_>) -> CriterionResult {
        let verdict = (self.check)(context);
        tracing::debug!(criterion = self.title, ?verdict, "criterion evaluated");

        match verdict {
            Verdict::Pass => CriterionResult::pass(self.title, self.pass_description),
            Verdict::NotApplicable => CriterionResult::pass(
                self.title,
                self.not_applicable_description
                    .unwrap_or(self.pass_description),
            ),
            Verdict::Fail => {
                CriterionResult::fail(self.title, self.fail_indicator, self.fail_description)
            }
            Verdict::Unknown => {
                CriterionResult::fail(self.title, self.fail_indicator, CHECK_FAILED)
            }
        }
    }
}

/// All criteria, in evaluation order
pub static CRITERIA: [Criterion; 10] = [
    Criterion {
        title: "Structured Data (JSON-LD)",
        pass_description: "Found. AI understands this content.",
        fail_description: "Missing. Critical for AI understanding.",
        not_applicable_description: None,
        fail_indicator: Indicator::Fail,
        check: check_structured_data,
    },
    Criterion {
        title: "Meta Description",
        pass_description: "Good summary provided.",
        fail_description: "Missing description.",
        not_applicable_description: None,
        fail_indicator: Indicator::Fail,
        check: check_meta_description,
    },
    Criterion {
        title: "Open Graph Tags",
        pass_description: "Social context present.",
        fail_description: "Missing OpenGraph tags.",
        not_applicable_description: None,
        fail_indicator: Indicator::Fail,
        check: check_open_graph,
    },
    Criterion {
        title: "Header Hierarchy (H1/H2)",
        pass_description: "Clear content structure.",
        fail_description: "Missing H1 or H2 tags.",
        not_applicable_description: None,
        fail_indicator: Indicator::Fail,
        check: check_header_hierarchy,
    },
    Criterion {
        title: "Content Volume",
        pass_description: "Sufficient content depth.",
        fail_description: "Too thin. Add more text.",
        not_applicable_description: None,
        fail_indicator: Indicator::Warning,
        check: check_content_volume,
    },
    Criterion {
        title: "Internal Linking",
        pass_description: "Good internal connectivity.",
        fail_description: "Few internal links found.",
        not_applicable_description: None,
        fail_indicator: Indicator::Warning,
        check: check_internal_links,
    },
    Criterion {
        title: "Image Alt Text",
        pass_description: "Images have descriptions.",
        fail_description: "Many images missing Alt text.",
        not_applicable_description: Some("No images to check."),
        fail_indicator: Indicator::Fail,
        check: check_image_alt_text,
    },
    Criterion {
        title: "Mobile Friendly",
        pass_description: "Mobile viewport tag found.",
        fail_description: "Not optimized for mobile.",
        not_applicable_description: None,
        fail_indicator: Indicator::Fail,
        check: check_viewport,
    },
    Criterion {
        title: "Robots.txt",
        pass_description: "Crawling policy found.",
        fail_description: "Robots.txt unreachable.",
        not_applicable_description: None,
        fail_indicator: Indicator::Warning,
        check: check_robots_txt,
    },
    Criterion {
        title: "Sitemap.xml",
        pass_description: "Sitemap found.",
        fail_description: "Sitemap not found at root.",
        not_applicable_description: None,
        fail_indicator: Indicator::Warning,
        check: check_sitemap,
    },
];

fn verdict(passed: bool) -> Verdict {
    if passed { Verdict::Pass } else { Verdict::Fail }
}

fn check_structured_data(context: &PageContext<'_>) -> Verdict {
    verdict(context.document.has_structured_data())
}

fn check_meta_description(context: &PageContext<'_>) -> Verdict {
    verdict(context.document.has_meta_description())
}

fn check_open_graph(context: &PageContext<'_>) -> Verdict {
    verdict(context.document.has_meta_property("og:title"))
}

fn check_header_hierarchy(context: &PageContext<'_>) -> Verdict {
    let document = context.document;
    verdict(document.count("h1") > 0 && document.count("h2") > 0)
}

fn check_content_volume(context: &PageContext<'_>) -> Verdict {
    verdict(context.document.text_length() > MIN_TEXT_LENGTH)
}

fn check_internal_links(context: &PageContext<'_>) -> Verdict {
    verdict(context.document.internal_link_count() > MIN_INTERNAL_LINKS)
}

fn check_image_alt_text(context: &PageContext<'_>) -> Verdict {
    let (total, with_alt) = context.document.image_alt_coverage();
    if total == 0 {
        return Verdict::NotApplicable;
    }

    // strictly more than half
    verdict(with_alt * 2 > total)
}

fn check_viewport(context: &PageContext<'_>) -> Verdict {
    verdict(context.document.has_meta_name("viewport"))
}

fn check_robots_txt(context: &PageContext<'_>) -> Verdict {
    probe_verdict(&context.robots_txt)
}

fn check_sitemap(context: &PageContext<'_>) -> Verdict {
    probe_verdict(&context.sitemap_xml)
}

fn probe_verdict(outcome: &ProbeOutcome) -> Verdict {
    match outcome {
        ProbeOutcome::Found => Verdict::Pass,
        ProbeOutcome::Missing { .. } => Verdict::Fail,
        ProbeOutcome::Failed { .. } => Verdict::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::PageDocument;
    use crate::types::{POINTS_PER_CRITERION, Status};

    const PAGE_URL: &str = "https://example.com/";

    fn evaluate_one(index: usize, html: &str) -> CriterionResult {
        let document = PageDocument::parse(html, PAGE_URL).unwrap();
        let context = PageContext {
            document: &document,
            robots_txt: ProbeOutcome::Found,
            sitemap_xml: ProbeOutcome::Found,
        };
        CRITERIA[index].evaluate(&context)
    }

    fn evaluate_probes(
        robots: ProbeOutcome,
        sitemap: ProbeOutcome,
    ) -> (CriterionResult, CriterionResult) {
        let document = PageDocument::parse("<p>x</p>", PAGE_URL).unwrap();
        let context = PageContext {
            document: &document,
            robots_txt: robots,
            sitemap_xml: sitemap,
        };
        (CRITERIA[8].evaluate(&context), CRITERIA[9].evaluate(&context))
    }

    fn links(count: usize) -> String {
        (0..count)
            .map(|i| format!(r#"<a href="/page{}">Page {}</a>"#, i, i))
            .collect()
    }

    #[test]
    fn test_table_order_and_weights() {
        let titles: Vec<_> = CRITERIA.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Structured Data (JSON-LD)",
                "Meta Description",
                "Open Graph Tags",
                "Header Hierarchy (H1/H2)",
                "Content Volume",
                "Internal Linking",
                "Image Alt Text",
                "Mobile Friendly",
                "Robots.txt",
                "Sitemap.xml",
            ]
        );

        assert_eq!(CRITERIA.len() * POINTS_PER_CRITERION as usize, 100);
    }

    #[test]
    fn test_structured_data() {
        let pass = evaluate_one(
            0,
            r#"<script type="application/ld+json">{"@type":"Thing"}</script>"#,
        );
        assert_eq!(pass.status, Status::Pass);
        assert_eq!(pass.description, "Found. AI understands this content.");

        let fail = evaluate_one(0, "<p>plain</p>");
        assert_eq!(fail.status, Status::Fail);
        assert_eq!(fail.indicator, Indicator::Fail);
    }

    #[test]
    fn test_meta_description() {
        assert!(evaluate_one(1, r#"<meta name="description" content="Summary">"#).passed());
        assert!(evaluate_one(1, r#"<meta name="description" content="  ">"#).passed());
        assert!(!evaluate_one(1, r#"<meta name="description" content="">"#).passed());
    }

    #[test]
    fn test_open_graph() {
        assert!(evaluate_one(2, r#"<meta property="og:title" content="T">"#).passed());
        assert!(!evaluate_one(2, r#"<meta property="og:description" content="T">"#).passed());
    }

    #[test]
    fn test_header_hierarchy_needs_both_levels() {
        assert!(evaluate_one(3, "<h1>A</h1><h2>B</h2>").passed());
        assert!(!evaluate_one(3, "<h1>A</h1>").passed());
        assert!(!evaluate_one(3, "<h2>B</h2><h3>C</h3>").passed());
    }

    #[test]
    fn test_content_volume_boundary() {
        let exactly = format!("<p>{}</p>", "a".repeat(MIN_TEXT_LENGTH));
        let over = format!("<p>{}</p>", "a".repeat(MIN_TEXT_LENGTH + 1));

        let fail = evaluate_one(4, &exactly);
        assert_eq!(fail.status, Status::Fail);
        assert_eq!(fail.indicator, Indicator::Warning);
        assert!(evaluate_one(4, &over).passed());
    }

    #[test]
    fn test_content_volume_counts_indentation() {
        let body: String = (0..20)
            .map(|i| format!("\n                        <p>word{:02}</p>", i))
            .collect();
        let html = format!("<html><body>{}\n</body></html>", body);

        let result = evaluate_one(4, &html);
        assert_eq!(result.status, Status::Pass);
        assert_eq!(result.description, "Sufficient content depth.");
    }

    #[test]
    fn test_content_volume_ignores_scripts() {
        let html = format!("<p>short</p><script>{}</script>", "x".repeat(1000));
        assert!(!evaluate_one(4, &html).passed());
    }

    #[test]
    fn test_internal_links_boundary() {
        let three = evaluate_one(5, &links(3));
        assert_eq!(three.status, Status::Fail);
        assert_eq!(three.indicator, Indicator::Warning);

        assert!(evaluate_one(5, &links(4)).passed());
    }

    #[test]
    fn test_external_links_do_not_count() {
        let html = format!(
            "{}{}",
            links(2),
            concat!(
                r#"<a href="https://other.org/a">x</a>"#,
                r#"<a href="https://other.org/b">y</a>"#,
                r#"<a href="mailto:a@b.c">m</a>"#,
            )
        );
        assert!(!evaluate_one(5, &html).passed());
    }

    #[test]
    fn test_no_images_passes() {
        let result = evaluate_one(6, "<p>text only</p>");
        assert_eq!(result.status, Status::Pass);
        assert_eq!(result.description, "No images to check.");
    }

    #[test]
    fn test_image_alt_requires_majority() {
        let half = r#"<img src="a" alt="A"><img src="b">"#;
        let majority = r#"<img src="a" alt="A"><img src="b" alt="B"><img src="c">"#;

        let fail = evaluate_one(6, half);
        assert_eq!(fail.status, Status::Fail);
        assert_eq!(fail.indicator, Indicator::Fail);

        let pass = evaluate_one(6, majority);
        assert!(pass.passed());
        assert_eq!(pass.description, "Images have descriptions.");
    }

    #[test]
    fn test_viewport() {
        assert!(evaluate_one(7, r#"<meta name="viewport" content="width=device-width">"#).passed());
        assert!(!evaluate_one(7, "<p>desktop only</p>").passed());
    }

    #[test]
    fn test_probes_found() {
        let (robots, sitemap) = evaluate_probes(ProbeOutcome::Found, ProbeOutcome::Found);
        assert_eq!(robots.description, "Crawling policy found.");
        assert_eq!(sitemap.description, "Sitemap found.");
        assert!(robots.passed() && sitemap.passed());
    }

    #[test]
    fn test_probes_missing_and_failed_score_the_same() {
        let (robots, sitemap) = evaluate_probes(
            ProbeOutcome::Missing { status: 404 },
            ProbeOutcome::Failed {
                message: "connection refused".to_string(),
            },
        );

        assert_eq!(robots.status, Status::Fail);
        assert_eq!(robots.indicator, Indicator::Warning);
        assert_eq!(robots.description, "Robots.txt unreachable.");

        assert_eq!(sitemap.status, Status::Fail);
        assert_eq!(sitemap.indicator, Indicator::Warning);
        assert_eq!(sitemap.description, CHECK_FAILED);
    }

    #[test]
    fn test_verdict_scoring() {
        assert!(Verdict::Pass.passed());
        assert!(Verdict::NotApplicable.passed());
        assert!(!Verdict::Fail.passed());
        assert!(!Verdict::Unknown.passed());
    }
}
