//! End-to-end tests for the aeolens CLI against a mock site.

use aeolens_cli::{Cli, audit, render};
use clap::Parser;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

async fn start_site(status: u16, html: &str) -> MockServer {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("content-type", "text/html")
                .set_body_string(html),
        )
        .mount(&site)
        .await;
    site
}

#[tokio::test]
async fn test_text_report_for_live_page() {
    let site = start_site(
        200,
        r#"<html><head><meta name="viewport" content="width=device-width"></head>
        <body><h1>Title</h1><h2>Section</h2></body></html>"#,
    )
    .await;
    let cli = Cli::try_parse_from(["aeolens", site.uri().as_str()]).unwrap();

    let report = audit(&cli).await.unwrap();
    let text = render(&report, cli.json).unwrap();

    assert!(!report.is_failed());
    // headings, images (none), viewport
    assert_eq!(report.score, 30);
    assert!(text.contains("• Score            : 30/100"));
    assert!(text.contains("⚠️ Sitemap.xml"));
    assert!(text.contains("Sitemap not found at root."));
}

#[tokio::test]
async fn test_json_report_for_missing_page() {
    let site = start_site(404, "gone").await;
    let cli = Cli::try_parse_from(["aeolens", "--json", site.uri().as_str()]).unwrap();

    let report = audit(&cli).await.unwrap();
    let json = render(&report, cli.json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(report.is_failed());
    assert_eq!(value["score"], 0);
    assert_eq!(value["results"][0]["title"], "Analysis Failed");
    assert!(value["error"].as_str().unwrap().contains("404"));
}
