//! Report documents and Azure DevOps listing payloads for tests

/// Attachment type Stryker publishes its reports under
pub const REPORT_TYPE: &str = "stryker-mutator.mutation-report";

/// Minimal mutation report carrying its own bootstrap script
pub const SCRIPTED_REPORT_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Stryker Mutation Report</title>
</head>
<body>
  <mutation-test-report-app></mutation-test-report-app>
  <script>
    document.querySelector("mutation-test-report-app").report =
      {"schemaVersion":"1.7","thresholds":{"high":80,"low":60},"files":{}};
  </script>
</body>
</html>"#;

/// Mutation report rendered without any script of its own
pub const STATIC_REPORT_HTML: &str =
    "<html><body><h1>Mutation score: 87.5%</h1></body></html>";

/// Self link for an attachment, shaped like the Build API emits it
pub fn self_link(
    base: &str,
    build_id: i64,
    timeline_id: &str,
    record_id: &str,
    name: &str,
) -> String {
    format!(
        "{base}/web/_apis/build/builds/{build_id}/{timeline_id}/{record_id}/attachments/{REPORT_TYPE}/{name}"
    )
}

/// One listing entry with a self link
pub fn entry(href: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "_links": { "self": { "href": href } }
    })
}

/// One listing entry the service returned without any links
pub fn entry_without_links(name: &str) -> serde_json::Value {
    serde_json::json!({ "name": name })
}

/// Full listing payload
pub fn listing(entries: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({ "count": entries.len(), "value": entries })
}
