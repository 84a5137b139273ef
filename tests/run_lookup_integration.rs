//! End-to-end tests for run_lookup: input file -> paced lookups -> report
//! and CSV export.

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ip_lookup::{run_lookup, Config, LookupStatus};

fn write_input(lines: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp input file");
    write!(file, "{}", lines).expect("write input");
    file.flush().expect("flush input");
    file
}

fn test_config(input: &NamedTempFile, endpoint: String) -> Config {
    Config {
        file: input.path().to_path_buf(),
        delay_ms: 10,
        timeout_seconds: 5,
        endpoint,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_run_produces_report_and_csv() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "country": "United States",
            "regionName": "Virginia",
            "city": "Ashburn",
            "lat": 39.03,
            "lon": -77.5,
            "isp": "Google LLC",
            "org": "Google Public DNS"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/json/999.999.999.999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "fail",
            "message": "invalid query"
        })))
        .mount(&server)
        .await;

    let input = write_input("8.8.8.8\n\n  999.999.999.999  \n# trailing comment\n");
    let dir = tempfile::tempdir().expect("temp dir");
    let output = dir.path().join("results.csv");

    let mut config = test_config(&input, format!("{}/json", server.uri()));
    config.output = Some(output.clone());

    let report = run_lookup(config).await.expect("run completes");

    assert_eq!(report.total, 2);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.errored, 0);
    assert!(!report.cancelled);

    assert_eq!(report.records[0].ip, "8.8.8.8");
    assert_eq!(report.records[0].status, LookupStatus::Success);
    assert_eq!(report.records[1].ip, "999.999.999.999");
    assert!(matches!(
        report.records[1].status,
        LookupStatus::Failed { .. }
    ));

    let csv = std::fs::read_to_string(&output).expect("csv written");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "IP Address,ISP,Org,Country,Region,City,Latitude,Longitude"
    );
    assert!(lines[1].starts_with("8.8.8.8,Google LLC,"));
    assert!(lines[2].starts_with("999.999.999.999,N/A,"));
}

#[tokio::test]
async fn test_transport_errors_do_not_abort_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/8.8.8.8"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/json/1.1.1.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "country": "Australia",
            "regionName": "Queensland",
            "city": "Brisbane",
            "lat": -27.47,
            "lon": 153.02,
            "isp": "Cloudflare, Inc.",
            "org": "APNIC and Cloudflare DNS Resolver project"
        })))
        .mount(&server)
        .await;

    let input = write_input("8.8.8.8\n1.1.1.1\n");
    let config = test_config(&input, format!("{}/json", server.uri()));

    let report = run_lookup(config).await.expect("run completes");

    assert_eq!(report.total, 2);
    assert_eq!(report.errored, 1);
    assert_eq!(report.succeeded, 1);
    assert!(matches!(
        report.records[0].status,
        LookupStatus::Error { .. }
    ));
    assert_eq!(report.records[1].status, LookupStatus::Success);
}

#[tokio::test]
async fn test_empty_input_errors_before_any_network_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let input = write_input("   \n\t\n# comments only\n");
    let config = test_config(&input, format!("{}/json", server.uri()));

    let result = run_lookup(config).await;
    assert!(result.is_err());

    // dropping the server verifies the expect(0) above
}

#[tokio::test]
async fn test_missing_input_file_is_an_error() {
    let config = Config {
        file: "/nonexistent/definitely-not-here.txt".into(),
        ..Default::default()
    };
    assert!(run_lookup(config).await.is_err());
}
