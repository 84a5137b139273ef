//! CSV export tests.

use ip_lookup::{export_csv, GeoLookup, LookupRecord, LookupStatus};

fn success_record(ip: &str, isp: &str) -> LookupRecord {
    LookupRecord::from_geo(
        ip,
        GeoLookup {
            isp: isp.to_string(),
            org: "Example Org".to_string(),
            country: "United States".to_string(),
            region: "Virginia".to_string(),
            city: "Ashburn".to_string(),
            lat: "39.03".to_string(),
            lon: "-77.5".to_string(),
        },
    )
}

#[test]
fn test_export_writes_header_and_rows_in_order() {
    let records = vec![
        success_record("8.8.8.8", "Google LLC"),
        LookupRecord::placeholder(
            "999.999.999.999",
            LookupStatus::Failed {
                message: "invalid query".to_string(),
            },
        ),
        success_record("1.1.1.1", "Cloudflare"),
    ];

    let dir = tempfile::tempdir().expect("temp dir");
    let output = dir.path().join("results.csv");

    let written = export_csv(&records, Some(&output)).expect("export succeeds");
    assert_eq!(written, 3);

    let contents = std::fs::read_to_string(&output).expect("file readable");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "IP Address,ISP,Org,Country,Region,City,Latitude,Longitude"
    );
    assert_eq!(
        lines[1],
        "8.8.8.8,Google LLC,Example Org,United States,Virginia,Ashburn,39.03,-77.5"
    );
    // failed lookups are exported with their placeholder fields, keeping one
    // row per input
    assert_eq!(lines[2], "999.999.999.999,N/A,N/A,N/A,N/A,N/A,N/A,N/A");
    assert!(lines[3].starts_with("1.1.1.1,Cloudflare,"));
}

#[test]
fn test_export_quotes_fields_containing_commas() {
    let records = vec![success_record("8.8.8.8", "Acme, Inc.")];

    let dir = tempfile::tempdir().expect("temp dir");
    let output = dir.path().join("results.csv");
    export_csv(&records, Some(&output)).expect("export succeeds");

    let contents = std::fs::read_to_string(&output).expect("file readable");
    assert!(contents.contains("\"Acme, Inc.\""));
}

#[test]
fn test_export_empty_collection_is_a_noop() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = dir.path().join("results.csv");

    let written = export_csv(&[], Some(&output)).expect("empty export is ok");
    assert_eq!(written, 0);
    // nothing was written, not even a header
    assert!(!output.exists());
}
