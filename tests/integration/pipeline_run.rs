//! Full export pipeline run against a scripted API
//!
//! Exercises the configured base URL end to end: profile lookup, balance
//! lookup, statement fetch, and the written CSV file.

use statement_exporter::config::AppConfig;
use statement_exporter::{ExportFormat, ExportPipeline, ExportTarget};

use super::support::{ok_json, serve_script, write_test_key};

fn config_for(addr: std::net::SocketAddr) -> AppConfig {
    AppConfig {
        api_token: "secret-token".to_string(),
        profile: "Jane Doe".to_string(),
        locale: "en".to_string(),
        pdf_locale: "en".to_string(),
        currency: "EUR".to_string(),
        api_url: format!("http://{addr}"),
    }
}

#[tokio::test]
async fn test_csv_export_writes_statement_from_configured_api() {
    let (_key, key_file) = write_test_key();
    let (addr, captured) = serve_script(vec![
        ok_json(r#"[{"id":7,"fullName":"Jane Doe"}]"#),
        ok_json(r#"[{"id":42,"currency":"EUR"}]"#),
        ok_json(
            r#"{"transactions":[
                {"date":"2024-03-05T09:00:00.000Z",
                 "details":{"description":"Refund"},
                 "amount":{"value":10.00,"currency":"EUR"}},
                {"date":"2024-03-12T18:30:00.000Z",
                 "details":{"description":"Card payment"},
                 "amount":{"value":-3.50,"currency":"EUR"}}
            ]}"#,
        ),
    ])
    .await;

    let dir = tempfile::tempdir().unwrap();
    let template = dir
        .path()
        .join("export_@Y@-@m@_@c@.@t@")
        .to_string_lossy()
        .into_owned();

    let target = ExportTarget {
        month: 3,
        year: 2024,
        currency: None,
        output_template: template,
        format: ExportFormat::Csv,
    };

    let pipeline = ExportPipeline::new(config_for(addr), key_file.path());
    let path = pipeline.run(&target).await.unwrap();
    assert!(path.ends_with("export_2024-03_EUR.csv"));

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "DATA;;");
    assert_eq!(lines[1], "03/05/2024;\"Refund\";10.00;\"C\"");
    assert_eq!(lines[2], "03/12/2024;\"Card payment\";3.50;\"D\"");

    // One request per step, addressed to the configured base URL
    let requests = captured.lock().unwrap().clone();
    assert_eq!(requests.len(), 3);
    assert!(requests[0].starts_with("GET /v1/profiles "));
    assert!(requests[1].starts_with("GET /v4/profiles/7/balances?types=STANDARD "));
    assert!(requests[2].contains("/v1/profiles/7/balance-statements/42/statement.json"));
    assert!(requests[2].contains("currency=EUR"));
    assert!(requests[2].contains("intervalStart=2024-03-01T00:00:00.000Z"));
    assert!(requests[2].contains("intervalEnd=2024-03-31T23:59:59.999Z"));
    assert!(requests[2].contains("type=FLAT"));
}

#[tokio::test]
async fn test_unknown_owner_aborts_before_balance_lookup() {
    let (_key, key_file) = write_test_key();
    let (addr, captured) =
        serve_script(vec![ok_json(r#"[{"id":7,"fullName":"Someone Else"}]"#)]).await;

    let dir = tempfile::tempdir().unwrap();
    let template = dir
        .path()
        .join("export_@Y@-@m@_@c@.@t@")
        .to_string_lossy()
        .into_owned();

    let target = ExportTarget {
        month: 3,
        year: 2024,
        currency: None,
        output_template: template,
        format: ExportFormat::Csv,
    };

    let pipeline = ExportPipeline::new(config_for(addr), key_file.path());
    assert!(pipeline.run(&target).await.is_err());

    assert_eq!(captured.lock().unwrap().len(), 1);
    // Nothing is written on a selection failure
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
