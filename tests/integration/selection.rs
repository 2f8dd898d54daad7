//! Profile and balance selection behavior
//!
//! A miss or an ambiguous match must surface as a named selection error
//! before any output file is created.

use statement_exporter::export::{select_balance, select_profile, ExportError};
use statement_exporter::{Balance, Profile};

fn profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: 100,
            full_name: "Jane Doe".to_string(),
        },
        Profile {
            id: 200,
            full_name: "Acme Ltd".to_string(),
        },
    ]
}

#[test]
fn test_owner_name_must_match_exactly() {
    let all = profiles();
    assert_eq!(select_profile(&all, "Jane Doe").unwrap().id, 100);

    // Case and whitespace matter
    assert!(select_profile(&all, "jane doe").is_err());
    assert!(select_profile(&all, "Jane Doe ").is_err());
}

#[test]
fn test_missing_currency_reports_selection_error() {
    let balances = vec![Balance {
        id: 1,
        currency: "EUR".to_string(),
    }];

    let err = select_balance(&balances, "CHF").unwrap_err();
    match err {
        ExportError::Selection(message) => assert!(message.contains("CHF")),
        other => panic!("expected selection error, got: {other}"),
    }
}

#[test]
fn test_duplicate_currency_is_not_silently_tie_broken() {
    let balances = vec![
        Balance {
            id: 1,
            currency: "EUR".to_string(),
        },
        Balance {
            id: 2,
            currency: "EUR".to_string(),
        },
    ];

    assert!(matches!(
        select_balance(&balances, "EUR"),
        Err(ExportError::Selection(_))
    ));
}

#[test]
fn test_empty_profile_list_is_selection_error() {
    assert!(matches!(
        select_profile(&[], "Jane Doe"),
        Err(ExportError::Selection(_))
    ));
}
