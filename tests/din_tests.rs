#![cfg(feature = "din")]

use mobilityid::din;
use mobilityid::{ContractId, ContractIdError, Field, Scheme, compute_check_digit};

// ---------------------------------------------------------------------------
// Parsing — accepted input
// ---------------------------------------------------------------------------

#[test]
fn parse_without_check_digit() {
    let id = din::parse("DE-ABC-1A2B3C").unwrap();
    assert_eq!(id.country_code(), "DE");
    assert_eq!(id.party_code(), "ABC");
    assert_eq!(id.instance_value(), "1A2B3C");
    assert_eq!(id.check_digit(), None);
    assert_eq!(id.to_string(), "DE-ABC-1A2B3C");
}

#[test]
fn parse_star_separators_with_check_digit() {
    assert_eq!(compute_check_digit("DEABC1A2B3C"), 'X');
    let id = din::parse("DE*ABC*1A2B3C*X").unwrap();
    assert_eq!(id.check_digit(), Some('X'));
    assert_eq!(id.to_string(), "DE-ABC-1A2B3C-X");
}

#[test]
fn parse_star_separators_wrong_check_digit() {
    assert_eq!(
        din::parse("DE*ABC*1A2B3C*5"),
        Err(ContractIdError::CheckDigitMismatch {
            provided: '5',
            computed: 'X',
        })
    );
}

#[test]
fn parse_compact_form() {
    let id = din::parse("NLTNM0122045").unwrap();
    assert_eq!(id.to_string(), "NL-TNM-012204-5");
    assert_eq!(id.to_compact_string(), "NLTNM0122045");
}

#[test]
fn parse_lowercase_input() {
    let id = din::parse("nl-tnm-000722-3").unwrap();
    assert_eq!(id.to_string(), "NL-TNM-000722-3");
    assert_eq!(id.party_id(), "NL-TNM");
    assert_eq!(id.compact_party_id(), "NLTNM");
}

#[test]
fn parse_lowercase_x_check_digit() {
    let id = din::parse("DE-ABC-1A2B3C-x").unwrap();
    assert_eq!(id.check_digit(), Some('X'));
}

#[test]
fn parse_zero_check_digit() {
    let id = din::parse("FR-XYZ-999999-0").unwrap();
    assert_eq!(id.check_digit(), Some('0'));
    assert_eq!(id.to_string(), "FR-XYZ-999999-0");
}

#[test]
fn parse_via_from_str() {
    let id: ContractId = "NL-TNM-012204-5".parse().unwrap();
    assert_eq!(id.scheme(), Scheme::Din);
}

// ---------------------------------------------------------------------------
// Parsing — rejected input
// ---------------------------------------------------------------------------

#[test]
fn parse_invalid_country() {
    assert_eq!(
        din::parse("ZZ-ABC-123456"),
        Err(ContractIdError::InvalidCountryCode { value: "ZZ".into() })
    );
}

#[test]
fn parse_lowercase_invalid_country_reports_upcased_value() {
    assert_eq!(
        din::parse("zz-abc-123456"),
        Err(ContractIdError::InvalidCountryCode { value: "ZZ".into() })
    );
}

#[test]
fn parse_malformed() {
    for input in ["not-an-id", "", "DE", "DE-ABC", "DE-AB-123456", "D1-ABC-123456"] {
        let err = din::parse(input).unwrap_err();
        assert!(
            matches!(err, ContractIdError::NotAnIdentifier { .. }),
            "{input}: {err}"
        );
    }
}

#[test]
fn parse_rejects_other_separators() {
    for input in ["DE_ABC_123456", "DE ABC 123456", "DE--ABC-123456", "DE.ABC.123456"] {
        assert!(
            matches!(
                din::parse(input),
                Err(ContractIdError::NotAnIdentifier { .. })
            ),
            "{input}"
        );
    }
}

#[test]
fn parse_does_not_trim() {
    assert!(matches!(
        din::parse(" NL-TNM-012204-5"),
        Err(ContractIdError::NotAnIdentifier { .. })
    ));
    assert!(matches!(
        din::parse("NL-TNM-012204-5\n"),
        Err(ContractIdError::NotAnIdentifier { .. })
    ));
}

#[test]
fn parse_overlong_instance() {
    let err = din::parse("DE-ABC-12345678").unwrap_err();
    assert_eq!(err.field(), Some(Field::InstanceValue));
    assert!(matches!(err, ContractIdError::InvalidLength { min: 1, max: 6, .. }));

    let err = din::parse("DE*ABC*1A2B3C4*X").unwrap_err();
    assert!(matches!(err, ContractIdError::InvalidLength { .. }));
}

#[test]
fn parse_short_instance() {
    assert!(matches!(
        din::parse("DE-ABC-12345"),
        Err(ContractIdError::NotAnIdentifier { .. })
    ));
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_no_check_digit_computes_it() {
    let id = din::new_no_check_digit("DE", "ABC", "1A2B3C").unwrap();
    assert_eq!(id.check_digit(), Some('X'));
    assert_eq!(id.to_string(), "DE-ABC-1A2B3C-X");
    assert_eq!(id.to_compact_string(), "DEABC1A2B3CX");
    assert_eq!(id.to_compact_string_no_check_digit(), "DEABC1A2B3C");
}

#[test]
fn new_no_check_digit_upcases_party_and_instance() {
    let id = din::new_no_check_digit("NL", "tnm", "abcdef").unwrap();
    assert_eq!(id.party_code(), "TNM");
    assert_eq!(id.instance_value(), "ABCDEF");
}

#[test]
fn new_no_check_digit_rejects_lowercase_country() {
    assert_eq!(
        din::new_no_check_digit("nl", "TNM", "012204"),
        Err(ContractIdError::InvalidCountryCode { value: "nl".into() })
    );
}

#[test]
fn new_no_check_digit_short_instance() {
    let id = din::new_no_check_digit("NL", "TNM", "12").unwrap();
    assert_eq!(id.instance_value(), "12");
    assert_eq!(id.check_digit(), Some(compute_check_digit("NLTNM12")));
}

#[test]
fn new_no_check_digit_overlong_instance() {
    assert_eq!(
        din::new_no_check_digit("DE", "ABC", "1234567"),
        Err(ContractIdError::InvalidLength {
            field: Field::InstanceValue,
            value: "1234567".into(),
            min: 1,
            max: din::INSTANCE_MAX_LENGTH,
        })
    );
}

#[test]
fn new_no_check_digit_missing_fields() {
    assert_eq!(
        din::new_no_check_digit("DE", "ABC", ""),
        Err(ContractIdError::RequiredFieldMissing {
            field: Field::InstanceValue
        })
    );
    assert_eq!(
        din::new_no_check_digit("", "ABC", "123456"),
        Err(ContractIdError::RequiredFieldMissing {
            field: Field::CountryCode
        })
    );
}

#[test]
fn new_with_check_digit_match() {
    let id = din::new_with_check_digit("NL", "TNM", "000722", '3').unwrap();
    assert_eq!(id.to_string(), "NL-TNM-000722-3");
}

#[test]
fn new_with_check_digit_mismatch() {
    assert_eq!(
        din::new_with_check_digit("NL", "TNM", "000722", '4'),
        Err(ContractIdError::CheckDigitMismatch {
            provided: '4',
            computed: '3',
        })
    );
}

#[test]
fn constructed_equals_parsed() {
    let built = din::new_no_check_digit("NL", "TNM", "012204").unwrap();
    let parsed = din::parse("NL*TNM*012204*5").unwrap();
    assert_eq!(built, parsed);

    let parsed_bare = din::parse("NL-TNM-012204").unwrap();
    assert_ne!(built, parsed_bare);
    assert_eq!(parsed_bare.with_computed_check_digit(), built);
}

// ---------------------------------------------------------------------------
// Error messages (insta inline snapshots)
// ---------------------------------------------------------------------------

#[test]
fn error_messages() {
    let msg = |r: Result<ContractId, ContractIdError>| r.unwrap_err().to_string();

    insta::assert_snapshot!(
        msg(din::parse("not-an-id")),
        @"not a DIN contract ID: 'not-an-id'"
    );
    insta::assert_snapshot!(
        msg(din::parse("ZZ-ABC-123456")),
        @"country code 'ZZ' is not valid"
    );
    insta::assert_snapshot!(
        msg(din::parse("NL-TNM-012204-4")),
        @"provided check digit '4' doesn't match computed one '5'"
    );
    insta::assert_snapshot!(
        msg(din::new_no_check_digit("DE", "ABC", "1234567")),
        @"instance_value '1234567' must be between 1 and 6 characters long"
    );
    insta::assert_snapshot!(
        msg(din::new_no_check_digit("DE", "AB", "123456")),
        @"party_code 'AB' must be exactly 3 characters long"
    );
    insta::assert_snapshot!(
        msg(din::new_no_check_digit("DE", "ABC", "")),
        @"instance_value is required"
    );
    insta::assert_snapshot!(
        msg(din::new_no_check_digit("DE", "A+C", "123456")),
        @"party_code 'A+C' must only contain ASCII letters and digits"
    );
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[test]
fn serde_roundtrip() {
    let id = din::new_no_check_digit("NL", "TNM", "012204").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"NL-TNM-012204-5\"");
    let back: ContractId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn serde_rejects_invalid() {
    let err = serde_json::from_str::<ContractId>("\"ZZ-ABC-123456\"").unwrap_err();
    assert!(err.to_string().contains("country code 'ZZ' is not valid"));
}
