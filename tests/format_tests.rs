//! Display, error and serde behavior of the parsed values.

#![cfg(feature = "all")]

use tunnus::*;

// ---------------------------------------------------------------------------
// Snapshot tests (insta)
// ---------------------------------------------------------------------------

#[test]
fn pin_debug_snapshot() {
    let pin = parse_pin("171001a413l").unwrap();
    insta::assert_debug_snapshot!(pin, @r###"
    PersonalIdentityNumber {
        text: "171001A413L",
        date_of_birth: 2001-10-17,
        marker: A,
        individual_number: 413,
        control: 'L',
    }
    "###);
}

#[test]
fn error_messages_snapshot() {
    let messages: Vec<String> = [
        parse_pin("17058+123C").unwrap_err(),
        parse_pin("290200-900B").unwrap_err(),
        parse_pin("311280-8880").unwrap_err(),
        parse_vat("SE15728600").unwrap_err(),
        parse_vat("FI07375463").unwrap_err(),
        parse_business_id("0000006-0").unwrap_err(),
        parse_finuid("10011187J").unwrap_err(),
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    insta::assert_snapshot!(messages.join("\n"), @r###"
    malformed personal identity number: expected DDMMYYCIIIK (11 characters)
    no such date: 1900-02-29
    personal identity number control mismatch: expected 'Y', found '0'
    VAT number must start with 'FI', found 'SE'
    VAT number control mismatch: expected '2', found '3'
    business ID weighted sum leaves remainder 1, which has no control digit
    FINUID control mismatch: expected 'H', found 'J'
    "###);
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[test]
fn serializes_as_string() {
    let pin = parse_pin("311280-888y").unwrap();
    assert_eq!(serde_json::to_string(&pin).unwrap(), "\"311280-888Y\"");

    let vat = parse_vat("FI15728600").unwrap();
    assert_eq!(serde_json::to_string(&vat).unwrap(), "\"FI15728600\"");
}

#[test]
fn deserialize_validates() {
    let id: BusinessId = serde_json::from_str("\"0737546-2\"").unwrap();
    assert_eq!(id.number(), 737546);

    let err = serde_json::from_str::<BusinessId>("\"0737546-3\"").unwrap_err();
    assert!(err.to_string().contains("control mismatch"));

    assert!(serde_json::from_str::<PersonalIdentityNumber>("\"311280-8880\"").is_err());
    assert!(serde_json::from_str::<Finuid>("\"10011187H\"").is_ok());
    assert!(serde_json::from_str::<VatNumber>("\"15728600\"").is_err());
}

#[test]
fn century_marker_serde() {
    assert_eq!(serde_json::to_string(&CenturyMarker::Minus).unwrap(), "\"Minus\"");
    assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"Female\"");
}

// ---------------------------------------------------------------------------
// Validator object
// ---------------------------------------------------------------------------

#[test]
fn finland_validator() {
    fn check(v: &impl IdentityValidator) -> (bool, bool, bool) {
        (
            v.validate_pin("170583+123C"),
            v.validate_ssn("311280-8880"),
            v.validate_vat("FI15728600"),
        )
    }
    assert_eq!(check(&Finland), (true, false, true));
    assert!(Finland.validate_business_id("1572860-0"));
    assert!(Finland.validate_finuid("10011187H"));
}

#[test]
fn validators_are_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| (0..100).all(|_| validate_pin("170583+123C"))))
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
