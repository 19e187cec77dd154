use num_bigint::BigInt;
use recover_core::{
    DecodeError, RecoverError, RecoverResult, ShareDocument, SolveError,
};

fn recover(raw: &str) -> RecoverResult<BigInt> {
    let document: ShareDocument =
        serde_json::from_str(raw).expect("test documents are valid JSON");
    Ok(document.decode()?.recover_secret()?)
}

// f(x) = 3 + 2x + x^2 sampled at x = 1..4, each share in its own base.
const CONSISTENT: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "6" },
    "2": { "base": "2", "value": "1011" },
    "3": { "base": "16", "value": "12" },
    "4": { "base": "8", "value": "33" }
}"#;

// Same polynomial, but the share at x = 4 is corrupted.
const CORRUPTED: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "6" },
    "2": { "base": "10", "value": "11" },
    "3": { "base": "10", "value": "18" },
    "4": { "base": "10", "value": "999" }
}"#;

const BAD_DIGIT: &str = r#"{
    "keys": { "n": 3, "k": 2 },
    "1": { "base": "10", "value": "6" },
    "2": { "base": "2", "value": "1021" },
    "3": { "base": "10", "value": "18" }
}"#;

#[test]
fn consistent_document_recovers_the_secret() {
    assert_eq!(recover(CONSISTENT).unwrap(), BigInt::from(3));
}

#[test]
fn corrupted_share_is_outvoted() {
    assert_eq!(recover(CORRUPTED).unwrap(), BigInt::from(3));
}

#[test]
fn secrets_larger_than_machine_words_survive_the_pipeline() {
    // Constant polynomial: every pair of shares agrees on the secret.
    let raw = r#"{
        "keys": { "n": 3, "k": 2 },
        "1": { "base": "10", "value": "123456789012345678901234567890" },
        "2": { "base": "10", "value": "123456789012345678901234567890" },
        "3": { "base": "10", "value": "123456789012345678901234567890" }
    }"#;
    let expected =
        BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
    assert_eq!(recover(raw).unwrap(), expected);
}

#[test]
fn malformed_value_yields_no_secret() {
    assert!(matches!(
        recover(BAD_DIGIT),
        Err(RecoverError::Decode(DecodeError::MalformedValue { value, base }))
            if value == "1021" && base == 2
    ));
}

#[test]
fn underdetermined_document_yields_no_secret() {
    let raw = r#"{
        "keys": { "n": 2, "k": 3 },
        "1": { "base": "10", "value": "6" },
        "2": { "base": "10", "value": "11" }
    }"#;
    assert!(matches!(
        recover(raw),
        Err(RecoverError::Solve(SolveError::InsufficientPoints(3, 2)))
    ));
}

#[test]
fn one_bad_document_does_not_poison_the_batch() {
    let batch = [CONSISTENT, BAD_DIGIT, CORRUPTED];
    let outcomes: Vec<RecoverResult<BigInt>> =
        batch.iter().map(|raw| recover(raw)).collect();

    assert_eq!(outcomes[0].as_ref().unwrap(), &BigInt::from(3));
    assert!(outcomes[1].is_err());
    assert_eq!(outcomes[2].as_ref().unwrap(), &BigInt::from(3));
}

#[test]
fn tie_break_is_reproducible_across_runs() {
    // k = 1 over two inconsistent constants: every run must settle on the
    // share with the smallest x, the first subset enumerated.
    let raw = r#"{
        "keys": { "n": 2, "k": 1 },
        "2": { "base": "10", "value": "7" },
        "1": { "base": "10", "value": "5" }
    }"#;
    for _ in 0..8 {
        assert_eq!(recover(raw).unwrap(), BigInt::from(5));
    }
}
