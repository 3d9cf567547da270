//! tests/batch_ops_tests.rs
//! Parallel encrypt/check (feature `batch-ops`)

#[cfg(feature = "batch-ops")]
mod common;

#[cfg(feature = "batch-ops")]
use common::TEST_PASSWORD;
#[cfg(feature = "batch-ops")]
use cryptfmt_rs::{check_batch, encrypt_batch, schemes, Credentials, CryptError, Hasher};

#[cfg(feature = "batch-ops")]
fn hasher() -> Hasher {
    let config = schemes::passlib_pbkdf2_sha256()
        .unwrap()
        .derive()
        .with_default_work_factor(1000)
        .build()
        .unwrap();
    Hasher::new(config).unwrap()
}

#[cfg(feature = "batch-ops")]
#[test]
fn batch_results_keep_input_order() {
    let hasher = hasher();
    let users: Vec<Credentials> = (0..8).map(|i| Credentials::new(format!("{TEST_PASSWORD}{i}"))).collect();
    let crypts = encrypt_batch(&hasher, &users).unwrap();
    assert_eq!(crypts.len(), users.len());

    // pair each password with its neighbour's crypt on odd slots
    let batch: Vec<(Credentials, String)> = users
        .iter()
        .enumerate()
        .map(|(i, creds)| {
            let crypt = if i % 2 == 0 { &crypts[i] } else { &crypts[i - 1] };
            (creds.clone(), crypt.clone())
        })
        .collect();
    let verdicts = check_batch(&hasher, &batch).unwrap();
    let expected: Vec<bool> = (0..8).map(|i| i % 2 == 0).collect();
    assert_eq!(verdicts, expected);
}

#[cfg(feature = "batch-ops")]
#[test]
fn batch_check_fails_on_a_damaged_crypt() {
    let hasher = hasher();
    let creds = Credentials::new(TEST_PASSWORD);
    let good = hasher.encrypt(&creds).unwrap();
    let batch = vec![
        (creds.clone(), good),
        (creds, "$pbkdf2-sha256$1000$AAEC".to_string()),
    ];
    assert!(matches!(check_batch(&hasher, &batch), Err(CryptError::Malformed(_))));
}
