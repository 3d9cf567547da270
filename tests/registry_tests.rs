//! tests/registry_tests.rs
//! Registry construction and deployment overrides loaded from JSON

mod common;

use common::TEST_PASSWORD;
use cryptfmt_rs::{
    CodecId, Credentials, CryptError, Family, FormatChain, Hasher, RegistryOverrides,
    SchemeRegistry,
};
use std::sync::Arc;

#[test]
fn builtin_families_are_populated() {
    let registry = SchemeRegistry::with_builtin_schemes().unwrap();
    assert!(registry.schemes(Family::Modular).contains(&"argon2id"));
    assert!(registry.schemes(Family::Brace).contains(&"CLEARTEXT"));
    assert_eq!(
        registry.schemes(Family::Colon),
        vec!["PBKDF2", "PBKDF2-SHA256", "PBKDF2-SHA512"]
    );
    assert!(registry.lookup(Family::Brace, "ssha256").is_some());
    assert!(registry.lookup(Family::Colon, "pbkdf2").is_none());
    assert!(registry.lookup(Family::Modular, "7").is_none());
}

#[test]
fn overrides_parse_from_json() {
    let json = r#"{
        "schemes": [
            { "family": "modular", "scheme": "6", "default_work_factor": 10000 },
            { "family": "brace", "scheme": "SHA", "codec": "hex-lower" },
            { "family": "modular", "scheme": "argon2id", "memory_cost": 1024, "parallelism": 2 }
        ]
    }"#;
    let overrides: RegistryOverrides = serde_json::from_str(json).unwrap();
    let mut registry = SchemeRegistry::with_builtin_schemes().unwrap();
    registry.apply_overrides(&overrides).unwrap();

    let sha512 = registry.lookup(Family::Modular, "6").unwrap();
    assert_eq!(sha512.default_work_factor(), Some(10_000));

    let sha = registry.lookup(Family::Brace, "SHA").unwrap();
    assert_eq!(sha.codec(), CodecId::HexLower);
    let crypt = Hasher::new(sha).unwrap().encrypt(&Credentials::new(TEST_PASSWORD)).unwrap();
    assert_eq!(crypt, "{SHA}5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8");

    let argon2 = registry.lookup(Family::Modular, "argon2id").unwrap();
    let extended = argon2.extended().unwrap();
    assert_eq!((extended.memory_cost, extended.parallelism), (1024, 2));
}

#[test]
fn unknown_override_fields_are_rejected() {
    let json = r#"{ "schemes": [ { "family": "modular", "scheme": "6", "rounds": 10 } ] }"#;
    assert!(serde_json::from_str::<RegistryOverrides>(json).is_err());
}

#[test]
fn override_of_unregistered_scheme_fails() {
    let json = r#"{ "schemes": [ { "family": "colon", "scheme": "SCRYPT", "salt_len": 16 } ] }"#;
    let overrides: RegistryOverrides = serde_json::from_str(json).unwrap();
    let mut registry = SchemeRegistry::with_builtin_schemes().unwrap();
    assert!(matches!(
        registry.apply_overrides(&overrides),
        Err(CryptError::Configuration(_))
    ));
}

#[test]
fn invalid_override_leaves_registry_untouched() {
    // bcrypt costs stop at 31
    let json = r#"{ "schemes": [
        { "family": "brace", "scheme": "SSHA", "salt_len": 16 },
        { "family": "modular", "scheme": "2b", "default_work_factor": 40 }
    ] }"#;
    let overrides: RegistryOverrides = serde_json::from_str(json).unwrap();
    let mut registry = SchemeRegistry::with_builtin_schemes().unwrap();
    assert!(registry.apply_overrides(&overrides).is_err());
    assert_eq!(registry.lookup(Family::Brace, "SSHA").unwrap().salt_len(), 8);
}

#[test]
fn custom_registry_feeds_the_chain() {
    let mut registry = SchemeRegistry::new();
    registry
        .register(Family::Brace, "SSHA", cryptfmt_rs::schemes::brace_ssha1)
        .unwrap();
    let chain = FormatChain::standard(Arc::new(registry));
    let creds = Credentials::new(TEST_PASSWORD);
    assert!(chain.check(&creds, "{SSHA}pKqkNr1tq3wtQqk+UcPyA3HnA2NsU5NJ").unwrap());
    assert!(matches!(
        chain.check(&creds, "{SHA}W6ph5Mm5Pz8GgiULbPgzG37mj9g="),
        Err(CryptError::NoHasher(_))
    ));
}
