//! tests/formatter_tests.rs
//! Payload grammars: canonical strings survive parse/format, constructed parts
//! survive format/parse, and damaged strings are Malformed

use cryptfmt_rs::schemes;
use cryptfmt_rs::{
    Algorithm, CodecId, CryptError, ExtendedDefaults, ExtendedParts, Family, FormatterKind,
    HasherConfiguration, Parts, PlainParts, SaltedParts, WorkFactorSaltedParts,
};

fn round_trip(config: &HasherConfiguration, parts: Parts) {
    let formatter = config.formatter().formatter();
    let crypt = formatter.format(&parts, config).unwrap();
    assert_eq!(formatter.parse(&crypt, config).unwrap(), parts, "{crypt}");
}

#[test]
fn salted_parts_round_trip() {
    round_trip(
        &schemes::md5_crypt().unwrap(),
        Parts::Salted(SaltedParts {
            salt: b"abc./XYZ".to_vec(),
            hash: (0..16).collect(),
        }),
    );
}

#[test]
fn empty_salt_segment_is_kept() {
    let config = schemes::md5_crypt().unwrap();
    let parts = Parts::Salted(SaltedParts {
        salt: Vec::new(),
        hash: vec![7; 16],
    });
    let crypt = config.formatter().formatter().format(&parts, &config).unwrap();
    assert!(crypt.starts_with("$1$$"));
    round_trip(&config, parts);
}

#[test]
fn iterative_rounds_prefix_only_when_not_implicit() {
    let config = schemes::sha256_crypt().unwrap();
    let formatter = config.formatter().formatter();
    let implicit = Parts::WorkFactorSalted(WorkFactorSaltedParts {
        work_factor: 5000,
        salt: b"saltsalt".to_vec(),
        hash: vec![1; 32],
    });
    let explicit = Parts::WorkFactorSalted(WorkFactorSaltedParts {
        work_factor: 12000,
        salt: b"saltsalt".to_vec(),
        hash: vec![1; 32],
    });
    assert!(formatter.format(&implicit, &config).unwrap().starts_with("$5$saltsalt$"));
    assert!(formatter
        .format(&explicit, &config)
        .unwrap()
        .starts_with("$5$rounds=12000$saltsalt$"));
    round_trip(&config, implicit);
    round_trip(&config, explicit);
}

#[test]
fn counted_parts_round_trip_in_both_families() {
    for config in [
        schemes::colon_pbkdf2_sha1().unwrap(),
        schemes::passlib_pbkdf2_sha256().unwrap(),
    ] {
        let hash_len = config.hash_len().unwrap();
        round_trip(
            &config,
            Parts::WorkFactorSalted(WorkFactorSaltedParts {
                work_factor: 1000,
                salt: (0..24).collect(),
                hash: vec![0xAB; hash_len],
            }),
        );
    }
}

#[test]
fn colon_scenario_reads_iterations() {
    let config = schemes::colon_pbkdf2_sha1().unwrap();
    let crypt = "PBKDF2:1000:uGWNzmy5WSU7dlwF6WQp0oFysI6bbnXD:u+BetVYiks7q3Gu9SR6B4i+8ccTMTq2/";
    let formatter = config.formatter().formatter();
    let parts = formatter.parse(crypt, &config).unwrap();
    assert_eq!(parts.work_factor(), Some(1000));
    assert_eq!(parts.salt().len(), 24);
    assert_eq!(formatter.format(&parts, &config).unwrap(), crypt);
}

#[test]
fn saltless_parts_round_trip() {
    round_trip(
        &schemes::nt_hash().unwrap(),
        Parts::Plain(PlainParts { hash: vec![0x5A; 16] }),
    );
}

#[test]
fn saltless_rejects_a_salt() {
    let config = schemes::nt_hash().unwrap();
    let err = config
        .formatter()
        .formatter()
        .parse("$3$salt$8846f7eaee8fb117ad06bdd830b7586c", &config)
        .unwrap_err();
    assert!(matches!(err, CryptError::Malformed(_)));
}

#[test]
fn extended_parts_round_trip_with_optional_params() {
    let config = schemes::argon2("id").unwrap();
    round_trip(
        &config,
        Parts::Extended(ExtendedParts {
            version: Some(19),
            memory_cost: 4096,
            time_cost: 3,
            parallelism: 2,
            key_id: Some("k1".into()),
            associated_data: Some(vec![1, 2, 3, 4]),
            salt: vec![9; 16],
            hash: vec![8; 32],
        }),
    );
    round_trip(
        &config,
        Parts::Extended(ExtendedParts {
            version: None,
            memory_cost: 64,
            time_cost: 1,
            parallelism: 1,
            salt: vec![9; 16],
            hash: vec![8; 32],
            ..ExtendedParts::default()
        }),
    );
}

#[test]
fn extended_rejects_bad_params() {
    let config = schemes::argon2("id").unwrap();
    let formatter = config.formatter().formatter();
    for crypt in [
        "$argon2id$v=19$m=64,t=1$c2FsdHNhbHQ$aGFzaA",
        "$argon2id$v=19$m=64,t=1,p=1,m=8$c2FsdHNhbHQ$aGFzaA",
        "$argon2id$v=19$m=64,t=1,p=1,x=1$c2FsdHNhbHQ$aGFzaA",
        "$argon2id$19$m=64,t=1,p=1$c2FsdHNhbHQ$aGFzaA",
        "$argon2id$v=19$m=64,t=1,p=1$c2FsdHNhbHQ",
    ] {
        assert!(
            matches!(formatter.parse(crypt, &config), Err(CryptError::Malformed(_))),
            "{crypt}"
        );
    }
}

#[test]
fn bcrypt_parts_round_trip() {
    round_trip(
        &schemes::bcrypt("2b").unwrap(),
        Parts::WorkFactorSalted(WorkFactorSaltedParts {
            work_factor: 4,
            salt: (0..16).collect(),
            hash: (0..23).collect(),
        }),
    );
}

#[test]
fn bcrypt_cost_must_be_two_digits() {
    let config = schemes::bcrypt("2b").unwrap();
    let crypt = "$2b$4$EGdrhbKUv8Oc9vGiXX0HQOxSg445d458Muh7DAHskb6QbtCvdxcie";
    assert!(matches!(
        config.formatter().formatter().parse(crypt, &config),
        Err(CryptError::Malformed(_))
    ));
}

#[test]
fn salted_digest_salt_is_the_remainder() {
    let config = schemes::brace_ssha1().unwrap();
    let parts = config
        .formatter()
        .formatter()
        .parse("{SSHA}pKqkNr1tq3wtQqk+UcPyA3HnA2NsU5NJ", &config)
        .unwrap();
    assert_eq!(parts.hash().len(), 20);
    assert_eq!(parts.salt().len(), 4);
    round_trip(
        &config,
        Parts::Salted(SaltedParts {
            salt: vec![1, 2, 3, 4, 5, 6, 7, 8],
            hash: vec![0xEE; 20],
        }),
    );
}

#[test]
fn salted_digest_shorter_than_digest_is_malformed() {
    let config = schemes::brace_ssha1().unwrap();
    assert!(matches!(
        config.formatter().formatter().parse("{SSHA}AAAA", &config),
        Err(CryptError::Malformed(_))
    ));
}

#[test]
fn prefix_salted_parts_round_trip() {
    let config = schemes::des_crypt().unwrap();
    let parts = config
        .formatter()
        .formatter()
        .parse("aZGJuE6EXrjEE", &config)
        .unwrap();
    assert_eq!(parts.salt(), b"aZ");
    assert_eq!(parts.hash().len(), 8);
    round_trip(&config, parts);
}

#[test]
fn plain_hex_round_trip() {
    round_trip(
        &schemes::bare_md5().unwrap(),
        Parts::Plain(PlainParts { hash: (0..16).collect() }),
    );
}

#[test]
fn wrong_field_count_is_malformed() {
    let config = schemes::md5_crypt().unwrap();
    let formatter = config.formatter().formatter();
    for crypt in ["$1$onlyone", "$1$a$b$c"] {
        assert!(matches!(formatter.parse(crypt, &config), Err(CryptError::Malformed(_))), "{crypt}");
    }
}

#[test]
fn foreign_scheme_is_a_configuration_error() {
    let config = schemes::md5_crypt().unwrap();
    let err = config
        .formatter()
        .formatter()
        .parse("$5$WH1ABM5sKhxbkgCK$sOnTVjQn1Y3EWibd8gWqqJqjH.KaFrxJE5rijqxcPp7", &config)
        .unwrap_err();
    assert!(matches!(err, CryptError::Configuration(_)));
}

#[test]
fn wrong_parts_kind_is_refused() {
    let config = schemes::md5_crypt().unwrap();
    let err = config
        .formatter()
        .formatter()
        .format(&Parts::Plain(PlainParts { hash: vec![0; 16] }), &config)
        .unwrap_err();
    assert!(matches!(err, CryptError::Malformed(_)));
}

#[test]
fn custom_colon_scheme() {
    let config = HasherConfiguration::builder(
        "SSHA1",
        Family::Colon,
        Algorithm::Sha1,
        FormatterKind::Salted,
    )
    .with_codec(CodecId::HexUpper)
    .with_salt_len(4)
    .build()
    .unwrap();
    let parts = Parts::Salted(SaltedParts {
        salt: vec![0xde, 0xad, 0xbe, 0xef],
        hash: vec![0x11; 20],
    });
    let crypt = config.formatter().formatter().format(&parts, &config).unwrap();
    assert!(crypt.starts_with("SSHA1:DEADBEEF:"));
    round_trip(&config, parts);
}

#[test]
fn memory_hard_defaults_are_configurable() {
    let config = schemes::argon2("id")
        .unwrap()
        .derive()
        .with_extended(ExtendedDefaults {
            version: 0x13,
            memory_cost: 8,
            time_cost: 1,
            parallelism: 1,
            key_id: None,
            associated_data: None,
        })
        .build()
        .unwrap();
    assert_eq!(config.extended().unwrap().memory_cost, 8);
}
