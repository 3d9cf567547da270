//! tests/resolve_tests.rs
//! Family recognition and scheme lookup

mod common;

use common::{standard_chain, TEST_PASSWORD};
use cryptfmt_rs::format::{BraceFormat, ColonFormat, FixedLengthFormat, ModularFormat};
use cryptfmt_rs::{
    Algorithm, CodecId, Credentials, CryptError, CryptFormat, Family, FormatChain, SchemeRegistry,
};
use std::sync::Arc;

fn registry() -> Arc<SchemeRegistry> {
    Arc::new(SchemeRegistry::with_builtin_schemes().unwrap())
}

#[test]
fn md5_crypt_scenario() {
    let config = standard_chain()
        .resolve("$1$3iuE5z/b$JHyXMzQOIq3cl6WlEMoZC.")
        .unwrap();
    assert_eq!(config.family(), Family::Modular);
    assert_eq!(config.algorithm(), Algorithm::Md5Crypt);
}

#[test]
fn md5_crypt_scenario_salt_checks() {
    // same salt as above, password known
    let chain = standard_chain();
    let crypt = "$1$3iuE5z/b$w2AETAQGQZBDtK0bYjTmy0";
    assert!(chain.check(&Credentials::new(TEST_PASSWORD), crypt).unwrap());
    assert!(!chain.check(&Credentials::new("Password"), crypt).unwrap());
}

#[test]
fn ssha_scenario() {
    let chain = standard_chain();
    let crypt = "{SSHA}pKqkNr1tq3wtQqk+UcPyA3HnA2NsU5NJ";
    let config = chain.resolve(crypt).unwrap();
    assert_eq!(config.algorithm(), Algorithm::Sha1);
    let parts = chain.hasher_for(crypt).unwrap().parse(crypt).unwrap();
    assert_eq!(parts.salt().len(), 4);
}

#[test]
fn hex_md5_is_never_des() {
    let config = standard_chain()
        .resolve("5f4dcc3b5aa765d61d8327deb882cf99")
        .unwrap();
    assert_eq!(config.algorithm(), Algorithm::Md5);
    assert_eq!(config.codec(), CodecId::HexLower);
    let des = standard_chain().resolve("aZGJuE6EXrjEE").unwrap();
    assert_eq!(des.algorithm(), Algorithm::DesCrypt);
}

#[test]
fn each_family_ignores_the_others() {
    let registry = registry();
    let brace = BraceFormat::new(Arc::clone(&registry));
    let modular = ModularFormat::new(Arc::clone(&registry));
    let colon = ColonFormat::new(Arc::clone(&registry));
    let fixed = FixedLengthFormat::new(registry);

    let samples = [
        ("{SHA}W6ph5Mm5Pz8GgiULbPgzG37mj9g=", Family::Brace),
        ("$6$G/gkPn17kHYo0gTF$xhDFU0QYExdMH2ghOWKrrVtu1BuTpNMSJURCXk43.EYekmK8iwV6RNqftUUC8mqDel1J7m3JEbUkbu4YyqSyv/", Family::Modular),
        ("PBKDF2:1000:uGWNzmy5WSU7dlwF6WQp0oFysI6bbnXD:u+BetVYiks7q3Gu9SR6B4i+8ccTMTq2/", Family::Colon),
        ("xOAFZqRz5RduI", Family::FixedLength),
    ];
    let formats: [&dyn CryptFormat; 4] = [&brace, &modular, &colon, &fixed];
    for (crypt, family) in samples {
        for format in formats {
            let resolved = format.resolve(crypt);
            assert_eq!(resolved.is_some(), format.family() == family, "{crypt} via {}", format.family());
        }
    }
}

#[test]
fn unknown_scheme_is_absent_not_error() {
    let chain = standard_chain();
    assert!(chain.resolve("$7$CU..../....SALT$hash").is_none());
    assert!(chain.resolve("{SCRYPT}abc").is_none());
    assert!(chain.resolve("BCRYPT:10:salt:hash").is_none());
    assert!(chain.resolve("").is_none());
    assert!(matches!(chain.hasher_for("{SCRYPT}abc"), Err(CryptError::NoHasher(_))));
}

#[test]
fn brace_suffix_and_case() {
    let chain = standard_chain();
    let config = chain.resolve("{ssha.hex}abcd").unwrap();
    assert_eq!(config.scheme(), "SSHA");
    assert_eq!(config.codec(), CodecId::HexLower);
    assert!(chain.resolve("{SSHA.ZZZ}abcd").is_none());
}

#[test]
fn crypt_envelope_delegates_one_level() {
    let chain = standard_chain();
    let config = chain.resolve("{CRYPT}$5$WH1ABM5sKhxbkgCK$sOnTVjQn1Y3EWibd8gWqqJqjH.KaFrxJE5rijqxcPp7").unwrap();
    assert_eq!(config.algorithm(), Algorithm::Sha256Crypt);
    assert_eq!(config.envelope(), Some("{CRYPT}"));
    assert!(chain.resolve("{CRYPT}{SHA}W6ph5Mm5Pz8GgiULbPgzG37mj9g=").is_none());
}

#[test]
fn caller_order_decides_collisions() {
    // a 13-character colon crypt is also a plausible DES-crypt
    let registry = registry();
    let fixed: Arc<dyn CryptFormat> = Arc::new(FixedLengthFormat::new(Arc::clone(&registry)));
    let colon: Arc<dyn CryptFormat> = Arc::new(ColonFormat::new(registry));
    let fixed_first = FormatChain::new(vec![Arc::clone(&fixed), Arc::clone(&colon)]);
    let colon_first = FormatChain::new(vec![colon, fixed]);
    let crypt = "PBKDF2:1:ab:c";
    assert_eq!(crypt.len(), 13);
    assert_eq!(fixed_first.resolve(crypt).unwrap().family(), Family::FixedLength);
    assert_eq!(colon_first.resolve(crypt).unwrap().family(), Family::Colon);
}

#[test]
fn empty_registry_resolves_nothing() {
    let chain = FormatChain::standard(Arc::new(SchemeRegistry::new()));
    assert!(chain.resolve("$1$3iuE5z/b$JHyXMzQOIq3cl6WlEMoZC.").is_none());
    assert_eq!(chain.formats().len(), 4);
}
