//! tests/common.rs
//! Known-answer crypts and helpers shared across test files

use cryptfmt_rs::{FormatChain, SchemeRegistry};
use std::sync::Arc;

/// Password behind most vectors below
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "password";

/// `(crypt, password)` pairs produced by independent implementations
/// (glibc/openssl crypt, python bcrypt, the Argon2 reference CLI, hashlib).
#[allow(dead_code)] // Used across multiple test files
pub const KNOWN_CRYPTS: &[(&str, &str)] = &[
    ("$1$5pZSV9va$azfrPr6af3Fc7dLblQXVa0", "password"),
    ("$1$3iuE5z/b$w2AETAQGQZBDtK0bYjTmy0", "password"),
    ("$apr1$lZL6V/ci$eIMz/iKDkbtys/uU7LEK00", "password"),
    (
        "$5$rounds=11858$WH1ABM5sKhxbkgCK$aTQsjPkz0rBsH3lQlJxw9HDTDXPKBxC0LlVeV69P.t1",
        "test",
    ),
    ("$5$WH1ABM5sKhxbkgCK$sOnTVjQn1Y3EWibd8gWqqJqjH.KaFrxJE5rijqxcPp7", "test"),
    (
        "$6$rounds=11531$G/gkPn17kHYo0gTF$Kq.uZBHlSBXyzsOJXtxJruOOH4yc0Is13uY7yK0PvAvXxbvc1w8DO1RzREMhKsc82K/Jh8OquV8FZUlreYPJk1",
        "test",
    ),
    (
        "$6$G/gkPn17kHYo0gTF$xhDFU0QYExdMH2ghOWKrrVtu1BuTpNMSJURCXk43.EYekmK8iwV6RNqftUUC8mqDel1J7m3JEbUkbu4YyqSyv/",
        "test",
    ),
    (
        "$2b$04$EGdrhbKUv8Oc9vGiXX0HQOxSg445d458Muh7DAHskb6QbtCvdxcie",
        "correctbatteryhorsestapler",
    ),
    ("$2y$05$bvIG6Nmid91Mu9RcmmWZfO5HJIMCT8riNW0hEp8f6/FuA2/mHZFpe", "password"),
    ("$3$$8846f7eaee8fb117ad06bdd830b7586c", "password"),
    (
        "$pbkdf2$1000$AAECAwQFBgcICQoLDA0ODw$Awni/k4L3.fQ/kgo1BwjRBbi2b8",
        "password",
    ),
    (
        "$pbkdf2-sha256$1000$AAECAwQFBgcICQoLDA0ODw$JeuGrMduQwGPGLmo.Qwv7UYtHHmeg9SK49fGkEamC2c",
        "password",
    ),
    (
        "$argon2i$v=19$m=65536,t=2,p=4$c29tZXNhbHQ$RdescudvJCsgt3ub+b+dWRWJTmaaJObG",
        "password",
    ),
    ("{SHA}W6ph5Mm5Pz8GgiULbPgzG37mj9g=", "password"),
    ("{SHA.HEX}5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8", "password"),
    ("{SHA256}XohImNooBHFR0OVvjcYpJ3NgPQ1qq73WKhHvch0VQtg=", "password"),
    ("{MD5}X03MO1qnZdYdgyfeuILPmQ==", "password"),
    ("{SSHA}pKqkNr1tq3wtQqk+UcPyA3HnA2NsU5NJ", "password"),
    (
        "{SSHA256}JDUXfxQQU2uq0qzBVcD5R4PVg4RXPLD3IVdENgYoXT8BAgMEBQYHCA==",
        "password",
    ),
    ("{SMD5}57CXHlLKXMjQU5+zQS9jFgECAwQFBgcI", "password"),
    ("{CLEARTEXT}password", "password"),
    ("{CRYPT}$1$5pZSV9va$azfrPr6af3Fc7dLblQXVa0", "password"),
    (
        "PBKDF2:1000:uGWNzmy5WSU7dlwF6WQp0oFysI6bbnXD:8aMHPG5KE0Z7t7VR6GSmbmYlpkSXEn6d",
        "password",
    ),
    (
        "PBKDF2-SHA256:1000:AQIDBAUGBwgBAgMEBQYHCAECAwQFBgcI:kn9/vbCxJ910UcmD1jA5tfJdY46nCQU5Czoz7vWRbH8=",
        "password",
    ),
    ("aZGJuE6EXrjEE", "test"),
    ("xOAFZqRz5RduI", "password"),
    ("5f4dcc3b5aa765d61d8327deb882cf99", "password"),
];

/// The builtin catalogue behind the standard family order
#[allow(dead_code)] // Used across multiple test files
pub fn standard_chain() -> FormatChain {
    FormatChain::standard(Arc::new(
        SchemeRegistry::with_builtin_schemes().expect("builtin schemes are valid"),
    ))
}
