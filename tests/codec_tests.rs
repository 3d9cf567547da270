//! tests/codec_tests.rs
//! Byte/text codec properties

use cryptfmt_rs::codec::detect;
use cryptfmt_rs::{Ambiguity, CodecId, CryptError};
use proptest::prelude::*;

const DETERMINISTIC: &[CodecId] = &[
    CodecId::Base64,
    CodecId::Base64Unpadded,
    CodecId::AdaptedBase64,
    CodecId::BCrypt,
    CodecId::Crypt,
    CodecId::CryptTruncated,
    CodecId::HexLower,
    CodecId::HexUpper,
    CodecId::Raw,
];

proptest! {
    #[test]
    fn decode_inverts_encode(bytes in proptest::collection::vec(any::<u8>(), 0..96)) {
        for id in DETERMINISTIC {
            let codec = id.codec();
            let text = codec.encode(&bytes);
            prop_assert_eq!(text.chars().count(), codec.encoded_len(bytes.len()), "{}", id);
            prop_assert_eq!(codec.decode(&text).unwrap(), bytes.clone(), "{}", id);
        }
    }

    #[test]
    fn encoded_text_stays_in_value_space(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
        for id in DETERMINISTIC {
            let codec = id.codec();
            let space = codec.value_space();
            if space.is_empty() {
                continue;
            }
            let text = codec.encode(&bytes);
            prop_assert!(text.chars().all(|c| c == '=' || space.contains(c)), "{} produced {}", id, text);
        }
    }

    #[test]
    fn auto_never_misreads_when_disallowing(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let text = CodecId::Auto.codec().encode(&bytes);
        match detect(&text, Ambiguity::Disallow) {
            Some(decoded) => {
                let is_hex = text.len() % 2 == 0 && text.bytes().all(|b| b.is_ascii_hexdigit());
                if !is_hex {
                    prop_assert_eq!(decoded, bytes);
                }
            }
            None => prop_assert!(text.len() % 4 == 0 && text.bytes().all(|b| b.is_ascii_hexdigit())),
        }
    }
}

#[test]
fn ambiguous_text_resolves_to_hex_or_nothing() {
    // valid hex and valid padded base64 at once
    let text = "deadbeef";
    assert_eq!(detect(text, Ambiguity::Allow).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(detect(text, Ambiguity::Disallow), None);
    assert!(matches!(
        CodecId::Auto.decode_with(text, Ambiguity::Disallow),
        Err(CryptError::Encoding(_))
    ));
}

#[test]
fn auto_falls_back_to_raw() {
    assert_eq!(detect("pass word!", Ambiguity::Disallow).unwrap(), b"pass word!".to_vec());
}

#[test]
fn brace_suffixes() {
    assert_eq!(CodecId::from_suffix("hex"), Some(CodecId::HexLower));
    assert_eq!(CodecId::from_suffix("B64"), Some(CodecId::Base64));
    assert_eq!(CodecId::from_suffix("BASE64"), Some(CodecId::Base64));
    assert_eq!(CodecId::from_suffix("RAW"), Some(CodecId::Raw));
    assert_eq!(CodecId::from_suffix("ROT13"), None);
}

#[test]
fn hex_accepts_either_case() {
    let codec = CodecId::HexLower.codec();
    assert_eq!(codec.decode("DEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(codec.encode(&[0xab]), "ab");
    assert_eq!(CodecId::HexUpper.codec().encode(&[0xab]), "AB");
}

#[test]
fn truncated_rejects_overfull_final_sextet() {
    let codec = CodecId::CryptTruncated.codec();
    // one byte leaves two bits in the final sextet; "z" carries six
    assert!(codec.decode("zz").is_err());
    assert_eq!(codec.decode("z1").unwrap(), vec![0xFF]);
}

#[test]
fn encode_range_bounds() {
    let codec = CodecId::HexLower.codec();
    assert_eq!(codec.encode_range(&[1, 2, 3, 4], 1, 2).unwrap(), "0203");
    assert!(matches!(
        codec.encode_range(&[1, 2, 3], 2, 5),
        Err(CryptError::Encoding(_))
    ));
}

#[test]
fn padded_base64_is_strict() {
    let codec = CodecId::Base64.codec();
    assert!(codec.decode("W6ph5Mm5Pz8GgiULbPgzG37mj9g").is_err());
    assert!(codec.decode("W6ph5Mm5Pz8GgiULbPgzG37mj9g=").is_ok());
    assert!(codec.decode("W6ph5Mm5Pz8GgiULbPgzG37mj9h=").is_err());
}
