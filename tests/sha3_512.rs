// These tests take too long for miri
#![cfg(not(miri))]
use std::path::Path;

use sha3_sponge::{Sha3_512, Variant};

use crate::rsp::KatSet;

mod rsp;

#[test]
fn test_small_vectors() {
    let kat_set = KatSet::load(Path::new(
        "tests/test-vectors/byte-oriented/SHA3_512ShortMsg.rsp",
    ));
    assert_eq!(512, kat_set.length);
    for test in kat_set.tests {
        let hash = sha3_sponge::sha3_512(&test.msg);
        assert_eq!(test.digest, hex::encode(hash), "length {} failed", test.len);
    }
}

#[test]
fn test_large_vectors() {
    let kat_set = KatSet::load(Path::new(
        "tests/test-vectors/byte-oriented/SHA3_512LongMsg.rsp",
    ));
    assert_eq!(512, kat_set.length);
    for test in kat_set.tests {
        let hash = sha3_sponge::hash(&test.msg, kat_set.length).unwrap();
        assert_eq!(test.digest, hex::encode(hash), "length {} failed", test.len);
    }
}

#[test]
fn test_vectors_incremental() {
    let kat_set = KatSet::load(Path::new(
        "tests/test-vectors/byte-oriented/SHA3_512LongMsg.rsp",
    ));
    for test in kat_set.tests {
        let mut hasher = Sha3_512::new();
        for chunk in test.msg.chunks(7) {
            hasher.update(chunk);
        }
        assert_eq!(test.digest, hex::encode(hasher.finalize()), "length {} failed", test.len);
    }
}

#[test]
fn test_vectors_reference() {
    let kat_set = KatSet::load(Path::new(
        "tests/test-vectors/byte-oriented/SHA3_512ShortMsg.rsp",
    ));
    let variant = Variant::try_from(kat_set.length).unwrap();
    // the bit model is slow, so only a few lengths around the first block end
    let rate = variant.params().rate_bytes();
    for test in kat_set
        .tests
        .iter()
        .filter(|test| [0, 1, rate - 1, rate].contains(&test.msg.len()))
    {
        let bits = sha3_sponge::reference::sponge(
            &sha3_sponge::reference::bits_from_bytes(&test.msg),
            variant.params(),
            sha3_sponge::Domain::Sha3,
            variant.bits(),
        );
        assert_eq!(
            test.digest,
            hex::encode(sha3_sponge::reference::bytes_from_bits(&bits)),
            "length {} failed",
            test.len
        );
    }
}
