//! Known-answer tests against published digest vectors

use cryypt_hashing::{Hash, HashAlgorithm};
use hex_literal::hex;

#[test]
fn test_sha2_abc() {
    assert_eq!(
        Hash::sha256().hash(b"abc").as_bytes(),
        hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );
    assert_eq!(
        Hash::sha384().hash(b"abc").as_bytes(),
        hex!(
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed"
            "8086072ba1e7cc2358baeca134c825a7"
        )
    );
    assert_eq!(
        Hash::sha512().hash(b"abc").as_bytes(),
        hex!(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
            "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        )
    );
}

#[test]
fn test_sha3_abc() {
    assert_eq!(
        Hash::sha3_256().hash(b"abc").as_bytes(),
        hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532")
    );
    assert_eq!(
        Hash::sha3_512().hash(b"abc").as_bytes(),
        hex!(
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e"
            "10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
        )
    );
}

#[test]
fn test_blake2b_512() {
    let blake2b = Hash::blake2b();
    assert_eq!(
        blake2b.hash_with_size(b"abc", 64).expect("64 is valid").as_bytes(),
        hex!(
            "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1"
            "7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
        )
    );
    assert_eq!(
        blake2b.hash_with_size(b"", 64).expect("64 is valid").as_bytes(),
        hex!(
            "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419"
            "d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce"
        )
    );
}

#[test]
fn test_shake_empty_input() {
    assert_eq!(
        Hash::shake128().hash(b"").as_bytes(),
        hex!("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26")
    );
    assert_eq!(
        Hash::shake256().hash(b"").as_bytes(),
        hex!(
            "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"
            "d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be"
        )
    );
}

#[test]
fn test_cshake_email_signature() {
    let data = hex!("00010203");
    let cshake128 = HashAlgorithm::cshake128(b"", b"Email Signature");
    assert_eq!(
        cshake128.hash(&data).as_bytes(),
        hex!("c1c36925b6409a04f1b504fcbca9d82b4017277cb5ed2b2065fc1d3814d5aaf5")
    );
    let cshake256 = HashAlgorithm::cshake256(b"", b"Email Signature");
    assert_eq!(
        cshake256.hash(&data).as_bytes(),
        hex!(
            "d008828e2b80ac9d2218ffee1d070c48b8e4c87bff32c9699d5b6896eee0edd1"
            "64020e2be0560858d9c00c037e34a96937c561a74c412bb4c746469527281c8c"
        )
    );
}

#[test]
fn test_verify_known_digest() {
    let expected = hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    assert!(Hash::sha256().verify(b"abc", &expected).is_ok());
    assert!(Hash::sha256().try_verify(b"abc", &expected));
    assert!(!Hash::sha256().try_verify(b"abd", &expected));
}
