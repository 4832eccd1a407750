//! End-to-end correctness of the functional encryption stack.

use bcfe_circuits::{CircuitDescription, CircuitInstance};
use bcfe_schemes::{
    FeError, Gvw, GvwSsAes, OneQueryFe, SsAes, SsSingletonAes, Stateful, StatefulSsAes,
};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

fn ip_description() -> CircuitDescription {
    CircuitDescription::InnerProductModP {
        modulus: 101,
        numbers: 4,
    }
}

fn ip_circuit() -> CircuitInstance {
    CircuitInstance::InnerProductModP {
        modulus: 101,
        coefficients: vec![11, 2, 45, 13],
    }
}

// (11*100 + 2*97 + 45*3 + 13*17) mod 101 = 1650 mod 101 = 34
const IP_MESSAGE: [u64; 4] = [100, 97, 3, 17];
const IP_EXPECTED: u64 = 34;

#[test]
fn ss_inner_product_mod_101() {
    let mut rng = ChaCha12Rng::seed_from_u64(0);

    let fe = SsAes::with_description(ip_description());
    let (msk, mpk) = fe.setup(&mut rng, 16).unwrap();
    let sk = fe.keygen(&mut rng, &msk, &ip_circuit()).unwrap();
    let ct = fe.encrypt(&mut rng, &mpk, &IP_MESSAGE).unwrap();

    assert_eq!(fe.decrypt(&sk, &ct).unwrap(), vec![IP_EXPECTED]);
}

#[test]
fn ss_singleton_inner_product_mod_101() {
    let mut rng = ChaCha12Rng::seed_from_u64(1);

    let fe = SsSingletonAes::with_description(ip_description());
    let (msk, mpk) = fe.setup(&mut rng, 16).unwrap();
    let sk = fe.keygen(&mut rng, &msk, &ip_circuit()).unwrap();
    let ct = fe.encrypt(&mut rng, &mpk, &IP_MESSAGE).unwrap();

    assert_eq!(fe.decrypt(&sk, &ct).unwrap(), vec![IP_EXPECTED]);
}

#[test]
fn ss_hamming_distance() {
    let mut rng = ChaCha12Rng::seed_from_u64(2);

    let fe = SsAes::with_description(CircuitDescription::Hamming { size: 4 });
    let (msk, mpk) = fe.setup(&mut rng, 16).unwrap();

    let circuit = CircuitInstance::Hamming {
        bits: vec![0, 1, 1, 1],
    };
    let sk = fe.keygen(&mut rng, &msk, &circuit).unwrap();
    let ct = fe.encrypt(&mut rng, &mpk, &[1, 1, 0, 1]).unwrap();

    assert_eq!(fe.decrypt(&sk, &ct).unwrap(), vec![2]);
}

#[test]
fn ss_levenshtein_distance() {
    let mut rng = ChaCha12Rng::seed_from_u64(3);

    let fe = SsAes::with_description(CircuitDescription::Levenshtein {
        input_len: 4,
        circuit_len: 4,
        alphabet_bits: 1,
    });
    let (msk, mpk) = fe.setup(&mut rng, 16).unwrap();

    let circuit = CircuitInstance::Levenshtein {
        symbols: vec![0, 0, 1, 1],
        alphabet_bits: 1,
    };
    let sk = fe.keygen(&mut rng, &msk, &circuit).unwrap();
    let ct = fe.encrypt(&mut rng, &mpk, &[1, 1, 1, 1]).unwrap();

    assert_eq!(fe.decrypt(&sk, &ct).unwrap(), vec![2]);
}

#[test]
fn ss_levenshtein_distance_asymmetric() {
    let mut rng = ChaCha12Rng::seed_from_u64(4);

    let fe = SsAes::with_description(CircuitDescription::Levenshtein {
        input_len: 4,
        circuit_len: 2,
        alphabet_bits: 1,
    });
    let (msk, mpk) = fe.setup(&mut rng, 16).unwrap();

    let circuit = CircuitInstance::Levenshtein {
        symbols: vec![0, 1],
        alphabet_bits: 1,
    };
    let sk = fe.keygen(&mut rng, &msk, &circuit).unwrap();
    let ct = fe.encrypt(&mut rng, &mpk, &[1, 0, 1, 1]).unwrap();

    assert_eq!(fe.decrypt(&sk, &ct).unwrap(), vec![2]);
}

// with use_delta the per-key masks must cancel on interpolation
#[rstest::rstest]
#[case(false)]
#[case(true)]
fn gvw_inner_product(#[case] use_delta: bool) {
    let mut rng = ChaCha12Rng::seed_from_u64(5 + use_delta as u64);

    let fe = GvwSsAes::new(2, 2, 1, 101, use_delta, ip_description()).unwrap();
    let (msk, mpk) = fe.setup(&mut rng, 16).unwrap();
    let sk = fe.keygen(&mut rng, &msk, &ip_circuit()).unwrap();
    let ct = fe.encrypt(&mut rng, &mpk, &IP_MESSAGE).unwrap();

    assert_eq!(fe.decrypt(&sk, &ct).unwrap(), vec![IP_EXPECTED]);
}

#[test]
fn gvw_issues_independent_keys() {
    let mut rng = ChaCha12Rng::seed_from_u64(7);

    let fe = GvwSsAes::new(2, 2, 1, 101, true, ip_description()).unwrap();
    let (msk, mpk) = fe.setup(&mut rng, 16).unwrap();

    let other_circuit = CircuitInstance::InnerProductModP {
        modulus: 101,
        coefficients: vec![1, 0, 0, 100],
    };
    // (1*100 + 100*17) mod 101 = 1800 mod 101 = 83
    let expected_other = (IP_MESSAGE[0] + 100 * IP_MESSAGE[3]) % 101;

    let sk1 = fe.keygen(&mut rng, &msk, &ip_circuit()).unwrap();
    let sk2 = fe.keygen(&mut rng, &msk, &other_circuit).unwrap();

    let ct = fe.encrypt(&mut rng, &mpk, &IP_MESSAGE).unwrap();

    assert_eq!(fe.decrypt(&sk1, &ct).unwrap(), vec![IP_EXPECTED]);
    assert_eq!(fe.decrypt(&sk2, &ct).unwrap(), vec![expected_other]);
}

#[test]
fn gvw_rejects_too_small_modulus() {
    // q = 2, D = 2, kappa = 1 gives T = 64 > 59
    assert!(matches!(
        GvwSsAes::new(2, 2, 1, 59, false, ip_description()),
        Err(FeError::ModulusTooSmall { .. })
    ));
}

#[test]
fn stateful_keys_decrypt_independent_ciphertexts() {
    let mut rng = ChaCha12Rng::seed_from_u64(8);

    let limit = 3;
    let mut fe = StatefulSsAes::new(limit, ip_description());
    let (msk, mpk) = fe.setup(&mut rng, 16).unwrap();

    let sks: Vec<_> = (0..limit)
        .map(|_| fe.keygen(&mut rng, &msk, &ip_circuit()).unwrap())
        .collect();

    for sk in &sks {
        let ct = fe.encrypt(&mut rng, &mpk, &IP_MESSAGE).unwrap();
        assert_eq!(fe.decrypt(sk, &ct).unwrap(), vec![IP_EXPECTED]);
    }

    assert!(matches!(
        fe.keygen(&mut rng, &msk, &ip_circuit()),
        Err(FeError::KeyLimitExceeded(3))
    ));
}

#[test]
fn stateful_parity() {
    let mut rng = ChaCha12Rng::seed_from_u64(9);

    let mut fe = Stateful::<SsAes>::new(2, CircuitDescription::Parity { size: 4 });
    let (msk, mpk) = fe.setup(&mut rng, 16).unwrap();

    let circuit = CircuitInstance::Parity {
        bits: vec![1, 1, 0, 1],
    };
    let sk = fe.keygen(&mut rng, &msk, &circuit).unwrap();

    let ct = fe.encrypt(&mut rng, &mpk, &[1, 0, 1, 1]).unwrap();
    // 1*1 + 1*0 + 0*1 + 1*1 = 0 mod 2
    assert_eq!(fe.decrypt(&sk, &ct).unwrap(), vec![0]);
}

#[test]
fn gvw_with_explicit_parameters() {
    let mut rng = ChaCha12Rng::seed_from_u64(10);

    // hand-picked counts: S = 2, T = 11, one key share set of size 5
    let fe = Gvw::<SsAes>::with_params(1, 2, 2, 11, 1, 2, 101, false, ip_description()).unwrap();
    assert_eq!(fe.total_shares(), 11);

    let (msk, mpk) = fe.setup(&mut rng, 16).unwrap();
    let sk = fe.keygen(&mut rng, &msk, &ip_circuit()).unwrap();
    let ct = fe.encrypt(&mut rng, &mpk, &IP_MESSAGE).unwrap();

    assert_eq!(fe.decrypt(&sk, &ct).unwrap(), vec![IP_EXPECTED]);
}
