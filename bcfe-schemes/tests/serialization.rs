//! Write-then-read equivalence for keys, functional keys and ciphertexts.

use bcfe_circuits::{CircuitDescription, CircuitInstance};
use bcfe_schemes::{
    ss::{SsCipherText, SsMasterPublicKey, SsMasterSecretKey, SsSecretKey},
    EncryptionScheme, GvwSsAes, OneQueryFe, PkeAdapter, SsAes, SsSingletonAes,
};
use bcfe_schemes::{gvw::GvwSecretKey, Aes128Cfb};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

type AesEs = PkeAdapter<Aes128Cfb>;

fn round_trip<T: serde::Serialize + serde::de::DeserializeOwned>(value: &T) -> T {
    bincode::deserialize(&bincode::serialize(value).unwrap()).unwrap()
}

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

#[test]
fn ss_artifacts_survive_round_trip() {
    let mut rng = ChaCha12Rng::seed_from_u64(0);

    let fe = SsAes::with_description(ip_description());
    let (msk, mpk) = fe.setup(&mut rng, 16).unwrap();
    let sk = fe.keygen(&mut rng, &msk, &ip_circuit()).unwrap();
    let ct = fe.encrypt(&mut rng, &mpk, &[100, 97, 3, 17]).unwrap();

    let msk_read: SsMasterSecretKey<AesEs> = round_trip(&msk);
    let mpk_read: SsMasterPublicKey<AesEs> = round_trip(&mpk);
    let sk_read: SsSecretKey<AesEs> = round_trip(&sk);
    let ct_read: SsCipherText<AesEs> = round_trip(&ct);

    // read-back artifacts are functionally equivalent to the originals
    assert_eq!(fe.decrypt(&sk_read, &ct_read).unwrap(), vec![34]);

    let sk2 = fe.keygen(&mut rng, &msk_read, &ip_circuit()).unwrap();
    let ct2 = fe.encrypt(&mut rng, &mpk_read, &[100, 97, 3, 17]).unwrap();
    assert_eq!(fe.decrypt(&sk2, &ct2).unwrap(), vec![34]);
}

#[test]
fn ss_singleton_artifacts_survive_round_trip() {
    let mut rng = ChaCha12Rng::seed_from_u64(1);

    let fe = SsSingletonAes::with_description(CircuitDescription::Parity { size: 4 });
    let (msk, mpk) = fe.setup(&mut rng, 16).unwrap();

    let circuit = CircuitInstance::Parity {
        bits: vec![1, 0, 0, 1],
    };
    let sk = fe.keygen(&mut rng, &msk, &circuit).unwrap();
    let ct = fe.encrypt(&mut rng, &mpk, &[1, 1, 0, 1]).unwrap();
    let expected = fe.decrypt(&sk, &ct).unwrap();

    let sk_read = round_trip(&sk);
    let ct_read = round_trip(&ct);

    assert_eq!(fe.decrypt(&sk_read, &ct_read).unwrap(), expected);
}

#[test]
fn gvw_artifacts_survive_round_trip() {
    let mut rng = ChaCha12Rng::seed_from_u64(2);

    let fe = GvwSsAes::new(2, 2, 1, 101, true, ip_description()).unwrap();
    let (msk, mpk) = fe.setup(&mut rng, 16).unwrap();
    let sk = fe.keygen(&mut rng, &msk, &ip_circuit()).unwrap();
    let ct = fe.encrypt(&mut rng, &mpk, &[100, 97, 3, 17]).unwrap();

    let sk_read: GvwSecretKey<SsAes> = round_trip(&sk);
    let ct_read = round_trip(&ct);

    assert_eq!(fe.decrypt(&sk_read, &ct_read).unwrap(), vec![34]);

    let _ = round_trip(&msk);
    let _ = round_trip(&mpk);
}

#[test]
fn es_keys_survive_round_trip() {
    let mut rng = ChaCha12Rng::seed_from_u64(3);

    let (msk, mpk) = AesEs::setup(&mut rng, 16).unwrap();
    let msk_read = round_trip(&msk);
    let mpk_read = round_trip(&mpk);

    let msg = b"test message";
    let ct = AesEs::encrypt(&mut rng, &mpk_read, msg).unwrap();
    assert_eq!(AesEs::decrypt(&msk_read, &ct).unwrap(), msg);
    assert_eq!(AesEs::decrypt(&msk, &round_trip(&ct)).unwrap(), msg);
}
