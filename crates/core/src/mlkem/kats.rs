//! Known-answer tests for ML-KEM-512
//!
//! The vector below is the first entry of the published ML-KEM test
//! vector set (deterministic seeds d, z, message m, and the expected
//! ek, dk, shared secret and ciphertext). Byte strings are loaded
//! verbatim; any mismatch in matrix index order, PRF counter schedule,
//! compression rounding or key layout shows up here.

use super::ind_cca::{encaps_derand, keygen_derand};
use super::params::{MlKem768Params, MlKemParams};
use crate::mlkem::{MlKem512, SecurityLevel};
use mlkem_api::{Error as ApiError, Kem};
use mlkem_algorithms::xof::{ExtendableOutputFunction, Shake256Xof};

const KAT512_D: &str = "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26";

const KAT512_Z: &str = "3cb1eea988004b93103cfb0aeefd2a686e01fa4a58e8a3639ca8a1e3f9ae57e2";

const KAT512_M: &str = "35b8cc873c23dc62b8d260169afa2f75ab916a58d974918835d25e6a435085b2";

const KAT512_K: &str = "221d7d86011659313c83ce3fd0ab26797ef217e11d1f0bc76e7952fbe52a0a58";

const KAT512_EK: &str = "c29ac66c84bee3f129508c2b8c790c99a5ca41e5707e9b8c75c04d7ea8a48198\
     0a358b066a4a7e28d15d10374f75c33da6029cd490746fb55f5feab2ce823dec\
     1830c0c18ef89ba3cc3bce4d252a07a40d401a4c8d273618b595db21ca4a959e\
     b4d133556801b2b78254b2b5955c0400962dbb5a487aaa24a430b614e2af9338\
     afd4b0339bd830a9cb761db1a83220352dd523b8a583022ca13e246506548c57\
     ba3850ac5c50d864e2d48b89694277cc7a8174ad7b1ba2ee621d57d29b23c22d\
     f831872051145d2535dbb025e29c6da38cb475958e2a8808a431bed5b486821a\
     1513a729cd979b6c8b382503cf53337616e1059ddc59977219d2f17b32acabbe\
     86c468c1267b2b862ac565a7e232266c83fc700cda19b616377389428e62614c\
     d6ac9f08fb12d21827feb324b14bc16cc0c20904b3973b9dfe60af577776449a\
     c34eb00989e5a876143bc9b930a3c2a5bb861208f225dd97625bb36b2d8810d0\
     452e458968b90c6a6d97c2dfca7341d53c741a60e2b91385c86bb3b1be5f1070\
     8c546ae6318209ba268dd2b4e3e4722761491ae215600248e7541e6080b865f4\
     4a169c02a5b374f1fa5502333753979c9da75452c4814a8b8fd682b8e0370699\
     296bc2f42d38e5a2de92c5f5f61f24b65e1b9b75249b8759708706640000b490\
     937683e1ccbbf39a0baecb1edd62826721524bcc4d3bf06f8e5ab368aa426eb4\
     2c701839e8bbcc69dbccd2757f84c60a409b6629d98dc92947367c52f0698c3c\
     41c01110bafbeb0621cc175170375f8250c0f62406e32e10725b47e3c165845a\
     7ada8fb2c55555f5cc8602246fe06f875a6eb5c9459dd19292428492a76738b8\
     057e84c8e11436c4eb788e494e3952657ed331a2e4a47d75492365c473f48420\
     0502868c733bb9b2b3e44af2c98adfb91a4e1a144eec5a32d24f13c78775f206\
     d7a94dee12007f778e484a1430666bfeda6dbb31b757d72b5c79a469522fe659\
     9abb45b52cc6403c4970f65684bb770ca78893ba439057013655309cd84c524c\
     9ca558e3612041b7b2026e2187598afb46f1d4ca85096dbc9bcc1c25779dfb60\
     7052e11649bb7f5f7268f979c4d8140afe6ce53830f38602290d751427f07b27";

const KAT512_DK: &str = "7cf108c75a4d3592053d0ca79ce527ec1734f7023656e26253e2bfc68960dea7\
     3d28d7a9821597b48b4504837e27132c8ebc48505303aeb568f9d1928f7244cf\
     98b4a88843c5db69845abfc4e40683dca3bde694445c63cc512bd2e4608e91a5\
     697738bbca3b09a98da49757ad65c085125d11d01178d15acb251f417cbeff2a\
     2ac1b05dc70839ffb297be205152e98371745de76243d3a302dfda7f16f5a8f0\
     d2b73021a7f5c0490ff6b5a4125843889364288bede430835cce5bf8b8637713\
     2aea3ced911311a43b87e10ae471b49f1a31b636ce5d7c415d7c17539575724c\
     3166ab23ca183f9962a0b17190f3dc204dc2551eec234b7c4e298a4e60f15d4e\
     40bcaf1ba0eaa806e214bda0a0b0e0f51b34745e148290e222a4496c94676602\
     9cd82964429fd85a30ee3c0c6dea4e6bc840237c38d8e9b6a893702444bfeef7\
     83a104a8b46b8309a914cbaaa8cec9c08bb54a3cfc1a22c5a9d1b87685a30417\
     d846d5e22242e8c0c8316cb7f15832b70b4bbc453bb67485e34c87d9a2d4b294\
     d257a98d864afab445aea6bf4830404d170ca7484cc799b73ae3ce375c3a13d1\
     318bd29158620328c8bc22d812d269c8ec133ce4f977bd95300054b5ef246bb0\
     86a6d3340575464183e10db1a126f81a43d2f800e962568de3411515b90dc125\
     6446cf8fc33149e66a8657c221335eb57a8ca6262b06981a032823222c9da228\
     35271033212b4e9d516132a428709b5882ab8764771832968dc73c4cd241adb1\
     45b5e654b38bab03e3524f113525dd0a63e8f195fceb26b8b03063c4863459cc\
     10c5884cac016eebb7afa2519b27293b845e7e893e70bb21d0e004f1d05015dc\
     71fcf6b150c750aa98c96f89c8da199eefc1712c409bc833a84d404ad72c873b\
     f910c9190645b94dd2a31347596029d22abd071f5387588a9917fee4b33d1bbc\
     fa1858390662b656c09ff824ed177abf44a118b7c78bba96b9f9b5a3a54e5978\
     29be686868e5463f99be58da0be7886501730e01e26aad0535896616d98125c3\
     8b3eb778114176b1bd498ebd92b5bd0a98a0a39f77b599c3e63e66fb62167b06\
     c29ac66c84bee3f129508c2b8c790c99a5ca41e5707e9b8c75c04d7ea8a48198\
     0a358b066a4a7e28d15d10374f75c33da6029cd490746fb55f5feab2ce823dec\
     1830c0c18ef89ba3cc3bce4d252a07a40d401a4c8d273618b595db21ca4a959e\
     b4d133556801b2b78254b2b5955c0400962dbb5a487aaa24a430b614e2af9338\
     afd4b0339bd830a9cb761db1a83220352dd523b8a583022ca13e246506548c57\
     ba3850ac5c50d864e2d48b89694277cc7a8174ad7b1ba2ee621d57d29b23c22d\
     f831872051145d2535dbb025e29c6da38cb475958e2a8808a431bed5b486821a\
     1513a729cd979b6c8b382503cf53337616e1059ddc59977219d2f17b32acabbe\
     86c468c1267b2b862ac565a7e232266c83fc700cda19b616377389428e62614c\
     d6ac9f08fb12d21827feb324b14bc16cc0c20904b3973b9dfe60af577776449a\
     c34eb00989e5a876143bc9b930a3c2a5bb861208f225dd97625bb36b2d8810d0\
     452e458968b90c6a6d97c2dfca7341d53c741a60e2b91385c86bb3b1be5f1070\
     8c546ae6318209ba268dd2b4e3e4722761491ae215600248e7541e6080b865f4\
     4a169c02a5b374f1fa5502333753979c9da75452c4814a8b8fd682b8e0370699\
     296bc2f42d38e5a2de92c5f5f61f24b65e1b9b75249b8759708706640000b490\
     937683e1ccbbf39a0baecb1edd62826721524bcc4d3bf06f8e5ab368aa426eb4\
     2c701839e8bbcc69dbccd2757f84c60a409b6629d98dc92947367c52f0698c3c\
     41c01110bafbeb0621cc175170375f8250c0f62406e32e10725b47e3c165845a\
     7ada8fb2c55555f5cc8602246fe06f875a6eb5c9459dd19292428492a76738b8\
     057e84c8e11436c4eb788e494e3952657ed331a2e4a47d75492365c473f48420\
     0502868c733bb9b2b3e44af2c98adfb91a4e1a144eec5a32d24f13c78775f206\
     d7a94dee12007f778e484a1430666bfeda6dbb31b757d72b5c79a469522fe659\
     9abb45b52cc6403c4970f65684bb770ca78893ba439057013655309cd84c524c\
     9ca558e3612041b7b2026e2187598afb46f1d4ca85096dbc9bcc1c25779dfb60\
     7052e11649bb7f5f7268f979c4d8140afe6ce53830f38602290d751427f07b27\
     cda93dec4c4dc4d8484457fd882399c4b918c49fa8389a1dfa8c9f92f39b00cf\
     3cb1eea988004b93103cfb0aeefd2a686e01fa4a58e8a3639ca8a1e3f9ae57e2";

const KAT512_CT: &str = "5a645120b878936d202efc4851f38e6bb6573c3b14b0b9bb44bf372d8b1aa803\
     4a9f1a1584076f0a38e89a9d49a50b792ace7584981be8e239272deef914418f\
     efe2dad97dc0ec20cfe8a9599b9bbe3ecce91f97e10cd9ef2c4950e3ea3c46fe\
     481eb0d24878c4624ad344f0dc9863e7d170937a8cecc6f7d00f9565529d5729\
     59cc49d0f7042ff43b7d1d71efd22f2654e14e78c31f34a26ae53b067ae0380a\
     65a732459503da5e9406d50a70e3d5ebdbf3c9c01cad1cc001ebe69e6cff20e6\
     4ce5c802b691587e404cf6efa2799a2ffd353492a75f0e2ea52a974e0545a086\
     a3bd14b69045238140a7200b10c3276cc6b2a67c173f7c1ad64545adb8ebdf78\
     35e9aa1f54f6891369988f3625c45f2fec8d9a07b911d32ba69d9ff5d74f10a6\
     808b25a3c81709945bf213c3450d74481f065042186b0d36fb55271162dfaf41\
     e516a408f83ccabe8a0ba7effa16f88f6d7dbdb64e608c8f18d686c7e5d548d7\
     37116fa562dc76e7994a86374a9c85b8b17c4f025fa23a4de1a997a87e5a65f5\
     c5386772491fd8d10731f5f5aa60366ffe3fd209cb7b7a8615320ad0728f41e8\
     12bd88d2d6104753917e89e1ca0f10177cf5dab040e466908b27446215709b09\
     12972c428c4d9aad9432d9a159069c96154001cb0be4de597e9871b04bddaa45\
     39f838bc12ab0a3ea7e8c8481bcdfcc1834369fcf061f7c599efdc4f6c434102\
     991446aea12881e163fd4ee6c458b82e42759f8b11b0612c12d5a777acf4c7cd\
     d26fb7da0b9098dc4af94704daa529945ab169cdb22d3966fcd26950e2418cac\
     9bc7dc32c4a604f368f0f8a9c7ddce8b5e476b26b33116d607df1b49c205ada0\
     d2ea5a5a64eecb22549ddf18a0daed2e5d44cb6174b9781236eee11f95ab0c45\
     836bcafc73af3bec11440bc1c605669eb019cfac0097943cf29bbffce0f82329\
     3da623e5fa6d2a7ee0c7b4507596a62ef46bbe4e1b63cc96ba9878a7b39f84b5\
     9dd336f1659a24cbb33015d515e9e80e3e7902b1d583f8ee97153cd8ba1fadeb\
     9ee7e2f2c23dfee85a50d5c3554b79922a4537d6dc4f09418dfdd744596cbf68";

fn seed32(hex_str: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hex::decode(hex_str).unwrap());
    out
}

#[test]
fn kat_keygen_512() {
    let (ek, dk) = keygen_derand::<super::params::MlKem512Params>(
        &seed32(KAT512_D),
        &seed32(KAT512_Z),
    )
    .unwrap();

    assert_eq!(hex::encode(&ek), KAT512_EK);
    assert_eq!(hex::encode(&dk), KAT512_DK);
}

#[test]
fn kat_encaps_512() {
    let ek = hex::decode(KAT512_EK).unwrap();
    let (ct, key) =
        encaps_derand::<super::params::MlKem512Params>(&ek, &seed32(KAT512_M)).unwrap();

    assert_eq!(hex::encode(&ct), KAT512_CT);
    assert_eq!(hex::encode(key.as_ref()), KAT512_K);
}

#[test]
fn kat_decaps_512() {
    let dk = hex::decode(KAT512_DK).unwrap();
    let ct = hex::decode(KAT512_CT).unwrap();

    let dk = super::kem::MlKemSecretKey::new(dk);
    let ct = super::kem::MlKemCiphertext::new(ct);
    let key = MlKem512::decapsulate(&dk, &ct).unwrap();

    assert_eq!(hex::encode(key.as_bytes()), KAT512_K);
}

#[test]
fn kat_decaps_512_rejects_flipped_bit_implicitly() {
    let dk = hex::decode(KAT512_DK).unwrap();
    let mut ct = hex::decode(KAT512_CT).unwrap();
    let last = ct.len() - 1;
    ct[last] ^= 0x01;

    let dk_typed = super::kem::MlKemSecretKey::new(dk.clone());
    let key = MlKem512::decapsulate(&dk_typed, &super::kem::MlKemCiphertext::new(ct.clone()))
        .unwrap();

    // Not the honest secret...
    assert_ne!(hex::encode(key.as_bytes()), KAT512_K);

    // ...but exactly J(z ‖ c′), the deterministic rejection key.
    let z = &dk[dk.len() - 32..];
    let mut xof = Shake256Xof::new();
    xof.update(z).unwrap();
    xof.update(&ct).unwrap();
    let mut expected = [0u8; 32];
    xof.squeeze(&mut expected).unwrap();

    assert_eq!(key.as_bytes(), &expected);
}

#[test]
fn cross_level_inputs_fail_the_length_check() {
    // A level-768 decapsulation key against a level-512 ciphertext must
    // be rejected on size alone.
    let dk_768 = vec![0u8; MlKem768Params::SECRET_KEY_BYTES];
    let ct_512 = hex::decode(KAT512_CT).unwrap();

    let kem = crate::mlkem::MlKem::new(768).unwrap();
    assert_eq!(kem.level(), SecurityLevel::MlKem768);
    let err = kem.decaps(&dk_768, &ct_512).unwrap_err();
    assert!(matches!(
        err,
        ApiError::InvalidLength {
            context: "ciphertext",
            ..
        }
    ));
}
