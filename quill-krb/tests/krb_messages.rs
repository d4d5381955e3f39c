use pretty_assertions::assert_eq;
use quill_ber::{DecodeError, DecodeOutcome};
use quill_krb::constants::{etypes, types};
use quill_krb::{AsReq, EtypeInfo2, EtypeInfo2Entry, KdcReq, KdcReqBody, PaData, PrincipalName};

/// `krbtgt/EXAMPLE.COM` as an NT-SRV-INST-style principal, hand-encoded.
const KRBTGT_DER: &[u8] =
    b"\x30\x1E\xA0\x03\x02\x01\x01\xA1\x17\x30\x15\x1B\x06krbtgt\x1B\x0BEXAMPLE.COM";

fn krbtgt() -> PrincipalName {
    PrincipalName {
        name_type: types::NT_PRINCIPAL,
        name_string: vec!["krbtgt".to_string(), "EXAMPLE.COM".to_string()],
    }
}

#[test]
fn principal_name_encodes_canonically() {
    assert_eq!(krbtgt().to_der().unwrap(), KRBTGT_DER);
}

#[test]
fn principal_name_decodes_the_canonical_bytes() {
    assert_eq!(PrincipalName::from_der(KRBTGT_DER).unwrap(), krbtgt());
}

#[test]
fn principal_name_reencodes_byte_exact() {
    let decoded = PrincipalName::from_der(KRBTGT_DER).unwrap();
    assert_eq!(decoded.to_der().unwrap(), KRBTGT_DER);
}

#[test]
fn principal_name_survives_every_chunk_boundary() {
    for split in 0..=KRBTGT_DER.len() {
        let mut decoder = PrincipalName::decoder();
        let outcome = decoder.decode(&KRBTGT_DER[..split]).unwrap();
        let name = match outcome {
            DecodeOutcome::Complete(name) => name,
            DecodeOutcome::NeedMore => match decoder.decode(&KRBTGT_DER[split..]).unwrap() {
                DecodeOutcome::Complete(name) => name,
                DecodeOutcome::NeedMore => panic!("decode stalled at split {split}"),
            },
        };
        assert_eq!(name, krbtgt(), "split at {split}");
    }
}

#[test]
fn truncated_prefix_suspends_instead_of_failing() {
    let mut decoder = PrincipalName::decoder();
    assert_eq!(
        decoder.decode(&KRBTGT_DER[..3]).unwrap(),
        DecodeOutcome::NeedMore
    );
    match decoder.decode(&KRBTGT_DER[3..]).unwrap() {
        DecodeOutcome::Complete(name) => assert_eq!(name, krbtgt()),
        DecodeOutcome::NeedMore => panic!("decode stalled"),
    }
}

#[test]
fn undefined_context_tag_is_an_unexpected_tag() {
    let mut mutated = KRBTGT_DER.to_vec();
    assert_eq!(mutated[2], 0xA0);
    mutated[2] = 0xA5;
    match PrincipalName::from_der(&mutated) {
        Err(DecodeError::UnexpectedTag { grammar, .. }) => {
            assert_eq!(grammar, "PrincipalName");
        }
        other => panic!("expected UnexpectedTag, got {other:?}"),
    }
}

#[test]
fn zero_length_pvno_is_a_missing_mandatory_field() {
    // KDC-REQ whose pvno INTEGER TLV carries no value octets
    let bytes = b"\x30\x04\xA1\x02\x02\x00";
    assert_eq!(
        KdcReq::from_der(bytes),
        Err(DecodeError::MissingMandatoryField("pvno"))
    );
}

fn sample_req() -> KdcReq {
    KdcReq {
        pvno: types::KERBEROS_PVNO,
        msg_type: types::AS_REQ_MSG_TYPE,
        padata: vec![
            PaData {
                padata_type: 2,
                padata_value: vec![0xDE, 0xAD, 0xBE, 0xEF],
            },
            PaData {
                padata_type: 128,
                padata_value: vec![],
            },
        ],
        req_body: KdcReqBody {
            cname: Some(PrincipalName {
                name_type: types::NT_PRINCIPAL,
                name_string: vec!["alice".to_string()],
            }),
            realm: "EXAMPLE.COM".to_string(),
            sname: Some(krbtgt()),
            nonce: 0xCAFE_F00D,
            etype: vec![etypes::AES256_CTS_HMAC_SHA1_96, etypes::AES128_CTS_HMAC_SHA1_96],
        },
    }
}

#[test]
fn kdc_req_round_trips() {
    let req = sample_req();
    let bytes = req.to_der().unwrap();
    assert_eq!(KdcReq::from_der(&bytes).unwrap(), req);
}

#[test]
fn kdc_req_without_padata_round_trips() {
    let mut req = sample_req();
    req.padata.clear();
    req.req_body.cname = None;
    req.req_body.sname = None;
    let bytes = req.to_der().unwrap();
    assert_eq!(KdcReq::from_der(&bytes).unwrap(), req);
}

#[test]
fn kdc_req_reencodes_byte_exact() {
    let bytes = sample_req().to_der().unwrap();
    let decoded = KdcReq::from_der(&bytes).unwrap();
    assert_eq!(decoded.to_der().unwrap(), bytes);
}

#[test]
fn kdc_req_survives_every_chunk_boundary() {
    let req = sample_req();
    let bytes = req.to_der().unwrap();
    for split in 0..=bytes.len() {
        let mut decoder = KdcReq::decoder();
        let outcome = decoder.decode(&bytes[..split]).unwrap();
        let decoded = match outcome {
            DecodeOutcome::Complete(decoded) => decoded,
            DecodeOutcome::NeedMore => match decoder.decode(&bytes[split..]).unwrap() {
                DecodeOutcome::Complete(decoded) => decoded,
                DecodeOutcome::NeedMore => panic!("decode stalled at split {split}"),
            },
        };
        assert_eq!(decoded, req, "split at {split}");
    }
}

#[test]
fn as_req_wraps_the_kdc_req() {
    let as_req = AsReq(sample_req());
    let bytes = as_req.to_der().unwrap();
    assert_eq!(bytes[0], 0x6A);
    assert_eq!(AsReq::from_der(&bytes).unwrap(), as_req);

    let decoded = AsReq::from_der(&bytes).unwrap();
    assert_eq!(decoded.to_der().unwrap(), bytes);
}

#[test]
fn etype_info2_round_trips() {
    let info = EtypeInfo2(vec![
        EtypeInfo2Entry {
            etype: etypes::AES256_CTS_HMAC_SHA1_96,
            salt: Some("EXAMPLE.COMalice".to_string()),
            s2kparams: Some(vec![0x00, 0x00, 0x10, 0x00]),
        },
        EtypeInfo2Entry {
            etype: etypes::RC4_HMAC,
            salt: None,
            s2kparams: None,
        },
    ]);
    let bytes = info.to_der().unwrap();
    assert_eq!(EtypeInfo2::from_der(&bytes).unwrap(), info);
}

#[test]
fn empty_etype_info2_round_trips() {
    let info = EtypeInfo2(Vec::new());
    let bytes = info.to_der().unwrap();
    assert_eq!(bytes, b"\x30\x00");
    assert_eq!(EtypeInfo2::from_der(&bytes).unwrap(), info);
}

#[test]
fn pa_data_round_trips() {
    let padata = PaData {
        padata_type: 19,
        padata_value: b"opaque".to_vec(),
    };
    let bytes = padata.to_der().unwrap();
    assert_eq!(PaData::from_der(&bytes).unwrap(), padata);
}

#[test]
fn non_ascii_realm_is_an_encode_error() {
    let mut req = sample_req();
    req.req_body.realm = "EXÄMPLE.COM".to_string();
    assert!(req.to_der().is_err());
}
