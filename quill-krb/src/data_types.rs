//! Kerberos data types shared by several KDC exchange messages.

/// [5.2.2 PrincipalName](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.2)
///
/// ```not_rust
/// PrincipalName   ::= SEQUENCE {
///         name-type       [0] Int32,
///         name-string     [1] SEQUENCE OF KerberosString
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrincipalName {
    pub name_type: i32,
    pub name_string: Vec<String>,
}

/// [5.2.7 PA-DATA](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.7)
///
/// ```not_rust
/// PA-DATA         ::= SEQUENCE {
///         -- NOTE: first tag is [1], not [0]
///         padata-type     [1] Int32,
///         padata-value    [2] OCTET STRING -- might be encoded AP-REQ
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaData {
    pub padata_type: i32,
    pub padata_value: Vec<u8>,
}

/// [7.5.2 PreAuthentication Data Types](https://datatracker.ietf.org/doc/html/rfc4120#section-7.5.2)
/// and [RFC 4556 §3.1.1](https://www.rfc-editor.org/rfc/rfc4556.html#section-3.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaDataType {
    PaTgsReq,
    PaEncTimestamp,
    PaPwSalt,
    PaEtypeInfo,
    PaSamChallenge,
    PaSamResponse,
    PaPkAsReqOld,
    PaPkAsRepOld,
    PaPkAsReq,
    PaPkAsRep,
    PaEtypeInfo2,
    PaPacRequest,
    Unknown(i32),
}

impl PaDataType {
    pub fn from_value(value: i32) -> Self {
        match value {
            1 => PaDataType::PaTgsReq,
            2 => PaDataType::PaEncTimestamp,
            3 => PaDataType::PaPwSalt,
            11 => PaDataType::PaEtypeInfo,
            12 => PaDataType::PaSamChallenge,
            13 => PaDataType::PaSamResponse,
            14 => PaDataType::PaPkAsReqOld,
            // RFC 4556: 15 is PA-PK-AS-REP-OLD, distinct from 14
            15 => PaDataType::PaPkAsRepOld,
            16 => PaDataType::PaPkAsReq,
            17 => PaDataType::PaPkAsRep,
            19 => PaDataType::PaEtypeInfo2,
            128 => PaDataType::PaPacRequest,
            other => PaDataType::Unknown(other),
        }
    }

    pub fn value(self) -> i32 {
        match self {
            PaDataType::PaTgsReq => 1,
            PaDataType::PaEncTimestamp => 2,
            PaDataType::PaPwSalt => 3,
            PaDataType::PaEtypeInfo => 11,
            PaDataType::PaSamChallenge => 12,
            PaDataType::PaSamResponse => 13,
            PaDataType::PaPkAsReqOld => 14,
            PaDataType::PaPkAsRepOld => 15,
            PaDataType::PaPkAsReq => 16,
            PaDataType::PaPkAsRep => 17,
            PaDataType::PaEtypeInfo2 => 19,
            PaDataType::PaPacRequest => 128,
            PaDataType::Unknown(value) => value,
        }
    }
}

/// [5.2.7.5 ETYPE-INFO2-ENTRY](https://datatracker.ietf.org/doc/html/rfc4120#section-5.2.7.5)
///
/// ```not_rust
/// ETYPE-INFO2-ENTRY       ::= SEQUENCE {
///         etype           [0] Int32,
///         salt            [1] KerberosString OPTIONAL,
///         s2kparams       [2] OCTET STRING OPTIONAL
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EtypeInfo2Entry {
    pub etype: i32,
    pub salt: Option<String>,
    pub s2kparams: Option<Vec<u8>>,
}

/// ```not_rust
/// ETYPE-INFO2             ::= SEQUENCE SIZE (1..MAX) OF ETYPE-INFO2-ENTRY
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EtypeInfo2(pub Vec<EtypeInfo2Entry>);

/// [5.4.1 KDC-REQ-BODY](https://datatracker.ietf.org/doc/html/rfc4120#section-5.4.1)
///
/// ```not_rust
/// KDC-REQ-BODY    ::= SEQUENCE {
///         cname           [1] PrincipalName OPTIONAL,
///         realm           [2] Realm,
///         sname           [3] PrincipalName OPTIONAL,
///         nonce           [7] UInt32,
///         etype           [8] SEQUENCE OF Int32 -- in preference order
/// }
/// ```
///
/// Fields of the full RFC body whose universal types sit outside this
/// codec's tag repertoire (kdc-options BIT STRING, the KerberosTime
/// fields, addresses, enc-authorization-data, additional-tickets) are not
/// carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KdcReqBody {
    pub cname: Option<PrincipalName>,
    pub realm: String,
    pub sname: Option<PrincipalName>,
    pub nonce: u32,
    pub etype: Vec<i32>,
}
