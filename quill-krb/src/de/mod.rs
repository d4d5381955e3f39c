//! Streaming decoders: one state enum and one shared grammar singleton per
//! message type. The singletons are built lazily on first use and never
//! mutated afterwards, so every connection can decode concurrently against
//! the same tables.

mod etype_info2;
mod kdc_req;
mod kdc_req_body;
mod pa_data;
mod principal_name;

pub use etype_info2::EtypeInfo2State;
pub use kdc_req::{AsReqState, KdcReqState};
pub use kdc_req_body::KdcReqBodyState;
pub use pa_data::PaDataState;
pub use principal_name::PrincipalNameState;
