//! Encode/decode Kerberos KDC exchange messages (RFC 4120) over the
//! [`quill_ber`] grammar engine.
//!
//! Each message type contributes a state enum, an immutable grammar table
//! shared by all connections, and a `Node` builder for the encode side. The
//! decode entry points come in two shapes: `from_der` for a complete framed
//! PDU, and `decoder()` for a streaming [`quill_ber::Container`] fed chunk
//! by chunk from a socket.

pub mod constants;
pub mod data_types;
pub mod de;
pub mod messages;
pub mod ser;

pub use data_types::{EtypeInfo2, EtypeInfo2Entry, KdcReqBody, PaData, PaDataType, PrincipalName};
pub use messages::{AsReq, KdcReq};
