//! Encoders: each message type builds its value tree in grammar field order
//! and hands it to the engine's two-pass writer.

mod etype_info2;
mod kdc_req;
mod kdc_req_body;
mod pa_data;
mod principal_name;
