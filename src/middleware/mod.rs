pub mod request_id;

pub use request_id::{request_id_of, RequestId, RequestIdValue, REQUEST_ID_HEADER};
