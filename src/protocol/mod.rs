//! Protocol Module
//!
//! Defines the request/response mapping for remote catalog access.
//!
//! ## Protocol Format (V1 - HTTP GET)
//!
//! ### Requests
//! | Operation       | Path                      | 200 body             |
//! |-----------------|---------------------------|----------------------|
//! | List all        | `/v1/list`                | JSON array of Book   |
//! | Find by ID      | `/v1/find/{id}`           | JSON Book            |
//! | Get copies      | `/v1/getcopies/{id}`      | JSON integer         |
//! | Add copies      | `/v1/addcopies/{id}/{n}`  | JSON integer (total) |
//! | Subtract copies | `/v1/subcopies/{id}/{n}`  | JSON integer (total) |
//!
//! ### Status Codes
//! - 200: OK
//! - 400: malformed request path or invalid argument
//! - 404: NOT_FOUND (no body required)
//! - 409: not enough stock
//! - 500: ERROR

mod codec;
mod command;
mod response;

pub use codec::{decode_reply, decode_request, encode_request, request_url, API_VERSION};
pub use command::{Request, RequestType};
pub use response::{Response, Status};
