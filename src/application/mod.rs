// Application layer - the ledger's use cases and request routing.
// Transport concerns (status codes, payload parsing) stay in `http`.

pub mod dispatcher;
pub mod error;
pub mod service;

pub use dispatcher::*;
pub use error::*;
pub use service::*;
