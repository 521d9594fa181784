pub use errors::{RecordError, ServiceResult, SyncError};

pub mod errors;
pub mod sync;
