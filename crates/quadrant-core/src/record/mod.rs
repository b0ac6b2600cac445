//! Result records and the storage seams they pass through.

pub mod model;
pub mod repository;

pub use model::{DEFAULT_JITTER_SPREAD, NewResult, RecordId, ResultRecord, SloganStyle, SloganWeight};
pub use repository::{KeyValueStore, RemoteRecordStore, RemoteStore};
