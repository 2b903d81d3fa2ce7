//! File-based record storage
//!
//! Implements `RecordStore` using one JSON file per record.

mod store;

pub use store::JsonRecordStore;
