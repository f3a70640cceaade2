//! Storage layer for tally-cli
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The ledger lives in a single file that is rewritten in full
//! after every mutation.

pub mod file_io;
pub mod ledger_file;

pub use file_io::write_json_atomic;
pub use ledger_file::JsonLedgerStore;
