pub mod mail;
pub mod observability;
pub mod scribe;
pub mod storage;
