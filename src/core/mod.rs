//! Core domain types: search parameters and upstream records.
//!
//! Everything here is transient. Parameters are decoded from tool
//! arguments, records from the upstream JSON body, and both are dropped
//! once the call is rendered.

pub mod params;
pub mod records;

pub use params::{NameOfHouse, RecordPacking, SearchParameters, SearchRange, SpeakerRole};
pub use records::{MeetingRecord, MeetingSpeech, SearchEnvelope, SpeechRecord};
