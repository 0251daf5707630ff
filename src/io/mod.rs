//! Reading calculation documents and writing reports.

pub mod document;
pub mod output;

pub use document::{
    read_document, CharacteristicPointDocument, ForeshoreDocument, InputDocument,
    SegmentDocument,
};
pub use output::{write_report, JsonWriter, OutputWriter};
