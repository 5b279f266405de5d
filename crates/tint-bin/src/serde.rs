use std::ffi::OsString;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tint_core::info::ImageInfo;

pub struct Metadata<'a> {
    file:     OsString,
    size:     u64,
    metadata: &'a ImageInfo
}

impl<'a> Metadata<'a> {
    pub fn new(file: OsString, size: u64, metadata: &'a ImageInfo) -> Metadata<'a> {
        Metadata {
            file,
            size,
            metadata
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageMetadata", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("metadata", &self.metadata)?;

        state.end()
    }
}
