use serde::Serialize;

use super::text::decode_text;
use crate::{builder::ECLevel, common::error::QRResult};

// Metadata
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize)]
pub struct Metadata {
    pub version: usize,
    pub ec_level: Option<ECLevel>,
    pub mask: u16,
}

impl From<&rqrr::MetaData> for Metadata {
    fn from(meta: &rqrr::MetaData) -> Self {
        Self {
            version: meta.version.0,
            ec_level: ECLevel::from_format_bits(meta.ecc_level),
            mask: meta.mask,
        }
    }
}

// Symbol
//------------------------------------------------------------------------------

/// A located symbol with the outcome of reading its data.
#[derive(Debug, Clone)]
pub struct Symbol {
    bounds: [(i32, i32); 4],
    read: QRResult<(Metadata, Vec<u8>)>,
}

impl Symbol {
    pub(super) fn new(bounds: [(i32, i32); 4], read: QRResult<(Metadata, Vec<u8>)>) -> Self {
        Self { bounds, read }
    }

    /// Corner points in image coordinates, clockwise from top-left.
    pub fn bounds(&self) -> [(i32, i32); 4] {
        self.bounds
    }

    pub fn raw_bytes(&self) -> Option<&[u8]> {
        self.read.as_ref().ok().map(|(_, b)| b.as_slice())
    }

    pub fn decode(&self) -> QRResult<(Metadata, String)> {
        let (meta, bytes) = self.read.as_ref().map_err(|e| *e)?;
        Ok((*meta, decode_text(bytes)))
    }
}
