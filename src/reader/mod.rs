mod symbol;
mod text;

pub use symbol::{Metadata, Symbol};
pub use text::decode_text;

use image::DynamicImage;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    classify::{Classification, DecodedPayload},
    common::error::{QRError, QRResult},
};

// Detection
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    symbols: Vec<Symbol>,
}

impl ScanResult {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Locates every QR symbol in `img` and reads its raw codewords.
pub fn detect_qr(img: &DynamicImage) -> ScanResult {
    let gray = img.to_luma8();
    let (w, h) = gray.dimensions();
    debug!(width = w, height = h, "Detecting QR symbols...");

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(w as usize, h as usize, |x, y| {
        gray.get_pixel(x as u32, y as u32)[0]
    });
    let grids = prepared.detect_grids();

    let symbols: Vec<Symbol> = grids
        .iter()
        .map(|g| {
            let mut bytes = Vec::new();
            let res = g.decode_to(&mut bytes).map(|meta| (Metadata::from(&meta), bytes)).map_err(QRError::from);
            let bounds = std::array::from_fn(|i| (g.bounds[i].x, g.bounds[i].y));
            Symbol::new(bounds, res)
        })
        .collect();

    debug!(symbols = symbols.len(), "Detection complete");
    ScanResult { symbols }
}

// Validation
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub metadata: Metadata,
    pub payload: DecodedPayload,
    pub classification: Classification,
}

/// Decodes the first readable symbol in `img` and classifies its content.
///
/// An image without any symbol is [`QRError::SymbolNotFound`]; a symbol that
/// holds unstructured text still validates, as plain text.
pub fn validate(img: &DynamicImage) -> QRResult<Validation> {
    let res = detect_qr(img);

    let mut last_err = QRError::SymbolNotFound;
    for sym in res.symbols() {
        match sym.decode() {
            Ok((metadata, text)) => {
                let payload = DecodedPayload::new(text);
                let classification = payload.classify();
                debug!(kind = %classification.kind, version = metadata.version, "Validated QR");
                return Ok(Validation { metadata, payload, classification });
            }
            Err(e) => {
                warn!(error = %e, "Skipping unreadable symbol");
                last_err = e;
            }
        }
    }
    Err(last_err)
}
