use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // QR builder
    #[error("Empty data")]
    EmptyData,
    #[error("Data too long")]
    DataTooLong,
    #[error("Invalid version")]
    InvalidVersion,
    #[error("Invalid error correction level")]
    InvalidECLevel,
    #[error("Invalid character")]
    InvalidChar,
    #[error("Invalid module size")]
    InvalidScale,

    // QR reader
    #[error("Symbol not found")]
    SymbolNotFound,
    #[error("Too many errors to correct successfully")]
    TooManyError,
    #[error("Invalid format info detected")]
    InvalidFormatInfo,
    #[error("Invalid info")]
    InvalidInfo,

    // Colors
    #[error("Invalid color")]
    InvalidColor,
}

impl From<qrcode::types::QrError> for QRError {
    fn from(e: qrcode::types::QrError) -> Self {
        use qrcode::types::QrError;

        match e {
            QrError::DataTooLong => Self::DataTooLong,
            QrError::InvalidVersion => Self::InvalidVersion,
            _ => Self::InvalidChar,
        }
    }
}

impl From<rqrr::DeQRError> for QRError {
    fn from(e: rqrr::DeQRError) -> Self {
        use rqrr::DeQRError;

        match e {
            DeQRError::FormatEcc => Self::InvalidFormatInfo,
            DeQRError::DataEcc => Self::TooManyError,
            DeQRError::InvalidVersion => Self::InvalidVersion,
            _ => Self::InvalidInfo,
        }
    }
}

pub type QRResult<T> = Result<T, QRError>;
