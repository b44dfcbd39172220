mod qr;
mod render;

pub use qr::QR;
pub use render::overlay_logo;

use std::{fmt::Display, str::FromStr};

use qrcode::QrCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    common::error::{QRError, QRResult},
    palette::PaletteResult,
};

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ECLevel {
    L = 0,
    #[default]
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    /// Maps the 2-bit level field of a symbol's format info.
    pub fn from_format_bits(bits: u16) -> Option<Self> {
        match bits {
            0b01 => Some(Self::L),
            0b00 => Some(Self::M),
            0b11 => Some(Self::Q),
            0b10 => Some(Self::H),
            _ => None,
        }
    }
}

impl From<ECLevel> for qrcode::EcLevel {
    fn from(ecl: ECLevel) -> Self {
        match ecl {
            ECLevel::L => qrcode::EcLevel::L,
            ECLevel::M => qrcode::EcLevel::M,
            ECLevel::Q => qrcode::EcLevel::Q,
            ECLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl From<qrcode::EcLevel> for ECLevel {
    fn from(ecl: qrcode::EcLevel) -> Self {
        match ecl {
            qrcode::EcLevel::L => ECLevel::L,
            qrcode::EcLevel::M => ECLevel::M,
            qrcode::EcLevel::Q => ECLevel::Q,
            qrcode::EcLevel::H => ECLevel::H,
        }
    }
}

impl FromStr for ECLevel {
    type Err = QRError;

    fn from_str(s: &str) -> QRResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel),
        }
    }
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

// Builder
//------------------------------------------------------------------------------

pub struct QRBuilder<'a> {
    data: &'a [u8],
    ec_level: ECLevel,
    quiet_zone: u32,
    border: u32,
    palette: Option<PaletteResult>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, ec_level: ECLevel::M, quiet_zone: 4, border: 1, palette: None }
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    /// Light margin around the symbol, in modules.
    pub fn quiet_zone(&mut self, modules: u32) -> &mut Self {
        self.quiet_zone = modules;
        self
    }

    /// Thickness of the themed frame, in modules. 0 draws no frame.
    pub fn border(&mut self, modules: u32) -> &mut Self {
        self.border = modules;
        self
    }

    pub fn palette(&mut self, palette: PaletteResult) -> &mut Self {
        self.palette = Some(palette);
        self
    }

    pub fn unset_palette(&mut self) -> &mut Self {
        self.palette = None;
        self
    }

    pub fn metadata(&self) -> String {
        match self.palette {
            Some(p) => format!("{{ Ec level: {:?}, Palette: {} }}", self.ec_level, p.primary),
            None => format!("{{ Ec level: {:?}, Palette: None }}", self.ec_level),
        }
    }

    pub fn build(&self) -> QRResult<QR> {
        debug!("Generating QR {}...", self.metadata());
        if self.data.is_empty() {
            return Err(QRError::EmptyData);
        }

        let code = QrCode::with_error_correction_level(self.data, self.ec_level.into())?;
        let ver = match code.version() {
            qrcode::Version::Normal(v) | qrcode::Version::Micro(v) => v,
        };

        let qr = QR::new(
            ver,
            self.ec_level,
            code.width(),
            code.to_colors().into_iter().map(|c| c == qrcode::Color::Dark).collect(),
            self.quiet_zone,
            self.border,
            self.palette,
        );

        debug!(
            version = ver,
            width = qr.width(),
            dark_modules = qr.count_dark_modules(),
            "QR generated"
        );
        Ok(qr)
    }
}
