//! # qrlens
//!
//! A Rust library for understanding what a QR code says and for theming the
//! codes you generate.
//!
//! ## Features
//!
//! - **Payload Classification**: Recognises URLs, email, phone, SMS, WiFi credentials, vCards,
//!   calendar events and geo coordinates, and extracts their fields for display
//! - **Palette Extraction**: Picks visually distinct dominant colors from a logo or photo and
//!   derives light/dark variants for theming
//! - **QR Code Generation**: Thin wrapper over the `qrcode` crate with themed rendering and logo
//!   overlay
//! - **QR Code Reading**: Thin wrapper over the `rqrr` crate with charset fallback for byte data
//!
//! ## Quick Start
//!
//! ### Classifying a Payload
//!
//! ```rust
//! use qrlens::{classify, PayloadKind};
//!
//! let res = classify("WIFI:T:WPA;S:TestNet;P:secret123;H:false;;");
//! assert_eq!(res.kind, PayloadKind::Wifi);
//! assert_eq!(res.fields.get("SSID"), Some("TestNet"));
//! assert_eq!(res.fields.get("Hidden Network"), Some("No"));
//! ```
//!
//! ### Extracting a Palette
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use qrlens::extract_palette;
//!
//! let logo = RgbaImage::from_pixel(16, 16, Rgba([255, 0, 0, 255]));
//! let palette = extract_palette(&logo);
//! assert_eq!(palette.primary.to_hex(), "#ff0000");
//! assert_eq!(palette.light.to_hex(), "#ff9696");
//! ```
//!
//! ### Generating a Themed QR Code
//!
//! ```rust,no_run
//! use qrlens::{extract_palette, ECLevel, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let logo = image::open("logo.png")?.to_rgba8();
//! let qr = QRBuilder::new(b"https://example.com")
//!     .ec_level(ECLevel::H)              // Leaves room for the logo
//!     .palette(extract_palette(&logo))   // Themes modules, background and frame
//!     .build()?;
//!
//! let img = qr.to_image_with_logo(8, &logo, 0.2)?;
//! img.save("themed_qr.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Validating a QR Code
//!
//! ```rust,no_run
//! use qrlens::reader::validate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::open("qr_code.png")?;
//! let v = validate(&img)?;
//! println!("{}:", v.classification.kind);
//! for (label, value) in v.classification.fields.iter() {
//!     println!("  {label}: {value}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Classification Order
//!
//! Prefixes are tried in a fixed order and the first match wins: `http://` / `https://`,
//! `mailto:`, `tel:`, `sms:` / `smsto:`, `WIFI:`, `BEGIN:VCARD`, `BEGIN:VEVENT`, `geo:`.
//! Everything else is plain text. Classification never fails.
//!
//! ## Palette Defaults
//!
//! Transparent pixels (alpha < 128), near-white and near-black pixels are ignored. When nothing
//! is left the palette falls back to `#ff0000` / `#0000ff`. All thresholds live in
//! [`PaletteConfig`].

pub mod builder;
pub mod classify;
pub mod cli;
pub(crate) mod common;
pub mod palette;
pub mod reader;

pub use builder::{ECLevel, QRBuilder, QR};
pub use classify::{classify, Classification, DecodedPayload, Fields, Payload, PayloadKind};
pub use common::{color::Color, config, error::QRError, error::QRResult};
pub use palette::{extract_palette, extract_palette_with, PaletteConfig, PaletteResult};
