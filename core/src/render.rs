//! PNG rendering of QR codes and CODE128 barcodes.
//!
//! Images are returned as `data:image/png;base64,...` URLs so the front end
//! can drop them straight into an `<img>` tag. Nothing is written to disk.

use barcoders::sym::code128::Code128;
use base64::Engine;
use image::{GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};
use std::io::Cursor;
use thiserror::Error;

/// Pixels per QR module.
pub const QR_MODULE_PX: u32 = 8;

/// Light modules around a QR symbol.
pub const QR_QUIET_ZONE: u32 = 4;

/// Pixels per barcode module.
pub const BARCODE_MODULE_PX: u32 = 2;

/// Barcode height in pixels.
pub const BARCODE_HEIGHT_PX: u32 = 80;

/// Light modules on either side of a barcode.
pub const BARCODE_QUIET_ZONE: u32 = 10;

/// Prefix of every URL returned here.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Code set B start character, covering printable ASCII.
const CODE128_SET_B: char = 'Ɓ';

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Rendering errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Payload does not fit in a QR symbol.
    #[error("QR code cannot hold this payload: {0}")]
    Qr(String),

    /// Content is not encodable as CODE128.
    #[error("Barcode cannot encode {content:?}: {reason}")]
    Barcode {
        /// Rejected content
        content: String,
        /// Encoder message
        reason: String,
    },

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Png(String),
}

impl RenderError {
    /// Whether the error comes from the content rather than the encoder.
    #[must_use]
    pub const fn is_content_error(&self) -> bool {
        matches!(self, Self::Qr(_) | Self::Barcode { .. })
    }
}

/// Render a QR code for `payload` as a PNG data URL.
///
/// # Errors
///
/// Returns [`RenderError::Qr`] if the payload is too long for any QR version.
pub fn qr_code_data_url(payload: &str) -> Result<String, RenderError> {
    let code = QrCode::new(payload.as_bytes()).map_err(|e| RenderError::Qr(e.to_string()))?;
    let modules = u32::try_from(code.width()).map_err(|e| RenderError::Qr(e.to_string()))?;
    let colors = code.to_colors();

    let side = (modules + 2 * QR_QUIET_ZONE) * QR_MODULE_PX;
    let image = GrayImage::from_fn(side, side, |x, y| {
        let (mx, my) = (x / QR_MODULE_PX, y / QR_MODULE_PX);
        let inside = QR_QUIET_ZONE..QR_QUIET_ZONE + modules;
        if !inside.contains(&mx) || !inside.contains(&my) {
            return LIGHT;
        }
        let index = ((my - QR_QUIET_ZONE) * modules + (mx - QR_QUIET_ZONE)) as usize;
        match colors.get(index) {
            Some(Color::Dark) => DARK,
            _ => LIGHT,
        }
    });

    png_data_url(&image)
}

/// Render `content` as a CODE128 barcode PNG data URL.
///
/// # Errors
///
/// Returns [`RenderError::Barcode`] if `content` is empty or holds characters
/// outside printable ASCII.
pub fn barcode_data_url(content: &str) -> Result<String, RenderError> {
    let modules = code128_modules(content)?;
    let count = u32::try_from(modules.len()).map_err(|e| RenderError::Barcode {
        content: content.to_string(),
        reason: e.to_string(),
    })?;

    let width = (count + 2 * BARCODE_QUIET_ZONE) * BARCODE_MODULE_PX;
    let image = GrayImage::from_fn(width, BARCODE_HEIGHT_PX, |x, _| {
        let module = (x / BARCODE_MODULE_PX).checked_sub(BARCODE_QUIET_ZONE);
        match module.and_then(|m| modules.get(m as usize)) {
            Some(1) => DARK,
            _ => LIGHT,
        }
    });

    png_data_url(&image)
}

/// CODE128 bars and spaces for `content`, one entry per module (`1` is a bar).
///
/// # Errors
///
/// Returns [`RenderError::Barcode`] for empty or non-ASCII content.
pub fn code128_modules(content: &str) -> Result<Vec<u8>, RenderError> {
    let rejected = |reason: String| RenderError::Barcode {
        content: content.to_string(),
        reason,
    };

    if content.is_empty() {
        return Err(rejected("empty content".to_string()));
    }
    if let Some(c) = content.chars().find(|c| !(' '..='~').contains(c)) {
        return Err(rejected(format!("unsupported character {c:?}")));
    }

    let symbol = Code128::new(format!("{CODE128_SET_B}{content}")).map_err(|e| rejected(e.to_string()))?;
    Ok(symbol.encode())
}

fn png_data_url(image: &GrayImage) -> Result<String, RenderError> {
    let mut png = Cursor::new(Vec::new());
    image
        .write_to(&mut png, ImageFormat::Png)
        .map_err(|e| RenderError::Png(e.to_string()))?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(png.into_inner());
    Ok(format!("{PNG_DATA_URL_PREFIX}{encoded}"))
}
