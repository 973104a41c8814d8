use crate::domain::ports::QrRenderer;
use crate::error::AppError;
use base64::{engine::general_purpose::STANDARD, Engine};
use qrcode::{render::svg, QrCode};
use tracing::error;

/// Renders QR payloads as base64 SVG data URIs, ready to embed in an `<img>`.
pub struct SvgQrRenderer;

impl QrRenderer for SvgQrRenderer {
    fn render(&self, payload: &str) -> Result<String, AppError> {
        let code = QrCode::new(payload.as_bytes()).map_err(|e| {
            error!("QR encoding failed for payload {}: {:?}", payload, e);
            AppError::Internal
        })?;

        let image = code.render::<svg::Color>()
            .min_dimensions(200, 200)
            .quiet_zone(true)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build();

        Ok(format!("data:image/svg+xml;base64,{}", STANDARD.encode(image)))
    }
}
