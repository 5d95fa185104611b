use crate::{book::BookEntry, errors::BookResult};
use image::{GrayImage, Luma};
use qrcode::{EcLevel, QrCode};

/// Pixels per QR module.
const MODULE_SIZE: u32 = 10;

pub(crate) fn file_name(entry: &BookEntry) -> String {
    format!("qr_code_{}.png", entry.sanitized_title())
}

/// Encodes `data` at error-correction level L in the smallest version that fits,
/// black modules on white with a four module quiet zone.
pub(crate) fn render(data: &str) -> BookResult<GrayImage> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::L)?;
    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .dark_color(Luma([0]))
        .light_color(Luma([255]))
        .build();
    Ok(image)
}

#[cfg(test)]
mod test {
    use super::{MODULE_SIZE, file_name, render};
    use crate::book::BookEntry;

    #[test]
    fn test_file_name() {
        let entry = BookEntry {
            title: "설계와 구현".to_string(),
            ..Default::default()
        };
        assert_eq!(file_name(&entry), "qr_code_설계와_구현.png");
        assert_eq!(file_name(&BookEntry::default()), "qr_code_.png");
    }

    #[test]
    fn test_render_geometry() -> anyhow::Result<()> {
        let image = render("https://a.io")?;
        // version 1 is 21 modules wide, plus 4 quiet modules on each side
        assert_eq!(image.width(), (21 + 8) * MODULE_SIZE);
        assert_eq!(image.width(), image.height());
        assert_eq!(image.get_pixel(0, 0).0, [255]);
        // top left finder pattern starts right after the quiet zone
        assert_eq!(image.get_pixel(4 * MODULE_SIZE, 4 * MODULE_SIZE).0, [0]);
        Ok(())
    }
}
