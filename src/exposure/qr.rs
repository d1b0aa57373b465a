use qrcodegen::{DataTooLong, QrCode, QrCodeEcc};

/// modules of light border around the code, scanners need at least some
const QUIET_ZONE: i32 = 2;

/// renders `text` as a QR code made of half block characters, two module rows per line.
///
/// Light modules are the filled ones, so the code reads correctly on a dark terminal
pub fn render_qr(text: &str) -> Result<String, DataTooLong> {
    let qr = QrCode::encode_text(text, QrCodeEcc::Medium)?;
    let start = -QUIET_ZONE;
    let end = qr.size() + QUIET_ZONE;
    let mut rendered = String::new();
    for y in (start..end).step_by(2) {
        for x in start..end {
            // get_module is false (light) outside of the code, so the quiet zone comes for free
            let top = !qr.get_module(x, y);
            let bottom = !qr.get_module(x, y + 1);
            rendered.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        rendered.push('\n');
    }
    Ok(rendered)
}
