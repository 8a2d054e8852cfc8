//! Maps color tokens to paintable colors. Only used for drawing; the
//! controller stores tokens verbatim.

use eframe::egui::Color32;

pub const UNKNOWN_SWATCH: Color32 = Color32::from_rgb(96, 96, 96);

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("aqua", [0, 255, 255]),
    ("black", [0, 0, 0]),
    ("blue", [0, 0, 255]),
    ("brown", [165, 42, 42]),
    ("chocolate", [210, 105, 30]),
    ("coral", [255, 127, 80]),
    ("crimson", [220, 20, 60]),
    ("cyan", [0, 255, 255]),
    ("darkgreen", [0, 100, 0]),
    ("fuchsia", [255, 0, 255]),
    ("gold", [255, 215, 0]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("grey", [128, 128, 128]),
    ("indigo", [75, 0, 130]),
    ("lime", [0, 255, 0]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("navy", [0, 0, 128]),
    ("olive", [128, 128, 0]),
    ("orange", [255, 165, 0]),
    ("pink", [255, 192, 203]),
    ("purple", [128, 0, 128]),
    ("red", [255, 0, 0]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("teal", [0, 128, 128]),
    ("violet", [238, 130, 238]),
    ("white", [255, 255, 255]),
    ("yellow", [255, 255, 0]),
];

pub fn resolve(token: &str) -> Option<Color32> {
    let token = token.trim();
    if let Some(hex) = token.strip_prefix('#') {
        return parse_hex(hex).map(|[r, g, b]| Color32::from_rgb(r, g, b));
    }
    let lower = token.to_ascii_lowercase();
    NAMED_COLORS
        .binary_search_by(|(name, _)| name.cmp(&lower.as_str()))
        .ok()
        .map(|index| {
            let [r, g, b] = NAMED_COLORS[index].1;
            Color32::from_rgb(r, g, b)
        })
}

pub fn resolve_or_unknown(token: &str) -> Color32 {
    resolve(token).unwrap_or(UNKNOWN_SWATCH)
}

/// `rgb` or `rrggbb`, without the leading `#`.
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, slot) in rgb.iter_mut().enumerate() {
                let nibble = channel(i..i + 1)?;
                *slot = nibble * 17;
            }
            Some(rgb)
        }
        6 => Some([channel(0..2)?, channel(2..4)?, channel(4..6)?]),
        _ => None,
    }
}

pub fn format_hex([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}
