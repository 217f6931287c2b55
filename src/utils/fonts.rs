//! Font setup.
//!
//! egui's bundled fonts have no CJK glyphs, so the first system CJK font
//! found is appended as a fallback to both font families.

use eframe::egui;
use std::sync::Arc;

const CJK_FONT_NAME: &str = "system-cjk";

/// Candidate font files, tried in order.
const CJK_FONT_PATHS: &[&str] = &[
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
];

/// Installs a system CJK font as fallback. Without one, labels render as
/// replacement boxes; this is logged and otherwise ignored.
pub fn install_cjk_fonts(ctx: &egui::Context) {
    let Some((path, bytes)) = CJK_FONT_PATHS
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)))
    else {
        log::warn!("no CJK font found; Chinese labels will not render");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
    log::info!("loaded CJK font from {}", path);
}
