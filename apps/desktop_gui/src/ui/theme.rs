use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceTheme {
    pub background: Color32,
    pub active: Color32,
    pub inactive: Color32,
    pub failure: Color32,
    pub debug_outline: Color32,
    pub debug_cell_fill: Color32,
    pub debug_guide: Color32,
}

impl Default for FaceTheme {
    fn default() -> Self {
        Self {
            background: Color32::BLACK,
            active: Color32::WHITE,
            inactive: Color32::from_rgb(0x20, 0x20, 0x20),
            failure: Color32::from_rgb(0xe0, 0x40, 0x40),
            debug_outline: Color32::from_rgb(0xff, 0x00, 0xff),
            debug_cell_fill: Color32::from_rgba_unmultiplied(0xff, 0xff, 0x00, 0x20),
            debug_guide: Color32::from_rgb(0x80, 0xff, 0x80),
        }
    }
}
