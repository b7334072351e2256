// File: crates/timeline-render-skia/src/theme.rs
// Summary: Light/Dark theming; resolves symbolic series colors to pixels.

use skia_safe as skia;
use timeline_core::ThemeColor;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub cursor: skia::Color,
    pub user_mark: skia::Color,
    /// Concrete colors for the symbolic choice palette, in palette order.
    pub choices: [skia::Color; 8],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            cursor: skia::Color::from_argb(255, 120, 120, 130),
            user_mark: skia::Color::from_argb(255, 255, 140, 60),
            choices: [
                skia::Color::from_argb(255, 92, 160, 250),  // blue
                skia::Color::from_argb(255, 255, 160, 70),  // orange
                skia::Color::from_argb(255, 80, 200, 130),  // green
                skia::Color::from_argb(255, 180, 130, 250), // purple
                skia::Color::from_argb(255, 240, 95, 95),   // red
                skia::Color::from_argb(255, 70, 200, 200),  // teal
                skia::Color::from_argb(255, 230, 205, 80),  // yellow
                skia::Color::from_argb(255, 160, 165, 175), // gray
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            cursor: skia::Color::from_argb(255, 110, 110, 120),
            user_mark: skia::Color::from_argb(255, 220, 110, 30),
            choices: [
                skia::Color::from_argb(255, 36, 110, 190),  // blue
                skia::Color::from_argb(255, 215, 120, 30),  // orange
                skia::Color::from_argb(255, 30, 150, 90),   // green
                skia::Color::from_argb(255, 130, 80, 200),  // purple
                skia::Color::from_argb(255, 200, 55, 55),   // red
                skia::Color::from_argb(255, 20, 150, 150),  // teal
                skia::Color::from_argb(255, 180, 155, 30),  // yellow
                skia::Color::from_argb(255, 110, 115, 125), // gray
            ],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            cursor: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            user_mark: skia::Color::from_argb(255, 0xff, 0xaa, 0x00),
            choices: [
                skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
                skia::Color::from_argb(255, 0xff, 0x88, 0x00),
                skia::Color::from_argb(255, 0x00, 0xff, 0x00),
                skia::Color::from_argb(255, 0xcc, 0x66, 0xff),
                skia::Color::from_argb(255, 0xff, 0x00, 0x00),
                skia::Color::from_argb(255, 0x00, 0xff, 0xff),
                skia::Color::from_argb(255, 0xff, 0xff, 0x00),
                skia::Color::from_argb(255, 0xbb, 0xbb, 0xbb),
            ],
        }
    }

    /// Resolve a symbolic series color against this theme.
    pub fn resolve(&self, color: ThemeColor) -> skia::Color {
        self.choices[palette_slot(color)]
    }
}

fn palette_slot(color: ThemeColor) -> usize {
    match color {
        ThemeColor::Blue => 0,
        ThemeColor::Orange => 1,
        ThemeColor::Green => 2,
        ThemeColor::Purple => 3,
        ThemeColor::Red => 4,
        ThemeColor::Teal => 5,
        ThemeColor::Yellow => 6,
        ThemeColor::Gray => 7,
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}

/// Replace a color's alpha with `opacity` in [0, 1], keeping its RGB.
pub fn with_opacity(color: skia::Color, opacity: f32) -> skia::Color {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(alpha, color.r(), color.g(), color.b())
}
