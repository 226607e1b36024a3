//! Fixed color palettes for the cube installation.

/// Five-color palettes the regeneration step picks from.
pub const PALETTES: [[&str; 5]; 10] = [
    ["#69d2e7", "#a7dbd8", "#e0e4cc", "#f38630", "#fa6900"],
    ["#fe4365", "#fc9d9a", "#f9cdad", "#c8c8a9", "#83af9b"],
    ["#ecd078", "#d95b43", "#c02942", "#542437", "#53777a"],
    ["#556270", "#4ecdc4", "#c7f464", "#ff6b6b", "#c44d58"],
    ["#774f38", "#e08e79", "#f1d4af", "#ece5ce", "#c5e0dc"],
    ["#e8ddcb", "#cdb380", "#036564", "#033649", "#031634"],
    ["#490a3d", "#bd1550", "#e97f02", "#f8ca00", "#8a9b0f"],
    ["#594f4f", "#547980", "#45ada8", "#9de0ad", "#e5fcc2"],
    ["#00a0b0", "#6a4a3c", "#cc333f", "#eb6841", "#edc951"],
    ["#e94e77", "#d68189", "#c6a49a", "#c6e5d9", "#f4ead5"],
];

/// Parses a `#rrggbb` hex color into RGB components in 0..1.
///
/// Malformed input falls back to white rather than failing; the palette
/// table is made of constants, so this path only matters for callers
/// feeding their own colors.
pub fn color_from_hex(hex: &str) -> [f32; 3] {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return [1.0, 1.0, 1.0];
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .unwrap_or(1.0)
    };
    [channel(0), channel(2), channel(4)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_extremes() {
        assert_eq!(color_from_hex("#ffffff"), [1.0, 1.0, 1.0]);
        assert_eq!(color_from_hex("#000000"), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_parses_palette_entry() {
        let [r, g, b] = color_from_hex("#69d2e7");
        assert!((r - 0x69 as f32 / 255.0).abs() < 1e-6);
        assert!((g - 0xd2 as f32 / 255.0).abs() < 1e-6);
        assert!((b - 0xe7 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_malformed_falls_back_to_white() {
        assert_eq!(color_from_hex("red"), [1.0, 1.0, 1.0]);
        assert_eq!(color_from_hex("#fff"), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_palette_table_is_well_formed() {
        for palette in PALETTES {
            for entry in palette {
                assert!(entry.starts_with('#') && entry.len() == 7);
            }
        }
    }
}
