/// Modern industrial daylight palette as 0xRRGGBB.
pub const GROUND: u32 = 0x5a7a5a;
pub const CONCRETE: u32 = 0x9a9aaa;
pub const ASPHALT: u32 = 0x606670;

pub const STEEL: u32 = 0x8a95a8;
pub const STEEL_LIGHT: u32 = 0xaabbcc;
pub const STEEL_DARK: u32 = 0x6a7a88;

pub const PRIMARY: u32 = 0x6366f1;
pub const PRIMARY_LIGHT: u32 = 0x818cf8;
pub const ACCENT: u32 = 0xf59e0b;

pub const YELLOW: u32 = 0xfbbf24;
pub const ORANGE: u32 = 0xf97316;
pub const RED: u32 = 0xef4444;
pub const BLUE: u32 = 0x3b82f6;
pub const GREEN: u32 = 0x10b981;

pub const WHITE: u32 = 0xf8fafc;
pub const GLASS: u32 = 0x4488cc;

pub const SMOKE: u32 = 0x888888;
pub const ATMOSPHERE: u32 = 0x6366f1;

/// Rotating package colours on the conveyor loop.
pub const PACKAGE_COLOURS: [u32; 4] = [ORANGE, BLUE, GREEN, PRIMARY];

/// Split a 0xRRGGBB value into its channel bytes.
pub const fn rgb_bytes(hex: u32) -> (u8, u8, u8) {
    (
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}
