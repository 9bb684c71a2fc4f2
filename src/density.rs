//! The fixed density -> pixel size table.

/// Android screen density classes that get a launcher icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

/// Every density, smallest first. Generation walks this order.
pub const SIZE_TABLE: [Density; 5] = [
    Density::Mdpi,
    Density::Hdpi,
    Density::Xhdpi,
    Density::Xxhdpi,
    Density::Xxxhdpi,
];

/// File stems written into each density folder. All three get the same bytes.
pub const LAUNCHER_NAMES: [&str; 3] = ["ic_launcher", "ic_launcher_round", "ic_launcher_foreground"];

/// Side length of the web logo.
pub const WEB_LOGO_SIZE: u32 = 512;

impl Density {
    /// Resource folder name under `res/`.
    pub fn folder(self) -> &'static str {
        match self {
            Density::Mdpi => "mipmap-mdpi",
            Density::Hdpi => "mipmap-hdpi",
            Density::Xhdpi => "mipmap-xhdpi",
            Density::Xxhdpi => "mipmap-xxhdpi",
            Density::Xxxhdpi => "mipmap-xxxhdpi",
        }
    }

    /// Square side length in pixels.
    pub fn size(self) -> u32 {
        match self {
            Density::Mdpi => 48,
            Density::Hdpi => 72,
            Density::Xhdpi => 96,
            Density::Xxhdpi => 144,
            Density::Xxxhdpi => 192,
        }
    }
}
