//! One icon generation run, start to finish.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageReader;
use tracing::{debug, info, warn};

use crate::density::{Density, LAUNCHER_NAMES, SIZE_TABLE, WEB_LOGO_SIZE};
use crate::error::IconError;
use crate::raster;

/// Source image used when no path is given.
pub const DEFAULT_INPUT: &str = "new_logo.png";

const RES_DIR: [&str; 5] = ["android", "app", "src", "main", "res"];
const WEB_LOGO: [&str; 3] = ["src", "assets", "logo.png"];

/// Output paths, resolved against a project root.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Default for Layout {
    /// Rooted at the current working directory.
    fn default() -> Self {
        Self::new(".")
    }
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `android/app/src/main/res`
    pub fn res_dir(&self) -> PathBuf {
        RES_DIR.iter().fold(self.root.clone(), |p, part| p.join(part))
    }

    pub fn density_dir(&self, density: Density) -> PathBuf {
        self.res_dir().join(density.folder())
    }

    /// `<density dir>/<name>.png`
    pub fn launcher_path(&self, density: Density, name: &str) -> PathBuf {
        self.density_dir(density).join(format!("{name}.png"))
    }

    /// `src/assets/logo.png`
    pub fn web_logo_path(&self) -> PathBuf {
        WEB_LOGO.iter().fold(self.root.clone(), |p, part| p.join(part))
    }
}

/// Progress notifications emitted while a run advances.
#[derive(Debug)]
pub enum Event<'a> {
    Opening(&'a Path),
    ConvertedToRgba,
    SourceSize { width: u32, height: u32 },
    Created(&'a Artifact),
    WebLogoUpdated(&'a Path),
}

/// A file written by the run.
#[derive(Debug)]
pub struct Artifact {
    pub density: Density,
    pub name: &'static str,
    pub path: PathBuf,
}

impl Artifact {
    pub fn size(&self) -> u32 {
        self.density.size()
    }
}

/// Summary of a finished run.
#[derive(Debug, Default)]
pub struct Report {
    pub source_size: (u32, u32),
    pub converted: bool,
    pub artifacts: Vec<Artifact>,
    /// Set when the web logo existed and was rewritten.
    pub web_logo: Option<PathBuf>,
}

/// Picks the positional argument, falling back to [`DEFAULT_INPUT`].
pub fn resolve_input(arg: Option<PathBuf>) -> PathBuf {
    arg.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
}

/// The only precondition checked up front: the input must be an existing file.
pub fn check_input(path: &Path) -> Result<(), IconError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(IconError::SourceNotFound(path.to_path_buf()))
    }
}

/// Runs without progress reporting.
pub fn run(input: &Path, layout: &Layout) -> Result<Report, IconError> {
    run_with(input, layout, |_| {})
}

/// Generates every launcher icon and, if present, refreshes the web logo.
///
/// Stops at the first failure. Files written before that point stay on disk.
pub fn run_with<F>(input: &Path, layout: &Layout, mut on_event: F) -> Result<Report, IconError>
where
    F: FnMut(&Event<'_>),
{
    check_input(input)?;

    on_event(&Event::Opening(input));
    let decoded = decode(input)?;

    let (source, converted) = raster::normalize(decoded);
    if converted {
        on_event(&Event::ConvertedToRgba);
    }
    let (width, height) = source.dimensions();
    on_event(&Event::SourceSize { width, height });
    info!("Loaded {} ({}x{})", input.display(), width, height);
    if width != height {
        warn!("Source is not square, icons will be stretched");
    }

    let mut report = Report {
        source_size: (width, height),
        converted,
        ..Report::default()
    };

    let res_dir = layout.res_dir();
    fs::create_dir_all(&res_dir).map_err(|e| IconError::io(&res_dir, e))?;

    for density in SIZE_TABLE {
        let dir = layout.density_dir(density);
        fs::create_dir_all(&dir).map_err(|e| IconError::io(&dir, e))?;

        let png = raster::encode_png(&raster::resize_square(&source, density.size()))?;
        debug!("{}: encoded {} bytes", density.folder(), png.len());

        for name in LAUNCHER_NAMES {
            let path = layout.launcher_path(density, name);
            write_file(&path, &png)?;
            let artifact = Artifact {
                density,
                name,
                path,
            };
            on_event(&Event::Created(&artifact));
            report.artifacts.push(artifact);
        }
    }

    let web_logo = layout.web_logo_path();
    if web_logo.exists() {
        let png = raster::encode_png(&raster::resize_square(&source, WEB_LOGO_SIZE))?;
        write_file(&web_logo, &png)?;
        on_event(&Event::WebLogoUpdated(&web_logo));
        report.web_logo = Some(web_logo);
    } else {
        debug!("No web logo at {}, skipping", web_logo.display());
    }

    info!("Wrote {} launcher icons", report.artifacts.len());
    Ok(report)
}

fn decode(path: &Path) -> Result<image::DynamicImage, IconError> {
    let mut reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| IconError::io(path, e))?;
    // Source size is not capped.
    reader.no_limits();
    reader.decode().map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
    fs::write(path, bytes).map_err(|e| IconError::io(path, e))?;
    debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_relative_to_root() {
        let layout = Layout::new("/proj");
        assert_eq!(layout.res_dir(), PathBuf::from("/proj/android/app/src/main/res"));
        assert_eq!(
            layout.launcher_path(Density::Xxhdpi, "ic_launcher_round"),
            PathBuf::from("/proj/android/app/src/main/res/mipmap-xxhdpi/ic_launcher_round.png")
        );
        assert_eq!(layout.web_logo_path(), PathBuf::from("/proj/src/assets/logo.png"));
    }

    #[test]
    fn default_root_is_cwd() {
        let layout = Layout::default();
        assert_eq!(layout.density_dir(Density::Mdpi), Path::new("./android/app/src/main/res/mipmap-mdpi"));
    }

    #[test]
    fn default_input_when_no_argument() {
        assert_eq!(resolve_input(None), PathBuf::from("new_logo.png"));
        assert_eq!(resolve_input(Some("logo.jpg".into())), PathBuf::from("logo.jpg"));
    }

    #[test]
    fn directory_is_not_a_valid_input() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(check_input(dir.path()), Err(IconError::SourceNotFound(_))));
    }

    #[test]
    fn undecodable_input_fails_after_check() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.png");
        fs::write(&bogus, b"not an image").unwrap();

        let err = run(&bogus, &Layout::new(dir.path())).unwrap_err();
        assert!(matches!(err, IconError::Decode { .. }));
        assert!(!Layout::new(dir.path()).res_dir().exists());
    }

    fn png_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
        let mut crc = !0u32;
        for &byte in kind.iter().chain(data) {
            crc ^= byte as u32;
            for _ in 0..8 {
                crc = if crc & 1 != 0 { (crc >> 1) ^ 0xEDB8_8320 } else { crc >> 1 };
            }
        }
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        out.extend_from_slice(kind);
        out.extend_from_slice(data);
        out.extend_from_slice(&(!crc).to_be_bytes());
    }

    #[test]
    fn large_sources_are_not_rejected_by_allocation_limits() {
        // 12000x12000 RGBA needs more than the decoder's default 512 MiB cap.
        // The pixel data is truncated, so decoding must fail on the data itself.
        let mut ihdr = Vec::new();
        ihdr.extend_from_slice(&12_000u32.to_be_bytes());
        ihdr.extend_from_slice(&12_000u32.to_be_bytes());
        ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);

        let mut png = b"\x89PNG\r\n\x1a\n".to_vec();
        png_chunk(&mut png, b"IHDR", &ihdr);
        png_chunk(&mut png, b"IDAT", &[0x78, 0x9c, 0x03, 0x00, 0x00, 0x00, 0x00, 0x01]);
        png_chunk(&mut png, b"IEND", &[]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.png");
        fs::write(&path, png).unwrap();

        match decode(&path) {
            Err(IconError::Decode { source, .. }) => {
                assert!(!matches!(source, image::ImageError::Limits(_)), "{source}")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
