use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use log::debug;
use tempfile::NamedTempFile;

use crate::error::{AuroraError, Result};

/// Destination for a finished image
pub trait ImageSink {
    /// Persist `pixels`: `height` rows of `3 * width` interleaved RGB bytes
    fn write(&self, width: u32, height: u32, pixels: &[u8]) -> Result<()>;
}

pub(crate) fn check_len(width: u32, height: u32, pixels: &[u8]) -> Result<()> {
    let expected = 3 * width as usize * height as usize;
    if pixels.len() != expected {
        return Err(AuroraError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Writes a truecolor PNG.
///
/// The image is encoded into a temporary file next to the destination and
/// renamed into place only once fully written, so a failed run never leaves a
/// truncated file at `path`.
#[derive(Debug, Clone)]
pub struct PngSink {
    path: PathBuf,
}

impl PngSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn staging_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    /// Temporary file that ends up with the mode a plain create would give,
    /// or the mode of the file it replaces.
    fn staging_file(&self) -> Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(".aurora").suffix(".png");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let staged = builder.tempfile_in(self.staging_dir())?;

        if let Ok(existing) = fs::metadata(&self.path) {
            if existing.is_file() {
                staged.as_file().set_permissions(existing.permissions())?;
            }
        }
        Ok(staged)
    }
}

impl ImageSink for PngSink {
    fn write(&self, width: u32, height: u32, pixels: &[u8]) -> Result<()> {
        check_len(width, height, pixels)?;

        let staged = self.staging_file()?;
        let mut writer = BufWriter::new(staged);
        PngEncoder::new(&mut writer).write_image(pixels, width, height, ExtendedColorType::Rgb8)?;
        writer.flush()?;

        let staged = writer.into_inner().map_err(|e| e.into_error())?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|e| e.error)?;

        debug!("Wrote {}x{} PNG to {}", width, height, self.path.display());
        Ok(())
    }
}
