//! Screenshot export as binary PPM (P6)
//!
//! Pixels come straight from a GL-style framebuffer read: RGB, tightly
//! packed, bottom row first. Rows are flipped so the image is upright.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `rgb` (bottom-up rows) as a P6 image
pub fn write_ppm<W: Write>(
    writer: &mut W,
    width: usize,
    height: usize,
    rgb: &[u8],
) -> io::Result<()> {
    let row_bytes = width * 3;
    if rgb.len() != row_bytes * height {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "pixel buffer is {} bytes, expected {} for {}x{}",
                rgb.len(),
                row_bytes * height,
                width,
                height
            ),
        ));
    }

    write!(writer, "P6\n{} {}\n255\n", width, height)?;
    if row_bytes > 0 {
        for row in rgb.chunks_exact(row_bytes).rev() {
            writer.write_all(row)?;
        }
    }
    writer.flush()
}

/// Save a framebuffer capture to `path`
pub fn save_ppm(path: &Path, width: usize, height: usize, rgb: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_ppm(&mut writer, width, height, rgb)?;
    log::info!("Screenshot saved to {}", path.display());
    Ok(())
}

/// Timestamp-free sequential name, e.g. `screenshot_003.ppm`
pub fn screenshot_name(index: u32) -> String {
    format!("screenshot_{:03}.ppm", index)
}
