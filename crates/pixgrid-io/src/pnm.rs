//! Plain-text PNM (Portable Any Map) format support
//!
//! Reads and writes the ASCII Netpbm variants with an explicit maximum
//! level for every kind:
//!
//! ```text
//! P2
//! # optional comment
//! 3 2
//! 255
//! 10 20 30
//! 40 50 60
//! ```
//!
//! The header is the first token. Everything after it is a stream of
//! whitespace-separated integers: width, height, maximum level, then one
//! value per pixel (`P1`, `P2`) or three per pixel (`P3`). Line breaks
//! carry no meaning and `#` starts a comment that runs to the end of the
//! line.

use crate::{IoError, IoResult};
use pixgrid_core::{ImageGrid, ImageKind, PixelValue};
use std::io::{Read, Write};
use tracing::debug;

/// Options for writing PNM text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Number of values per output line. `None` writes one image row per
    /// line (three values per pixel for `P3`).
    pub values_per_line: Option<usize>,
}

impl WriteOptions {
    /// Wrap pixel data after `n` values. `0` is treated as `1`.
    pub fn values_per_line(mut self, n: usize) -> Self {
        self.values_per_line = Some(n.max(1));
        self
    }
}

/// Split PNM text into tokens.
///
/// Comments (`#` to end of line) are dropped and any run of whitespace,
/// including line breaks, separates tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(data, _)| data))
        .flat_map(str::split_whitespace)
        .collect()
}

/// Read a PNM image (P1/P2/P3) from a reader.
///
/// The whole input is consumed.
///
/// # Errors
///
/// - [`IoError::Io`] if reading fails
/// - [`IoError::InvalidHeader`] if the input is empty or the first token
///   is not `P1`, `P2` or `P3`
/// - [`IoError::InvalidFile`] if the input is not UTF-8 text, a token is
///   not an integer, fewer than three numbers follow the header, the
///   number of pixel values is wrong, or a pixel value lies outside
///   `0..=max_level`
/// - [`IoError::InvalidConfig`] if width, height or maximum level is not
///   positive, the maximum level exceeds 255, or the pixel count does not
///   fit in memory
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<ImageGrid> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    read_pnm_mem(&data)
}

/// Read a PNM image from an in-memory buffer.
///
/// # Errors
///
/// As [`read_pnm`], minus [`IoError::Io`].
pub fn read_pnm_mem(data: &[u8]) -> IoResult<ImageGrid> {
    let text = std::str::from_utf8(data)
        .map_err(|e| IoError::InvalidFile(format!("not valid text: {e}")))?;
    decode(&tokenize(text))
}

fn decode(tokens: &[&str]) -> IoResult<ImageGrid> {
    let (header, contents) = tokens
        .split_first()
        .ok_or_else(|| IoError::InvalidHeader("empty input".to_string()))?;
    let kind: ImageKind = header
        .parse()
        .map_err(|_| IoError::InvalidHeader(format!("header {header} is not allowed")))?;

    let numbers = contents
        .iter()
        .map(|t| t.parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| IoError::InvalidFile("found non-integer values in contents".to_string()))?;

    let [width, height, max_level, data @ ..] = numbers.as_slice() else {
        return Err(IoError::InvalidFile(format!(
            "expected width, height and maximum level, found {} values",
            numbers.len()
        )));
    };
    let (width, height, max_level) = check_config(*width, *height, *max_level)?;

    let channels = kind.channels();
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| IoError::InvalidConfig(format!("image of {width}x{height} is too large")))?;
    if data.len() != expected {
        return Err(IoError::InvalidFile(format!(
            "non-matching amount of pixel values: expected {expected}, found {}",
            data.len()
        )));
    }
    if let Some(bad) = data.iter().find(|&&v| v < 0 || v > max_level as i64) {
        return Err(IoError::InvalidFile(format!(
            "pixel value {bad} outside 0..={max_level}"
        )));
    }

    // range checked above
    let pixels = data
        .chunks_exact(channels)
        .map(|c| match c {
            [r, g, b] => PixelValue::rgb(*r as u8, *g as u8, *b as u8),
            _ => PixelValue::gray(c[0] as u8),
        })
        .collect();

    debug!(%kind, width, height, max_level, "decoded pnm");
    Ok(ImageGrid::from_pixels(kind, max_level, width, height, pixels)?)
}

fn check_config(width: i64, height: i64, max_level: i64) -> IoResult<(u32, u32, u32)> {
    if width <= 0 || height <= 0 || max_level <= 0 {
        return Err(IoError::InvalidConfig(format!(
            "width, height and maximum level must be positive, found {width}, {height}, {max_level}"
        )));
    }
    if max_level > 255 {
        return Err(IoError::InvalidConfig(format!(
            "maximum level {max_level} exceeds 255"
        )));
    }
    let width = u32::try_from(width)
        .map_err(|_| IoError::InvalidConfig(format!("width {width} too large")))?;
    let height = u32::try_from(height)
        .map_err(|_| IoError::InvalidConfig(format!("height {height} too large")))?;
    Ok((width, height, max_level as u32))
}

/// Write an image as PNM text with default options.
///
/// # Errors
///
/// Returns [`IoError::Io`] if writing fails.
pub fn write_pnm<W: Write>(grid: &ImageGrid, writer: W) -> IoResult<()> {
    write_pnm_with(grid, writer, &WriteOptions::default())
}

/// Write an image as PNM text.
///
/// Output is the magic, `"{width} {height}"`, the maximum level, then
/// the pixel values separated by single spaces and wrapped according to
/// `options`. The output always ends with a newline.
///
/// Values above the grid's maximum level are written as the maximum
/// level, so the output always reads back with [`read_pnm`].
pub fn write_pnm_with<W: Write>(
    grid: &ImageGrid,
    mut writer: W,
    options: &WriteOptions,
) -> IoResult<()> {
    let kind = grid.kind();
    writeln!(writer, "{}", kind.magic())?;
    writeln!(writer, "{} {}", grid.width(), grid.height())?;
    writeln!(writer, "{}", grid.max_level())?;

    let per_line = options
        .values_per_line
        .unwrap_or(grid.width() as usize * kind.channels())
        .max(1);
    let max = grid.max_level();
    let values = grid
        .pixels()
        .iter()
        .flat_map(|p| (0..p.channel_count()).map(move |c| p.channel(c).min(max)));

    let mut col = 0;
    for v in values {
        if col > 0 {
            writer.write_all(b" ")?;
        }
        write!(writer, "{v}")?;
        col += 1;
        if col == per_line {
            writer.write_all(b"\n")?;
            col = 0;
        }
    }
    if col > 0 {
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write an image as PNM text to a new buffer.
pub fn write_pnm_mem(grid: &ImageGrid) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_pnm(grid, &mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_text() -> &'static str {
        "P2\n3 3\n8\n0 1 2\n3 4 5\n6 7 8\n"
    }

    #[test]
    fn test_tokenize_ignores_layout_and_comments() {
        let text = "P2 # gray\n 2\t1\n\n255 # max\n7   9";
        assert_eq!(tokenize(text), vec!["P2", "2", "1", "255", "7", "9"]);
    }

    #[test]
    fn test_read_grayscale() {
        let grid = read_pnm_mem(counting_text().as_bytes()).unwrap();
        assert_eq!(grid.kind(), ImageKind::Grayscale);
        assert_eq!((grid.width(), grid.height(), grid.max_level()), (3, 3, 8));
        assert_eq!(grid.get_pixel(2, 1).unwrap(), PixelValue::gray(5));
    }

    #[test]
    fn test_read_rectangular_uses_width_then_height() {
        let grid = read_pnm_mem(b"P2 3 2 255 10 20 30 40 50 60").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get_pixel(0, 1).unwrap(), PixelValue::gray(40));
    }

    #[test]
    fn test_read_rgb_triples() {
        let grid = read_pnm_mem(b"P3\n2 1\n255\n1 2 3 4 5 6\n").unwrap();
        assert_eq!(grid.kind(), ImageKind::Rgb);
        assert_eq!(grid.get_pixel(1, 0).unwrap(), PixelValue::rgb(4, 5, 6));
    }

    #[test]
    fn test_header_errors() {
        for input in ["", "   \n", "P5 1 1 255 0", "# only a comment\n"] {
            let err = read_pnm_mem(input.as_bytes()).unwrap_err();
            assert!(matches!(err, IoError::InvalidHeader(_)), "{input:?}: {err}");
            assert!(err.is_parse_error());
        }
    }

    #[test]
    fn test_file_errors() {
        for input in [
            "P2 3 3 8 0 1 2 3 a 5 6 7 8",
            "P2 3 3",
            "P2 3 3 8 0 1 2",
            "P2 1 1 8 9",
            "P2 1 1 8 -1",
            "P3 1 1 255 1 2",
        ] {
            let err = read_pnm_mem(input.as_bytes()).unwrap_err();
            assert!(matches!(err, IoError::InvalidFile(_)), "{input}: {err}");
        }
        assert!(matches!(
            read_pnm_mem(&[b'P', b'2', b' ', 0xff]),
            Err(IoError::InvalidFile(_))
        ));
    }

    #[test]
    fn test_config_errors() {
        for input in ["P2 0 3 8", "P2 3 -1 8", "P2 1 1 0 0", "P2 1 1 256 0"] {
            let err = read_pnm_mem(input.as_bytes()).unwrap_err();
            assert!(matches!(err, IoError::InvalidConfig(_)), "{input}: {err}");
        }
    }

    #[test]
    fn test_huge_dimensions_are_rejected() {
        let err = read_pnm_mem(b"P3 4000000000 4000000000 255 0").unwrap_err();
        assert!(matches!(err, IoError::InvalidConfig(_)), "{err}");
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("4000000000x4000000000"));
    }

    #[test]
    fn test_write_default_layout() {
        let grid = read_pnm_mem(b"P2 3 2 255 10 20 30 40 50 60").unwrap();
        let text = String::from_utf8(write_pnm_mem(&grid).unwrap()).unwrap();
        assert_eq!(text, "P2\n3 2\n255\n10 20 30\n40 50 60\n");
    }

    #[test]
    fn test_write_rgb_and_wrapping() {
        let grid = read_pnm_mem(b"P3 2 1 255 1 2 3 4 5 6").unwrap();
        let text = String::from_utf8(write_pnm_mem(&grid).unwrap()).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n1 2 3 4 5 6\n");

        let mut buf = Vec::new();
        write_pnm_with(&grid, &mut buf, &WriteOptions::default().values_per_line(4)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "P3\n2 1\n255\n1 2 3 4\n5 6\n");
    }

    #[test]
    fn test_written_text_reads_back() {
        let grid = read_pnm_mem(counting_text().as_bytes()).unwrap();
        let bytes = write_pnm_mem(&grid).unwrap();
        assert_eq!(bytes, counting_text().as_bytes());
        assert_eq!(read_pnm(bytes.as_slice()).unwrap(), grid);
    }

    #[test]
    fn test_write_clamps_to_max_level() {
        let grid = read_pnm_mem(counting_text().as_bytes()).unwrap();
        let lighter = grid.lighten(10).unwrap();
        assert_eq!(lighter.get_pixel(0, 0).unwrap(), PixelValue::gray(10));

        let text = String::from_utf8(write_pnm_mem(&lighter).unwrap()).unwrap();
        assert_eq!(text, "P2\n3 3\n8\n8 8 8\n8 8 8\n8 8 8\n");

        let back = read_pnm_mem(text.as_bytes()).unwrap();
        assert_eq!(back.max_level(), 8);
        assert!(back.pixels().iter().all(|p| *p == PixelValue::gray(8)));
    }
}
