//! File size formatting for upload displays.
//!
//! Floating point is only used at the display boundary; sizes stay `u64`
//! bytes everywhere else.

/// Render a byte count as the size label shown next to an upload.
///
/// Zero renders as `"0 KB"`; anything below one megabyte as whole
/// kilobytes; everything else as megabytes with one decimal. This is a
/// display convenience, not a unit conversion — never use it for
/// accounting.
#[must_use]
pub fn format_file_size(size_in_bytes: u64) -> String {
    if size_in_bytes == 0 {
        return "0 KB".to_string();
    }
    #[allow(clippy::cast_precision_loss)] // display only
    let kb = size_in_bytes as f64 / 1024.0;
    if kb < 1024.0 {
        format!("{} KB", kb.round())
    } else {
        format!("{:.1} MB", kb / 1024.0)
    }
}
