//! Test fixtures and constants.

use std::io::Write;

use tempfile::NamedTempFile;

/// Well-known digests of the empty input
pub mod digests {
    pub const MD5_EMPTY: &str = "d41d8cd98f00b204e9800998ecf8427e";
    pub const SHA1_EMPTY: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
    pub const SHA256_EMPTY: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    pub const MD5_ZERO: &str = "00000000000000000000000000000000";
    pub const MD5_ONES: &str = "ffffffffffffffffffffffffffffffff";
}

/// Sixteen grays from #000 to #fff
pub fn gray_hex() -> Vec<String> {
    (0..16).map(|i| format!("#{0:x}{0:x}{0:x}", i)).collect()
}

/// Config with one custom palette named `mono`
pub fn mono_palette_yaml() -> String {
    let colors: Vec<String> = gray_hex().iter().map(|c| format!("\"{c}\"")).collect();
    format!(
        "palettes:\n  - name: mono\n    colors: [{}]\n",
        colors.join(", ")
    )
}

/// Write `content` to a temporary `.yaml` file that lives as long as the
/// returned handle.
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp config");
    file
}
