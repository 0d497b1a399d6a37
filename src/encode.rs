use crate::error::ErrorKind;
use crate::Result;

use base64::{engine::general_purpose, Engine as _};
use std::fs;
use std::path::Path;

pub fn base64_encode(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

/// Writes the base64 text of `src`'s raw bytes to `dst`, returning the text
/// length. The bytes are read straight from disk, never from a decoded image.
pub fn to_base64_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<usize> {
    let (src, dst) = (src.as_ref(), dst.as_ref());

    let raw = fs::read(src).map_err(|source| ErrorKind::Read {
        path: src.to_path_buf(),
        source,
    })?;
    let text = base64_encode(&raw);
    fs::write(dst, &text).map_err(|source| ErrorKind::Write {
        path: dst.to_path_buf(),
        source,
    })?;

    debug!(
        "Encoded {} bytes from {} into {} base64 chars",
        raw.len(),
        src.display(),
        text.len()
    );
    Ok(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_alphabet_with_padding() {
        assert_eq!(base64_encode(b""), "");
        assert_eq!(base64_encode(b"f"), "Zg==");
        assert_eq!(base64_encode(b"fo"), "Zm8=");
        assert_eq!(base64_encode(&[0xfb, 0xff, 0xfe]), "+//+");
    }

    #[test]
    fn file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("blob.bin");
        let dst = dir.path().join("blob.b64");
        let data: Vec<u8> = (0..=255).collect();
        fs::write(&src, &data).unwrap();

        let len = to_base64_file(&src, &dst).unwrap();
        let text = fs::read_to_string(&dst).unwrap();
        assert_eq!(len, text.len());
        assert!(!text.ends_with('\n'));
        assert_eq!(general_purpose::STANDARD.decode(text).unwrap(), data);
    }

    #[test]
    fn unreadable_source_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = to_base64_file(dir.path().join("gone"), dir.path().join("out.b64")).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Read { .. }));
        assert!(!dir.path().join("out.b64").exists());
    }

    #[test]
    fn unwritable_destination_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("blob.bin");
        fs::write(&src, b"abc").unwrap();

        let err = to_base64_file(&src, dir.path().join("missing/dir/out.b64")).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Write { .. }));
    }
}
