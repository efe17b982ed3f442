//! Path checks and whole-file I/O for the CLI.
//!
//! The codec core works on buffers; everything filesystem-shaped lives here.

use std::path::Path;

use crate::error::CodecError;

/// Enforce the per-algorithm extension and refuse in-place operation.
///
/// When compressing the *output* must carry the algorithm's extension; when
/// decompressing the *input* must.
pub fn validate_paths(
    extension: &'static str,
    input: &Path,
    output: &Path,
    compressing: bool,
) -> Result<(), CodecError> {
    let checked = if compressing { output } else { input };
    if checked.extension().and_then(|e| e.to_str()) != Some(extension) {
        return Err(CodecError::Io(format!(
            "{} file {} must have the .{} extension",
            if compressing { "output" } else { "input" },
            checked.display(),
            extension
        )));
    }
    if same_file(input, output) {
        return Err(CodecError::Io(
            "input and output cannot be the same file".to_string(),
        ));
    }
    Ok(())
}

/// Equality after canonicalization where possible; the output file usually
/// does not exist yet, so fall back to the raw paths.
fn same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

pub fn read_input(path: &Path) -> Result<Vec<u8>, CodecError> {
    Ok(std::fs::read(path)?)
}

pub fn write_output(path: &Path, data: &[u8]) -> Result<(), CodecError> {
    Ok(std::fs::write(path, data)?)
}

#[cfg(test)]
mod test {
    use super::validate_paths;
    use std::path::Path;

    #[test]
    fn compression_checks_the_output_extension() {
        assert!(validate_paths("rle", Path::new("a.txt"), Path::new("b.rle"), true).is_ok());
        assert!(validate_paths("rle", Path::new("a.txt"), Path::new("b.txt"), true).is_err());
    }

    #[test]
    fn decompression_checks_the_input_extension() {
        assert!(validate_paths("huff", Path::new("a.huff"), Path::new("b.txt"), false).is_ok());
        assert!(validate_paths("huff", Path::new("a.txt"), Path::new("b.txt"), false).is_err());
    }

    #[test]
    fn in_place_operation_is_rejected() {
        assert!(validate_paths("lzw", Path::new("a.lzw"), Path::new("a.lzw"), true).is_err());
    }
}
