//! Loading raw sequence text from files, streams and FASTA content.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::Error;

/// File extensions accepted for sequence input, before an optional `.gz`.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["txt", "fasta", "fa", "fna"];

/// Reads UTF-8 text from a reader.
pub fn read_text<R: Read>(reader: R) -> Result<String, Error> {
    let mut bytes = Vec::new();
    BufReader::new(reader).read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|e| Error::Parse(format!("input is not valid UTF-8: {e}")))
}

/// Reads gzip-compressed UTF-8 text.
pub fn read_text_gz<R: Read>(reader: R) -> Result<String, Error> {
    read_text(GzDecoder::new(reader))
}

/// Reads a `.txt`/`.fasta` file, decompressing when the name ends in `.gz`.
pub fn read_path(path: &Path) -> Result<String, Error> {
    let gzipped = check_extension(path)?;
    let file = File::open(path)?;
    if gzipped {
        read_text_gz(file)
    } else {
        read_text(file)
    }
}

/// Validates the file name and reports whether it is gzip-compressed.
fn check_extension(path: &Path) -> Result<bool, Error> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let (stem, gzipped) = match name.strip_suffix(".gz") {
        Some(stem) => (stem, true),
        None => (name.as_str(), false),
    };

    let extension = stem.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    if !ACCEPTED_EXTENSIONS.contains(&extension) {
        return Err(Error::Format(format!(
            "unsupported input file '{}': expected one of .{} (optionally .gz)",
            path.display(),
            ACCEPTED_EXTENSIONS.join(", .")
        )));
    }
    Ok(gzipped)
}

/// Drops FASTA header lines when the content starts with `>`.
///
/// Remaining lines are joined without separators. Content that does not
/// start with a header is only trimmed.
#[must_use]
pub fn strip_fasta_headers(content: &str) -> String {
    if content.starts_with('>') {
        content
            .lines()
            .filter(|line| !line.starts_with('>'))
            .collect()
    } else {
        content.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;
    use tempfile::Builder;

    fn make_gz(content: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
        encoder.write_all(content).unwrap();
        encoder.finish().unwrap()
    }

    fn temp_file(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut f = Builder::new().suffix(suffix).tempfile().unwrap();
        f.write_all(content).unwrap();
        f
    }

    #[test]
    fn strip_single_header() {
        let fasta = ">seq1 Homo sapiens\nATGGCC\nTAA\n";
        assert_eq!(strip_fasta_headers(fasta), "ATGGCCTAA");
    }

    #[test]
    fn strip_multiple_headers() {
        let fasta = ">a\nATG\n>b\nGCC\n";
        assert_eq!(strip_fasta_headers(fasta), "ATGGCC");
    }

    #[test]
    fn plain_text_is_trimmed() {
        assert_eq!(strip_fasta_headers("  ATG GCC\n"), "ATG GCC");
        // Headers are only recognised at the very start.
        assert_eq!(strip_fasta_headers("ATG\n>x\n"), "ATG\n>x");
    }

    #[test]
    fn read_plain_text() {
        let text = read_text(std::io::Cursor::new(b"ATG\nGCC\n")).unwrap();
        assert_eq!(text, "ATG\nGCC\n");
    }

    #[test]
    fn read_invalid_utf8() {
        let err = read_text(std::io::Cursor::new(vec![0x41, 0xff, 0xfe])).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn read_gzip_text() {
        let gz = make_gz(b">seq\nATGTAA\n");
        let text = read_text_gz(std::io::Cursor::new(gz)).unwrap();
        assert_eq!(strip_fasta_headers(&text), "ATGTAA");
    }

    #[test]
    fn read_path_by_extension() {
        let txt = temp_file(".txt", b"atg gcc");
        assert_eq!(read_path(txt.path()).unwrap(), "atg gcc");

        let fasta = temp_file(".fasta", b">x\nATG\n");
        assert_eq!(read_path(fasta.path()).unwrap(), ">x\nATG\n");

        let gz = temp_file(".fa.gz", &make_gz(b"TTT"));
        assert_eq!(read_path(gz.path()).unwrap(), "TTT");
    }

    #[test]
    fn reject_unsupported_extension() {
        let f = temp_file(".csv", b"ATG");
        let err = read_path(f.path()).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
        assert!(err.to_string().contains("unsupported input file"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_path(Path::new("/nonexistent/dir/seq.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
