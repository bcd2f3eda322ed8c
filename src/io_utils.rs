//! I/O convenience helpers used by the pipeline.
//!
//! Both helpers keep the file handle local to the call so it is closed as soon as
//! the call returns, whether it succeeded or not.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open the pattern file for line-oriented reading.
pub fn open_config(path: &Path) -> io::Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

/// Read all lines from a reader, stripping `\n` and a preceding `\r`.
///
/// Lines are split on raw bytes and decoded lossily, so a stray non-UTF-8 byte
/// cannot stop the read. On an I/O error the lines read so far are returned
/// alongside the error.
pub fn read_lines<R: BufRead>(reader: R) -> (Vec<String>, Option<io::Error>) {
    let mut lines = Vec::new();
    for chunk in reader.split(b'\n') {
        match chunk {
            Ok(mut bytes) => {
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                lines.push(String::from_utf8_lossy(&bytes).into_owned());
            }
            Err(e) => return (lines, Some(e)),
        }
    }
    (lines, None)
}

/// Read a candidate file's full content.
pub fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}
