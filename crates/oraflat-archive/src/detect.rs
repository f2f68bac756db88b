use std::io::{self, Read, Seek};

/// Local file header, empty archive, and spanned archive signatures.
const ZIP_SIGNATURES: [[u8; 4]; 3] = [
    [0x50, 0x4B, 0x03, 0x04],
    [0x50, 0x4B, 0x05, 0x06],
    [0x50, 0x4B, 0x07, 0x08],
];

pub fn is_zip(data: &[u8]) -> bool {
    data.len() >= 4 && ZIP_SIGNATURES.iter().any(|sig| data[..4] == *sig)
}

/// Peek at the leading bytes of `reader` and rewind it.
pub fn detect_zip_from_reader<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    let mut header = [0u8; 4];
    let mut filled = 0;
    while filled < header.len() {
        match reader.read(&mut header[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    reader.rewind()?;
    Ok(is_zip(&header[..filled]))
}
