/// Incremental UTF-8 decoder for byte chunks arriving off a stream.
///
/// The transport chunks bytes with no regard for character boundaries, so a
/// multi-byte sequence may be split across two chunks. An incomplete tail is
/// carried into the next `decode` call; genuinely invalid bytes decode to
/// U+FFFD.
#[derive(Debug, Default)]
pub struct Utf8ChunkDecoder {
    carry: Vec<u8>,
}

impl Utf8ChunkDecoder {
    /// Decodes one chunk, including any bytes carried from the previous one.
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        let mut buf = std::mem::take(&mut self.carry);
        buf.extend_from_slice(bytes);

        let mut out = String::new();
        let mut rest: &[u8] = &buf;

        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    return out;
                }
                Err(error) => {
                    let valid_up_to = error.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&rest[..valid_up_to]));

                    match error.error_len() {
                        Some(invalid_len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &rest[valid_up_to + invalid_len..];
                        }
                        None => {
                            // Incomplete sequence at the end; wait for the
                            // next chunk.
                            self.carry = rest[valid_up_to..].to_vec();
                            return out;
                        }
                    }
                }
            }
        }
    }

    /// Flushes a held incomplete tail at end-of-stream, lossily.
    pub fn finish(&mut self) -> String {
        let carry = std::mem::take(&mut self.carry);
        if carry.is_empty() {
            String::new()
        } else {
            char::REPLACEMENT_CHARACTER.to_string()
        }
    }
}
