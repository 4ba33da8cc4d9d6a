//! CGI response emitter.
//!
//! Writes the composed comic as a `cgi-bin` style HTTP response body:
//! a `Content-Type: image/png` header followed by the PNG bytes.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::output::PngEncoder;
use std::io::Write;

/// Emits a canvas as a CGI HTTP response.
pub struct CgiEmitter;

impl CgiEmitter {
    /// Write the response header and PNG body to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding or the write fails.
    pub fn write_response<W: Write>(canvas: &Canvas, mut out: W) -> Result<()> {
        let body = PngEncoder::to_bytes(canvas)?;
        out.write_all(b"Content-Type: image/png\r\n\r\n")?;
        out.write_all(&body)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Rgba;

    #[test]
    fn test_response_header_and_body() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.fill(Rgba::BLACK);

        let mut response = Vec::new();
        CgiEmitter::write_response(&canvas, &mut response).unwrap();

        let header = b"Content-Type: image/png\r\n\r\n";
        assert_eq!(&response[..header.len()], header);
        // PNG magic follows the blank line
        assert_eq!(
            &response[header.len()..header.len() + 8],
            &[137, 80, 78, 71, 13, 10, 26, 10]
        );
    }
}
