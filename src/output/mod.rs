//! Output encoders (PNG file/bytes, CGI response).

mod cgi;
mod png_encoder;

pub use cgi::CgiEmitter;
pub use png_encoder::PngEncoder;
