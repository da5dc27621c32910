pub mod convert;
pub mod errors;
pub mod types;

pub use convert::{convert, hex_to_rgb, validate, HexColorInput};
pub use errors::{ConfigError, HexRgbError, ValidationError};
pub use types::RgbColor;

pub type Result<T> = std::result::Result<T, HexRgbError>;
