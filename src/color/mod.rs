/// Color domain layer: validation, shade generation, export rendering.
pub mod errors;
pub mod hex;
pub mod shades;
pub mod template;

pub use errors::ShadeError;
pub use hex::HexColor;
pub use shades::{HslShadeGenerator, ShadeGenerator, ShadeOptions, ShadeResult};
pub use template::render_export;
