/// Command implementations.
pub mod export;
pub mod shade;

pub use export::FsWriter;
pub use shade::{ShadeRequest, run};
