pub mod digest;
pub mod renderer;

pub use digest::{DigestInput, DEFAULT_ALGORITHM};
pub use renderer::{writer_for, RenderService};
