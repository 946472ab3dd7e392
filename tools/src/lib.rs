pub mod driver;

pub use driver::{run, RunOpts};
