// Adapters layer: concrete implementations of the domain ports.

pub mod filesystem;
pub mod process;

pub use filesystem::LocalFileSystem;
pub use process::SystemCommandRunner;
