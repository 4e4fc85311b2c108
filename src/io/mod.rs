mod errors;
mod loader;
#[cfg(test)]
mod tests;

pub use errors::LoadError;
pub use loader::{load_history, read_csv, read_json, InputFormat};
