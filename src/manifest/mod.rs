/// Manifest domain layer: reading, field access, lookup.
pub mod errors;
pub mod locate;
pub mod model;
pub mod read;

pub use errors::ManifestError;
pub use locate::{Located, locate};
pub use model::DependencyEntry;
