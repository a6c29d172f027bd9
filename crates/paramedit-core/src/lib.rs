pub mod types;
pub mod id;
pub mod error;
pub mod reconcile;
pub mod draft;

// Re-export commonly used types
pub use types::{Dataset, EditableRecord, Model, ParamType, ParameterDefinition, StoredValue};
pub use id::ParamId;
pub use error::{CoreError, DraftError};
pub use reconcile::reconcile;
pub use draft::{DraftValue, ParamDraft};
