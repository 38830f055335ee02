//! File document entities.

pub mod filter;
pub mod kind;
pub mod model;
pub mod parent;

pub use filter::FileFilter;
pub use kind::FileKind;
pub use model::FileDocument;
pub use parent::ParentRef;
