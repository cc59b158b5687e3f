//! The declaration and type model.
//!
//! Entities are build-then-render: mutate freely through the add-style
//! methods, then call `generate` once. Nothing here performs I/O; all
//! rendering goes through the [`Emitter`](crate::Emitter).

mod decls;
mod package;
mod types;

pub use decls::{Binding, Decl, Fragment, Method, TypeDecl};
pub use package::{File, GENERATED_FILE_MARKER, Import, Package};
pub use types::{NamedType, StructField, StructType, Type};
