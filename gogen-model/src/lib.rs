//! In-memory model of Go declarations and types, with a deterministic
//! emitter that renders the model as well-formed source text.
//!
//! This crate is the generic layer under a schema-to-Go translator: it
//! guarantees output syntax, stable declaration ordering, deduplicated
//! imports, and correct type-composition semantics, and treats the
//! type names the translator supplies as opaque strings.
//!
//! # Module Organization
//!
//! - [`emitter`] - Indentation-aware text sink ([`Emitter`], [`Indent`])
//! - [`literal`] - Deterministic Go literal rendering ([`Literal`])
//! - [`model`] - Types, declarations, packages, and files
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use gogen_model::{Decl, File, Package, Type, TypeDecl};
//!
//! let mut package = Package::new("example.com/gen/models");
//! package.add_import("encoding/json", None);
//! package.add_decl(Decl::TypeAlias(Rc::new(TypeDecl::new(
//!     "UserID",
//!     Type::primitive("string"),
//! ))));
//!
//! let file = File::new("models.go", package);
//! assert!(file.render().starts_with("// Code generated by gogen, DO NOT EDIT.\n"));
//! ```

pub mod emitter;
pub mod literal;
pub mod model;

pub use emitter::{Emitter, Indent};
pub use literal::Literal;
pub use model::{
    Binding, Decl, File, Fragment, GENERATED_FILE_MARKER, Import, Method, NamedType, Package,
    StructField, StructType, Type, TypeDecl,
};
