//! The closed set of Go type variants and their composition rules.

use std::rc::Rc;

use crate::emitter::Emitter;
use crate::literal::Literal;
use crate::model::decls::TypeDecl;
use crate::model::package::Package;

/// A Go type expression.
///
/// Variants compose recursively with no depth limit; inner types are
/// required at construction, so an incomplete composition cannot be
/// represented. Each variant writes exactly its own textual form and
/// recurses into inner types; none of them emit newlines or comments
/// except [`StructType`], whose body is inherently multi-line.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Opaque literal type name supplied verbatim (e.g. `string`).
    Primitive(String),
    /// Opaque literal type expression rendered verbatim. Behaves like
    /// [`Type::Primitive`]; the distinction is intent only.
    CustomLiteral(String),
    /// `*T`.
    Pointer(Box<Type>),
    /// `[]T`.
    Array(Box<Type>),
    /// `map[K]V`.
    Map(Box<Type>, Box<Type>),
    /// `interface{}`, the universal type.
    EmptyInterface,
    /// The JSON `null` type. Renders as `interface{}`, same as
    /// [`Type::EmptyInterface`]; kept distinct for semantic intent.
    Null,
    /// Reference to a previously declared type alias.
    Named(NamedType),
    /// Inline struct type.
    Struct(StructType),
}

impl Type {
    /// Create a primitive type from a verbatim type name.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive(name.into())
    }

    /// Create a custom literal type from a verbatim type expression.
    pub fn custom(expr: impl Into<String>) -> Self {
        Self::CustomLiteral(expr.into())
    }

    /// Create a pointer to `inner`.
    pub fn pointer(inner: Type) -> Self {
        Self::Pointer(Box::new(inner))
    }

    /// Create a slice of `inner`.
    pub fn array(inner: Type) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Create a map from `key` to `value`.
    pub fn map(key: Type, value: Type) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    /// Create an unqualified reference to `decl`.
    pub fn named(decl: Rc<TypeDecl>) -> Self {
        Self::Named(NamedType::new(decl))
    }

    /// Whether a value of this type can be absent without a sentinel.
    pub fn is_nillable(&self) -> bool {
        match self {
            Self::Primitive(_) | Self::CustomLiteral(_) | Self::Struct(_) => false,
            Self::Pointer(_) | Self::Array(_) | Self::Map(_, _) => true,
            Self::EmptyInterface | Self::Null => true,
            Self::Named(named) => named.is_nillable(),
        }
    }

    /// Write the type expression.
    pub fn generate(&self, out: &mut Emitter) {
        match self {
            Self::Primitive(name) | Self::CustomLiteral(name) => out.print(name),
            Self::Pointer(inner) => {
                out.print("*");
                inner.generate(out);
            }
            Self::Array(inner) => {
                out.print("[]");
                inner.generate(out);
            }
            Self::Map(key, value) => {
                out.print("map[");
                key.generate(out);
                out.print("]");
                value.generate(out);
            }
            Self::EmptyInterface | Self::Null => out.print("interface{}"),
            Self::Named(named) => named.generate(out),
            Self::Struct(s) => s.generate(out),
        }
    }
}

/// A reference to a declared type alias, optionally qualified by a
/// package short name.
///
/// The handle to the declaration is a shared [`Rc`]; the reference
/// does not own the declaration, and nillability is inherited from
/// the declaration's underlying type.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedType {
    qualifier: Option<String>,
    decl: Rc<TypeDecl>,
}

impl NamedType {
    /// Reference `decl` from within its own package.
    pub fn new(decl: Rc<TypeDecl>) -> Self {
        Self {
            qualifier: None,
            decl,
        }
    }

    /// Reference `decl` qualified by `package`'s short name.
    pub fn qualified(package: &Package, decl: Rc<TypeDecl>) -> Self {
        Self {
            qualifier: Some(package.name().to_string()),
            decl,
        }
    }

    /// Name of the referenced declaration.
    pub fn name(&self) -> &str {
        &self.decl.name
    }

    /// The referenced declaration.
    pub fn decl(&self) -> &TypeDecl {
        &self.decl
    }

    fn is_nillable(&self) -> bool {
        self.decl.ty.is_nillable()
    }

    fn generate(&self, out: &mut Emitter) {
        if let Some(qualifier) = &self.qualifier {
            out.print(qualifier);
            out.print(".");
        }
        out.print(&self.decl.name);
    }
}

/// An inline `struct { ... }` type.
///
/// Fields render in insertion order, which is the declared field
/// order of the type. `required_json_fields` is carried as data for
/// the upstream schema translator and is not interpreted here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructType {
    fields: Vec<StructField>,
    required_json_fields: Vec<String>,
}

impl StructType {
    /// Create an empty struct type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, preserving insertion order.
    pub fn add_field(&mut self, field: StructField) {
        self.fields.push(field);
    }

    /// Append a field (chaining form).
    pub fn field(mut self, field: StructField) -> Self {
        self.fields.push(field);
        self
    }

    /// Record a serialized field name that must be present on
    /// deserialization.
    pub fn require_json_field(mut self, name: impl Into<String>) -> Self {
        self.required_json_fields.push(name.into());
        self
    }

    /// Declared fields in order.
    pub fn fields(&self) -> &[StructField] {
        &self.fields
    }

    /// Serialized field names required on deserialization.
    pub fn required_json_fields(&self) -> &[String] {
        &self.required_json_fields
    }

    /// Write `struct { ... }` with one field per indented line and no
    /// trailing newline after the closing brace.
    pub fn generate(&self, out: &mut Emitter) {
        out.println("struct {");
        out.indent(1);
        for field in &self.fields {
            field.generate(out);
            out.newline();
        }
        out.indent(-1);
        out.print("}");
    }
}

/// A single struct field.
///
/// `json_name` and `default_value` are carried for the upstream
/// translator; only `comment`, the name, the type, and `tags` show up
/// in the rendered field.
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub name: String,
    pub ty: Type,
    pub comment: Option<String>,
    pub tags: Option<String>,
    pub json_name: Option<String>,
    pub default_value: Option<Literal>,
}

impl StructField {
    /// Create a field with the given name and type.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            comment: None,
            tags: None,
            json_name: None,
            default_value: None,
        }
    }

    /// Attach a doc comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Attach a raw tag string, rendered as a backtick suffix.
    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Record the serialized name override.
    pub fn json_name(mut self, name: impl Into<String>) -> Self {
        self.json_name = Some(name.into());
        self
    }

    /// Record the default value.
    pub fn default_value(mut self, value: impl Into<Literal>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Write the field line without a trailing newline.
    pub fn generate(&self, out: &mut Emitter) {
        out.comment(self.comment.as_deref().unwrap_or(""));
        out.print(&self.name);
        out.print(" ");
        self.ty.generate(out);
        if let Some(tags) = &self.tags {
            out.print(&format!(" `{tags}`"));
        }
    }
}
