//! Top-level declaration variants.

use std::fmt;
use std::rc::Rc;

use crate::emitter::Emitter;
use crate::literal::Literal;
use crate::model::types::Type;

/// A name bound to a type: `type <name> <type>`.
///
/// Shared behind an [`Rc`] so [`NamedType`](crate::NamedType) can hold
/// a non-owning handle to it.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub name: String,
    pub ty: Type,
    pub comment: Option<String>,
}

impl TypeDecl {
    /// Create a type alias declaration.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            comment: None,
        }
    }

    /// Attach a doc comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    fn generate(&self, out: &mut Emitter) {
        out.comment(self.comment.as_deref().unwrap_or(""));
        out.print("type ");
        out.print(&self.name);
        out.print(" ");
        self.ty.generate(out);
        out.newline();
    }
}

/// A named value binding: `var <name> [<type>] = <value>` or the
/// `const` equivalent.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub ty: Option<Type>,
    pub value: Literal,
}

impl Binding {
    /// Create a binding with an inferred type.
    pub fn new(name: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            value: value.into(),
        }
    }

    /// Declare an explicit type.
    pub fn ty(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    fn generate(&self, keyword: &str, out: &mut Emitter) {
        out.print(keyword);
        out.print(" ");
        out.print(&self.name);
        if let Some(ty) = &self.ty {
            out.print(" ");
            ty.generate(out);
        }
        out.print(" = ");
        self.value.generate(out);
        out.newline();
    }
}

/// An opaque callback that writes arbitrary text to the emitter.
///
/// Escape hatch for declarations whose shape does not fit the
/// structured model, such as free-form function bodies. The callback
/// owns line termination.
pub struct Fragment(Box<dyn Fn(&mut Emitter)>);

impl Fragment {
    /// Wrap a render callback.
    pub fn new(render: impl Fn(&mut Emitter) + 'static) -> Self {
        Self(Box::new(render))
    }

    fn generate(&self, out: &mut Emitter) {
        (self.0)(out);
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fragment(..)")
    }
}

/// A method body callback bracketed by a leading and trailing blank
/// line, so it stays visually separated from neighbors regardless of
/// package-level spacing.
pub struct Method {
    body: Box<dyn Fn(&mut Emitter)>,
}

impl Method {
    /// Wrap a method render callback.
    pub fn new(body: impl Fn(&mut Emitter) + 'static) -> Self {
        Self {
            body: Box::new(body),
        }
    }

    fn generate(&self, out: &mut Emitter) {
        out.newline();
        (self.body)(out);
        out.newline();
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Method(..)")
    }
}

/// A top-level declaration.
///
/// Every variant can render itself; [`Decl::name`] exposes the stable
/// identifying name where one exists, used only for deterministic
/// ordering at the package level. Fragments and methods are anonymous
/// and are never reordered.
#[derive(Debug)]
pub enum Decl {
    /// `type <name> <type>`.
    TypeAlias(Rc<TypeDecl>),
    /// `var <name> [<type>] = <value>`.
    Var(Binding),
    /// `const <name> [<type>] = <value>`.
    Const(Binding),
    /// Free-form code.
    Fragment(Fragment),
    /// Free-form method, blank-line bracketed.
    Method(Method),
}

impl Decl {
    /// Create a fragment declaration from a render callback.
    pub fn fragment(render: impl Fn(&mut Emitter) + 'static) -> Self {
        Self::Fragment(Fragment::new(render))
    }

    /// Create a method declaration from a render callback.
    pub fn method(body: impl Fn(&mut Emitter) + 'static) -> Self {
        Self::Method(Method::new(body))
    }

    /// The identifying name, if this declaration has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::TypeAlias(decl) => Some(&decl.name),
            Self::Var(binding) | Self::Const(binding) => Some(&binding.name),
            Self::Fragment(_) | Self::Method(_) => None,
        }
    }

    /// Write the declaration, terminating its final line.
    pub fn generate(&self, out: &mut Emitter) {
        match self {
            Self::TypeAlias(decl) => decl.generate(out),
            Self::Var(binding) => binding.generate("var", out),
            Self::Const(binding) => binding.generate("const", out),
            Self::Fragment(fragment) => fragment.generate(out),
            Self::Method(method) => method.generate(out),
        }
    }
}
