//! Package and file aggregation: import dedup, deterministic decl
//! ordering, and the generated-file marker.

use indexmap::IndexMap;

use crate::emitter::Emitter;
use crate::literal::quote;
use crate::model::decls::Decl;

/// Leading marker comment consumed by downstream tooling that
/// special-cases generated files. The wording is a contract; do not
/// change it casually.
pub const GENERATED_FILE_MARKER: &str = "Code generated by gogen, DO NOT EDIT.";

/// An import statement: `import [alias] "<path>"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub qualified_name: String,
    pub alias: Option<String>,
}

impl Import {
    /// Write the import on its own line.
    pub fn generate(&self, out: &mut Emitter) {
        match &self.alias {
            Some(alias) => {
                out.println(&format!("import {alias} {}", quote(&self.qualified_name)));
            }
            None => out.println(&format!("import {}", quote(&self.qualified_name))),
        }
    }
}

/// A `package <name>; <body>` with its imports and declarations.
#[derive(Debug, Default)]
pub struct Package {
    qualified_name: String,
    comment: Option<String>,
    decls: Vec<Decl>,
    imports: IndexMap<String, Import>,
}

impl Package {
    /// Create an empty package with the given qualified name.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            comment: None,
            decls: Vec::new(),
            imports: IndexMap::new(),
        }
    }

    /// Attach a package doc comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Append a declaration. No deduplication: callers may add several
    /// anonymous fragments or methods.
    pub fn add_decl(&mut self, decl: Decl) {
        self.decls.push(decl);
    }

    /// Add an import unless the path is already present. Duplicates
    /// are silently dropped and the first alias wins; an empty alias
    /// counts as no alias.
    pub fn add_import(&mut self, qualified_name: impl Into<String>, alias: Option<String>) {
        let qualified_name = qualified_name.into();
        if !self.imports.contains_key(&qualified_name) {
            let import = Import {
                qualified_name: qualified_name.clone(),
                alias: alias.filter(|a| !a.is_empty()),
            };
            self.imports.insert(qualified_name, import);
        }
    }

    /// Short package identifier: the substring after the last `/`, or
    /// the whole qualified name if there is no separator.
    pub fn name(&self) -> &str {
        match self.qualified_name.rfind('/') {
            Some(i) if i + 1 < self.qualified_name.len() => &self.qualified_name[i + 1..],
            _ => &self.qualified_name,
        }
    }

    /// Declarations in insertion order.
    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }

    /// Imports in insertion order, deduplicated by path.
    pub fn imports(&self) -> impl Iterator<Item = &Import> {
        self.imports.values()
    }

    /// Write the package clause, imports, and declarations.
    ///
    /// Declarations render in sorted order with exactly one blank line
    /// between consecutive ones and none before the first.
    pub fn generate(&self, out: &mut Emitter) {
        out.comment(self.comment.as_deref().unwrap_or(""));
        out.print("package ");
        out.println(self.name());
        for import in self.imports.values() {
            import.generate(out);
        }
        out.newline();
        for (i, index) in self.render_order().into_iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            self.decls[index].generate(out);
        }
    }

    /// Deterministic declaration order: named declarations are sorted
    /// ascending by name among themselves (ties broken by insertion
    /// order) and placed back into the positions named declarations
    /// occupied; anonymous declarations keep their exact positions.
    fn render_order(&self) -> Vec<usize> {
        let named_slots: Vec<usize> = (0..self.decls.len())
            .filter(|&i| self.decls[i].name().is_some())
            .collect();
        let mut sorted_named = named_slots.clone();
        sorted_named.sort_by(|&a, &b| {
            self.decls[a]
                .name()
                .cmp(&self.decls[b].name())
                .then(a.cmp(&b))
        });
        let mut order: Vec<usize> = (0..self.decls.len()).collect();
        for (slot, decl_index) in named_slots.into_iter().zip(sorted_named) {
            order[slot] = decl_index;
        }
        order
    }
}

/// The root of a generated source file: a file name (informational
/// only, never written into the output) and exactly one package.
#[derive(Debug)]
pub struct File {
    pub file_name: String,
    pub package: Package,
}

impl File {
    /// Create a file holding `package`.
    pub fn new(file_name: impl Into<String>, package: Package) -> Self {
        Self {
            file_name: file_name.into(),
            package,
        }
    }

    /// Write the generated-file marker, a blank line, then the
    /// package.
    pub fn generate(&self, out: &mut Emitter) {
        out.comment(GENERATED_FILE_MARKER);
        out.newline();
        self.package.generate(out);
    }

    /// Render the file to a string with Go indentation.
    pub fn render(&self) -> String {
        let mut out = Emitter::go();
        self.generate(&mut out);
        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::model::decls::{Binding, TypeDecl};
    use crate::model::types::Type;

    fn render_package(package: &Package) -> String {
        let mut out = Emitter::go();
        package.generate(&mut out);
        out.finish()
    }

    #[test]
    fn test_short_name_derivation() {
        assert_eq!(Package::new("example.com/a/b").name(), "b");
        assert_eq!(Package::new("models").name(), "models");
        assert_eq!(Package::new("trailing/").name(), "trailing/");
    }

    #[test]
    fn test_duplicate_import_first_alias_wins() {
        let mut package = Package::new("pkg");
        package.add_import("a/b", None);
        package.add_import("a/b", Some("x".to_string()));
        let imports: Vec<&Import> = package.imports().collect();
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].alias, None);
    }

    #[test]
    fn test_import_rendering() {
        let mut out = Emitter::go();
        Import {
            qualified_name: "encoding/json".to_string(),
            alias: None,
        }
        .generate(&mut out);
        Import {
            qualified_name: "gopkg.in/yaml.v3".to_string(),
            alias: Some("yaml".to_string()),
        }
        .generate(&mut out);
        assert_eq!(
            out.finish(),
            "import \"encoding/json\"\nimport yaml \"gopkg.in/yaml.v3\"\n"
        );
    }

    #[test]
    fn test_empty_alias_counts_as_no_alias() {
        let mut package = Package::new("pkg");
        package.add_import("fmt", Some(String::new()));
        assert_eq!(package.imports().next().unwrap().alias, None);
    }

    #[test]
    fn test_named_decls_sorted_by_name() {
        let mut package = Package::new("pkg");
        package.add_decl(Decl::TypeAlias(Rc::new(TypeDecl::new(
            "Zeta",
            Type::primitive("string"),
        ))));
        package.add_decl(Decl::Var(Binding::new("alpha", 1i64)));
        package.add_decl(Decl::TypeAlias(Rc::new(TypeDecl::new(
            "Mid",
            Type::primitive("int"),
        ))));
        let rendered = render_package(&package);
        let zeta = rendered.find("type Zeta").unwrap();
        let alpha = rendered.find("var alpha").unwrap();
        let mid = rendered.find("type Mid").unwrap();
        // Byte order: capitals sort before lowercase.
        assert!(mid < zeta);
        assert!(zeta < alpha);
    }

    #[test]
    fn test_anonymous_decls_keep_insertion_order() {
        let mut package = Package::new("pkg");
        package.add_decl(Decl::fragment(|out| out.println("// first")));
        package.add_decl(Decl::fragment(|out| out.println("// second")));
        let rendered = render_package(&package);
        assert!(rendered.find("// first").unwrap() < rendered.find("// second").unwrap());
    }

    #[test]
    fn test_anonymous_decls_keep_position_among_named() {
        let mut package = Package::new("pkg");
        package.add_decl(Decl::TypeAlias(Rc::new(TypeDecl::new(
            "B",
            Type::primitive("string"),
        ))));
        package.add_decl(Decl::fragment(|out| out.println("// marker")));
        package.add_decl(Decl::TypeAlias(Rc::new(TypeDecl::new(
            "A",
            Type::primitive("string"),
        ))));
        let rendered = render_package(&package);
        let a = rendered.find("type A").unwrap();
        let marker = rendered.find("// marker").unwrap();
        let b = rendered.find("type B").unwrap();
        assert!(a < marker);
        assert!(marker < b);
    }

    #[test]
    fn test_blank_line_between_decls_only() {
        let mut package = Package::new("pkg");
        package.add_decl(Decl::Var(Binding::new("a", 1i64)));
        package.add_decl(Decl::Var(Binding::new("b", 2i64)));
        assert_eq!(
            render_package(&package),
            "package pkg\n\nvar a = 1\n\nvar b = 2\n"
        );
    }

    #[test]
    fn test_file_marker_and_layout() {
        let mut package = Package::new("example.com/gen/pkg");
        package.add_import("fmt", None);
        package.add_decl(Decl::TypeAlias(Rc::new(TypeDecl::new(
            "Foo",
            Type::primitive("string"),
        ))));
        let file = File::new("out.go", package);
        assert_eq!(
            file.render(),
            "// Code generated by gogen, DO NOT EDIT.\n\npackage pkg\nimport \"fmt\"\n\ntype Foo string\n"
        );
    }

    #[test]
    fn test_generate_is_idempotent() {
        let mut package = Package::new("pkg");
        package.add_decl(Decl::Var(Binding::new("x", 1i64)));
        let file = File::new("out.go", package);
        assert_eq!(file.render(), file.render());
    }
}
