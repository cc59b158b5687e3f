//! JSON Schema type-name constants.
//!
//! The model layer treats type names as opaque strings; this table is
//! the collaborator that supplies them. `parent` and `nested` are
//! extension names used by schema trees that reference an enclosing or
//! embedded definition.

/// The JSON Schema `string` type.
pub const TYPE_NAME_STRING: &str = "string";
/// The JSON Schema `array` type.
pub const TYPE_NAME_ARRAY: &str = "array";
/// The JSON Schema `number` type.
pub const TYPE_NAME_NUMBER: &str = "number";
/// The JSON Schema `integer` type.
pub const TYPE_NAME_INTEGER: &str = "integer";
/// The JSON Schema `object` type.
pub const TYPE_NAME_OBJECT: &str = "object";
/// The JSON Schema `boolean` type.
pub const TYPE_NAME_BOOLEAN: &str = "boolean";
/// The JSON Schema `null` type.
pub const TYPE_NAME_NULL: &str = "null";
/// Extension: reference to the enclosing definition.
pub const TYPE_NAME_PARENT: &str = "parent";
/// Extension: reference to an embedded definition.
pub const TYPE_NAME_NESTED: &str = "nested";

/// Whether `name` maps to a non-composite Go type.
pub fn is_primitive_type(name: &str) -> bool {
    matches!(
        name,
        TYPE_NAME_STRING
            | TYPE_NAME_NUMBER
            | TYPE_NAME_INTEGER
            | TYPE_NAME_BOOLEAN
            | TYPE_NAME_NULL
            | TYPE_NAME_PARENT
    )
}
