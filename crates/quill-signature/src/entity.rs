//! Function-like entities.
//!
//! Functions and methods share no type hierarchy. Each embeds a
//! `FunctionSignature` and implements `FunctionLike`, which supplies the flag
//! and parameter-list accessors on top of it.

use crate::parameter::Parameter;
use crate::signature::FunctionSignature;
use std::borrow::Cow;

/// Capability required for flag/parameter access and for reconciliation.
pub trait FunctionLike {
    /// Unqualified name.
    fn name(&self) -> &str;

    /// Name used in logs and diagnostics.
    fn display_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name())
    }

    /// Builtin or stub-sourced; such signatures are trusted as-is.
    fn is_internal(&self) -> bool;

    fn signature(&self) -> &FunctionSignature;

    fn signature_mut(&mut self) -> &mut FunctionSignature;

    // Parameter list

    fn parameter_list(&self) -> &[Parameter] {
        self.signature().parameter_list()
    }

    fn set_parameter_list(&mut self, parameters: Vec<Parameter>) {
        self.signature_mut()
            .parameters_mut()
            .set_parameter_list(parameters);
    }

    fn append_parameter(&mut self, parameter: Parameter) {
        self.signature_mut()
            .parameters_mut()
            .append_parameter(parameter);
    }

    fn parameter_for_caller(&self, index: usize) -> Option<Parameter> {
        self.signature().parameters().parameter_for_caller(index)
    }

    fn is_variadic(&self) -> bool {
        self.signature().parameters().is_variadic()
    }

    fn number_of_required_parameters(&self) -> usize {
        self.signature().parameters().number_of_required_parameters()
    }

    fn set_number_of_required_parameters(&mut self, count: usize) {
        self.signature_mut()
            .parameters_mut()
            .set_number_of_required_parameters(count);
    }

    fn number_of_optional_parameters(&self) -> usize {
        self.signature().parameters().number_of_optional_parameters()
    }

    fn set_number_of_optional_parameters(&mut self, count: usize) {
        self.signature_mut()
            .parameters_mut()
            .set_number_of_optional_parameters(count);
    }

    fn number_of_parameters(&self) -> usize {
        self.signature().parameters().number_of_parameters()
    }

    // Flags

    fn is_return_type_undefined(&self) -> bool {
        self.signature().flags().is_return_type_undefined()
    }

    fn set_is_return_type_undefined(&mut self, value: bool) {
        self.signature_mut()
            .flags_mut()
            .set_is_return_type_undefined(value);
    }

    fn has_return(&self) -> bool {
        self.signature().flags().has_return()
    }

    fn set_has_return(&mut self, value: bool) {
        self.signature_mut().flags_mut().set_has_return(value);
    }

    fn has_yield(&self) -> bool {
        self.signature().flags().has_yield()
    }

    fn set_has_yield(&mut self, value: bool) {
        self.signature_mut().flags_mut().set_has_yield(value);
    }
}

/// A free function or closure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    name: String,
    is_internal: bool,
    signature: FunctionSignature,
}

impl Function {
    /// A user-declared function.
    pub fn new(name: impl Into<String>) -> Self {
        Function {
            name: name.into(),
            is_internal: false,
            signature: FunctionSignature::new(),
        }
    }

    /// A builtin function whose signature comes from stubs.
    pub fn internal(name: impl Into<String>) -> Self {
        Function {
            is_internal: true,
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn with_signature(mut self, signature: FunctionSignature) -> Self {
        self.signature = signature;
        self
    }
}

impl FunctionLike for Function {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_internal(&self) -> bool {
        self.is_internal
    }

    fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    fn signature_mut(&mut self) -> &mut FunctionSignature {
        &mut self.signature
    }
}

/// A method declared on a class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    class_name: String,
    name: String,
    is_internal: bool,
    is_static: bool,
    signature: FunctionSignature,
}

impl Method {
    pub fn new(class_name: impl Into<String>, name: impl Into<String>) -> Self {
        Method {
            class_name: class_name.into(),
            name: name.into(),
            is_internal: false,
            is_static: false,
            signature: FunctionSignature::new(),
        }
    }

    pub fn internal(class_name: impl Into<String>, name: impl Into<String>) -> Self {
        Method {
            is_internal: true,
            ..Self::new(class_name, name)
        }
    }

    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    #[must_use]
    pub fn with_signature(mut self, signature: FunctionSignature) -> Self {
        self.signature = signature;
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }
}

impl FunctionLike for Method {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{}::{}", self.class_name, self.name))
    }

    fn is_internal(&self) -> bool {
        self.is_internal
    }

    fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    fn signature_mut(&mut self) -> &mut FunctionSignature {
        &mut self.signature
    }
}

#[cfg(test)]
#[path = "tests/entity_tests.rs"]
mod tests;
