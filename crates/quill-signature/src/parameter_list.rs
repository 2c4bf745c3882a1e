//! Ordered parameter list with caller-side projection.

use crate::parameter::Parameter;

/// The parameters of one function or method, with its arity counts.
///
/// The counts are maintained by whoever builds the list; while a declaration
/// is still being parsed they may lag behind the list itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterList {
    parameters: Vec<Parameter>,
    required: usize,
    optional: usize,
}

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a finished list, deriving the counts from the parameters.
    pub fn from_parameters(parameters: Vec<Parameter>) -> Self {
        let optional = parameters.iter().filter(|p| p.is_optional()).count();
        ParameterList {
            required: parameters.len() - optional,
            optional,
            parameters,
        }
    }

    pub fn parameter_list(&self) -> &[Parameter] {
        &self.parameters
    }

    pub(crate) fn parameter_list_mut(&mut self) -> &mut [Parameter] {
        &mut self.parameters
    }

    /// Replace every parameter. Counts are left untouched.
    pub fn set_parameter_list(&mut self, parameters: Vec<Parameter>) {
        self.parameters = parameters;
    }

    pub fn append_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// The last parameter collects the remaining arguments.
    pub fn is_variadic(&self) -> bool {
        self.parameters.last().is_some_and(Parameter::is_variadic)
    }

    /// The parameter a call-site argument at `index` is checked against.
    ///
    /// A trailing variadic parameter stands for every position at or past
    /// its own; all other out-of-range positions map to nothing.
    pub fn parameter_for_caller(&self, index: usize) -> Option<Parameter> {
        if let Some(parameter) = self.parameters.get(index) {
            return Some(parameter.as_non_variadic());
        }
        self.parameters
            .last()
            .filter(|last| last.is_variadic())
            .map(Parameter::as_non_variadic)
    }

    pub fn number_of_required_parameters(&self) -> usize {
        self.required
    }

    pub fn set_number_of_required_parameters(&mut self, count: usize) {
        self.required = count;
    }

    pub fn number_of_optional_parameters(&self) -> usize {
        self.optional
    }

    pub fn set_number_of_optional_parameters(&mut self, count: usize) {
        self.optional = count;
    }

    pub fn number_of_parameters(&self) -> usize {
        self.required + self.optional
    }
}

#[cfg(test)]
#[path = "tests/parameter_list_tests.rs"]
mod tests;
