//! The signature component embedded in every function-like entity.

use crate::flags::FlagStore;
use crate::parameter::Parameter;
use crate::parameter_list::ParameterList;

/// Flags and parameters of one function or method.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionSignature {
    flags: FlagStore,
    parameters: ParameterList,
}

impl FunctionSignature {
    pub fn new() -> Self {
        Self::default()
    }

    /// A signature for a finished parameter list, with counts derived from it.
    pub fn with_parameters(parameters: Vec<Parameter>) -> Self {
        FunctionSignature {
            flags: FlagStore::new(),
            parameters: ParameterList::from_parameters(parameters),
        }
    }

    pub fn flags(&self) -> &FlagStore {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut FlagStore {
        &mut self.flags
    }

    pub fn parameters(&self) -> &ParameterList {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut ParameterList {
        &mut self.parameters
    }

    pub fn parameter_list(&self) -> &[Parameter] {
        self.parameters.parameter_list()
    }

    pub(crate) fn parameter_list_mut(&mut self) -> &mut [Parameter] {
        self.parameters.parameter_list_mut()
    }
}
