//! Derived boolean properties of a function or method.

use bitflags::bitflags;

bitflags! {
    /// Flags recorded while a declaration is parsed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FunctionFlags: u32 {
        /// No return type in the declaration or the doc comment.
        const RETURN_TYPE_UNDEFINED = 1 << 0;
        /// The body contains `return <expr>`.
        const HAS_RETURN = 1 << 1;
        /// The body yields.
        const HAS_YIELD = 1 << 2;
    }
}

const fn masks_are_disjoint(masks: &[u32]) -> bool {
    let mut seen = 0u32;
    let mut i = 0;
    while i < masks.len() {
        if masks[i] == 0 || seen & masks[i] != 0 {
            return false;
        }
        seen |= masks[i];
        i += 1;
    }
    true
}

// A new flag that reuses a bit fails the build here.
const _: () = assert!(masks_are_disjoint(&[
    FunctionFlags::RETURN_TYPE_UNDEFINED.bits(),
    FunctionFlags::HAS_RETURN.bits(),
    FunctionFlags::HAS_YIELD.bits(),
]));

/// Named accessors over a `FunctionFlags` set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlagStore {
    flags: FunctionFlags,
}

impl FlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the raw flag set.
    pub fn flags(&self) -> FunctionFlags {
        self.flags
    }

    fn get(&self, flag: FunctionFlags) -> bool {
        self.flags.contains(flag)
    }

    fn set(&mut self, flag: FunctionFlags, value: bool) {
        self.flags.set(flag, value);
    }

    pub fn is_return_type_undefined(&self) -> bool {
        self.get(FunctionFlags::RETURN_TYPE_UNDEFINED)
    }

    pub fn set_is_return_type_undefined(&mut self, value: bool) {
        self.set(FunctionFlags::RETURN_TYPE_UNDEFINED, value);
    }

    pub fn has_return(&self) -> bool {
        self.get(FunctionFlags::HAS_RETURN)
    }

    pub fn set_has_return(&mut self, value: bool) {
        self.set(FunctionFlags::HAS_RETURN, value);
    }

    pub fn has_yield(&self) -> bool {
        self.get(FunctionFlags::HAS_YIELD)
    }

    pub fn set_has_yield(&mut self, value: bool) {
        self.set(FunctionFlags::HAS_YIELD, value);
    }
}

#[cfg(test)]
#[path = "tests/flags_tests.rs"]
mod tests;
