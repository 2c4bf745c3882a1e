use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const TYPE_MISMATCH_DEFAULT: u32 = 10005;
    pub const TYPE_MISMATCH_VARIADIC_COMMENT: u32 = 10021;
    pub const TYPE_MISMATCH_VARIADIC_PARAM: u32 = 10022;
}

pub mod diagnostic_messages {
    pub const TYPE_MISMATCH_DEFAULT: &str = "Default value for {0} {1} can't be {2}";
    pub const TYPE_MISMATCH_VARIADIC_COMMENT: &str =
        "{0} is variadic in comment, but not variadic in param ({1})";
    pub const TYPE_MISMATCH_VARIADIC_PARAM: &str =
        "{0} is not variadic in comment, but variadic in param ({1})";
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::TYPE_MISMATCH_DEFAULT,
        name: "TypeMismatchDefault",
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::TYPE_MISMATCH_DEFAULT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::TYPE_MISMATCH_VARIADIC_COMMENT,
        name: "TypeMismatchVariadicComment",
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::TYPE_MISMATCH_VARIADIC_COMMENT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::TYPE_MISMATCH_VARIADIC_PARAM,
        name: "TypeMismatchVariadicParam",
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::TYPE_MISMATCH_VARIADIC_PARAM,
    },
];
