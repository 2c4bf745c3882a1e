//! Parameter type reconciliation.
//!
//! After a user-defined function or method has been parsed, each parameter's
//! type is assembled from three sources:
//!
//! 1. the type written in the declaration,
//! 2. the `@param` annotation in the doc comment (only if (1) is empty),
//! 3. the inferred type of the default value.
//!
//! Disagreements between the sources are reported as warnings and never stop
//! the merge. A `@param` whose variadic marker disagrees with the declaration
//! is reported even when the declared type makes the annotation's type unused.
//!
//! ## Default values
//!
//! | declared/comment type | default  | result            |
//! |-----------------------|----------|-------------------|
//! | empty                 | `null`   | empty             |
//! | `T`                   | `null`   | `T\|null`         |
//! | empty                 | `D`      | `any\|D`          |
//! | `T`                   | `D`      | `T\|D` (+ warning if `D` can't cast to `T`) |
//!
//! A null default never introduces a type on its own, and an untyped
//! parameter is never narrowed to exactly its default's type.
//!
//! Reconciliation must run exactly once per entity, after its parameter list
//! and default types are final. A second pass would widen types again.

use crate::diagnostics::{DiagnosticArg, DiagnosticSink, PendingDiagnostic};
use crate::entity::FunctionLike;
use crate::parameter::Parameter;
use quill_common::SourceSpan;
use quill_common::diagnostic_codes;
use quill_docblock::{Comment, CommentParameter};
use quill_types::{TypeAtom, UnionType};
use std::fmt;
use tracing::{debug, trace};

/// A parameter annotation taken from a doc comment.
pub trait CommentParameterInfo: fmt::Display {
    fn union_type(&self) -> &UnionType;
    fn is_variadic(&self) -> bool;
}

/// Parameter annotations of a parsed doc comment.
pub trait CommentLookup {
    type Parameter: CommentParameterInfo;

    /// Exact name match first, then the `offset`-th annotation.
    fn parameter_with_name_or_offset(&self, name: &str, offset: usize) -> Option<&Self::Parameter>;

    fn has_parameter_with_name_or_offset(&self, name: &str, offset: usize) -> bool {
        self.parameter_with_name_or_offset(name, offset).is_some()
    }
}

impl CommentParameterInfo for CommentParameter {
    fn union_type(&self) -> &UnionType {
        CommentParameter::union_type(self)
    }

    fn is_variadic(&self) -> bool {
        CommentParameter::is_variadic(self)
    }
}

impl CommentLookup for Comment {
    type Parameter = CommentParameter;

    fn parameter_with_name_or_offset(
        &self,
        name: &str,
        offset: usize,
    ) -> Option<&CommentParameter> {
        Comment::parameter_with_name_or_offset(self, name, offset)
    }
}

/// Merge doc-comment and default-value types into `entity`'s parameters.
///
/// Internal entities are left untouched. Diagnostics are anchored at
/// `declaration_site`.
#[tracing::instrument(level = "debug", skip_all, fields(entity = %entity.display_name()))]
pub fn reconcile<E, C, S>(
    entity: &mut E,
    declaration_site: &SourceSpan,
    comment: &C,
    sink: &mut S,
) where
    E: FunctionLike + ?Sized,
    C: CommentLookup + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    if entity.is_internal() {
        trace!("internal entity, signature kept as declared");
        return;
    }

    // Offsets count declared parameters only, never the caller-side
    // expansion of a trailing variadic.
    let parameters = entity.signature_mut().parameter_list_mut();
    for (offset, parameter) in parameters.iter_mut().enumerate() {
        merge_comment_type(parameter, offset, declaration_site, comment, sink);
        if parameter.has_default_value() {
            merge_default_type(parameter, declaration_site, sink);
        }
        debug!(
            offset,
            param = parameter.name(),
            ty = %parameter.union_type(),
            "parameter reconciled"
        );
    }
}

fn merge_comment_type<C, S>(
    parameter: &mut Parameter,
    offset: usize,
    declaration_site: &SourceSpan,
    comment: &C,
    sink: &mut S,
) where
    C: CommentLookup + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let Some(comment_parameter) = comment.parameter_with_name_or_offset(parameter.name(), offset)
    else {
        return;
    };

    if parameter.is_variadic() != comment_parameter.is_variadic() {
        let code = if parameter.is_variadic() {
            diagnostic_codes::TYPE_MISMATCH_VARIADIC_PARAM
        } else {
            diagnostic_codes::TYPE_MISMATCH_VARIADIC_COMMENT
        };
        sink.emit(PendingDiagnostic::new(
            code,
            declaration_site.clone(),
            vec![
                comment_parameter.to_string().into(),
                parameter.to_string().into(),
            ],
        ));
    }

    // A declared type always wins over the comment.
    if parameter.union_type().is_empty() {
        trace!(
            param = parameter.name(),
            ty = %comment_parameter.union_type(),
            "type taken from doc comment"
        );
        parameter.add_union_type(comment_parameter.union_type());
    }
}

fn merge_default_type<S>(parameter: &mut Parameter, declaration_site: &SourceSpan, sink: &mut S)
where
    S: DiagnosticSink + ?Sized,
{
    let Some(default_type) = parameter.default_value_type().cloned() else {
        return;
    };
    let default_is_null = default_type.is_type(&TypeAtom::Null);

    if !default_is_null && !default_type.can_cast_to_union_type(parameter.union_type()) {
        sink.emit(PendingDiagnostic::new(
            diagnostic_codes::TYPE_MISMATCH_DEFAULT,
            declaration_site.clone(),
            vec![
                DiagnosticArg::Type(parameter.union_type().clone()),
                parameter.name().into(),
                DiagnosticArg::Type(default_type.clone()),
            ],
        ));
    }

    if default_is_null {
        if !parameter.union_type().is_empty() {
            parameter.add_type(TypeAtom::Null);
        }
        return;
    }

    if parameter.union_type().is_empty() {
        parameter.set_union_type(UnionType::any());
    }
    parameter.add_union_type(&default_type);
}
