//! Line-oriented tag scanner.

use crate::{Comment, CommentParameter};
use quill_types::UnionType;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TagKind {
    Param,
    Return,
}

impl TagKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "param" => Some(TagKind::Param),
            "return" | "returns" => Some(TagKind::Return),
            _ => None,
        }
    }
}

pub(crate) fn parse_comment(text: &str) -> Comment {
    let body = text.trim();
    let body = body.strip_prefix("/**").unwrap_or(body);
    let body = body.strip_suffix("*/").unwrap_or(body);

    let mut comment = Comment::empty();
    // Tags may span several lines; accumulate until the next tag.
    let mut pending: Option<(TagKind, String)> = None;

    for line in body.lines() {
        let trimmed = line.trim().trim_start_matches('*').trim();
        let effective = skip_backtick_quoted(trimmed);

        if let Some(tag_text) = effective.strip_prefix('@') {
            if let Some((kind, text)) = pending.take() {
                apply_tag(&mut comment, kind, &text);
            }
            let tag_end = tag_text
                .find(char::is_whitespace)
                .unwrap_or(tag_text.len());
            if let Some(kind) = TagKind::from_tag(&tag_text[..tag_end]) {
                pending = Some((kind, tag_text[tag_end..].to_string()));
            }
        } else if let Some((_, text)) = pending.as_mut() {
            text.push(' ');
            text.push_str(trimmed);
        }
    }
    if let Some((kind, text)) = pending.take() {
        apply_tag(&mut comment, kind, &text);
    }
    comment
}

fn apply_tag(comment: &mut Comment, kind: TagKind, text: &str) {
    match kind {
        TagKind::Param => {
            let parameter = parse_param_tag(text);
            trace!(param = parameter.name(), ty = %parameter.union_type(), "@param");
            let name = parameter.name().to_string();
            if !comment.add_parameter(parameter) && !name.is_empty() {
                debug!(param = %name, "repeated @param only kept by position");
            }
        }
        TagKind::Return => {
            if comment.return_type().is_some() {
                debug!("duplicate @return ignored");
                return;
            }
            let Some((type_expr, _)) = split_type_expr(text.trim()) else {
                return;
            };
            match UnionType::parse(type_expr) {
                Ok(union_type) => comment.set_return_type(union_type),
                Err(err) => debug!(%err, "unparseable @return type"),
            }
        }
    }
}

/// Parse the text following `@param`: `[<type>] [...][$]name [description]`.
///
/// A missing or unparseable type yields an empty type. A tag without a usable
/// name yields an unnamed annotation that only holds its position.
fn parse_param_tag(text: &str) -> CommentParameter {
    let unnamed = || CommentParameter::new("", UnionType::empty(), false);
    let Some((first, rest)) = split_type_expr(text.trim()) else {
        debug!("empty @param holds its position only");
        return unnamed();
    };

    // `@param $x` and `@param ...$xs` carry no type.
    let (type_expr, raw_name) = if is_name_token(first) {
        (None, first)
    } else {
        (Some(first), rest.split_whitespace().next().unwrap_or(""))
    };

    let (type_expr, mut is_variadic) = match type_expr {
        Some(t) => match t.strip_suffix("...") {
            Some(stripped) => (Some(stripped), true),
            None => (Some(t), false),
        },
        None => (None, false),
    };

    // `[name]` and `[name=default]` mark optional parameters.
    let name = raw_name.trim_start_matches('[');
    let name = name.split('=').next().unwrap_or(name);
    let name = name.trim_end_matches(']').trim_matches('`');
    let name = name.trim_start_matches('&');
    let name = match name.strip_prefix("...") {
        Some(rest) => {
            is_variadic = true;
            rest
        }
        None => name,
    };
    let name = name.trim_start_matches('&').trim_start_matches('$');
    if !is_identifier(name) {
        debug!(text, "@param without a valid name holds its position only");
        return unnamed();
    }

    let union_type = match type_expr.map(UnionType::parse) {
        Some(Ok(union_type)) => union_type,
        Some(Err(err)) => {
            debug!(%err, param = name, "unparseable @param type, kept untyped");
            UnionType::empty()
        }
        None => {
            trace!(param = name, "untyped @param");
            UnionType::empty()
        }
    };
    CommentParameter::new(name, union_type, is_variadic)
}

fn is_name_token(token: &str) -> bool {
    let token = token.trim_start_matches('&');
    token.starts_with('$') || token.starts_with("...")
}

/// Split a leading type expression from the rest of the tag text.
///
/// Braced types (`{int|null}`) may contain spaces. Bare types end at the
/// first whitespace outside `<>` and `()`.
fn split_type_expr(text: &str) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }

    if text.starts_with('{') {
        let mut depth = 0;
        for (i, ch) in text.char_indices() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some((text[1..i].trim(), &text[i + 1..]));
                    }
                }
                _ => {}
            }
        }
        return None;
    }

    let mut depth = 0usize;
    for (i, ch) in text.char_indices() {
        match ch {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => return Some((&text[..i], &text[i..])),
            _ => {}
        }
    }
    Some((text, ""))
}

/// Skip leading backtick-quoted sections so the real tag can be detected.
fn skip_backtick_quoted(s: &str) -> &str {
    let mut rest = s;
    loop {
        rest = rest.trim_start();
        if rest.starts_with('`') {
            if let Some(end) = rest[1..].find('`') {
                rest = &rest[end + 2..];
                continue;
            }
        }
        break;
    }
    rest
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
