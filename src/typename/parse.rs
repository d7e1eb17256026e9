//! Parsing of `std::any::type_name` output into descriptors.

use crate::typename::format::clean_name;
use crate::typename::TypeDescriptor;

/// Build a descriptor for `T` from [`std::any::type_name`].
///
/// Path types (`a::b::C`, possibly generic) become structured descriptors
/// with a dotted namespace. Shapes without a path of their own - references,
/// raw pointers, tuples, arrays, slices, `dyn`/`impl` objects, fn pointers -
/// become leaf descriptors whose name still has every component type
/// cleaned.
///
/// Any `type_name` output parses to *something*; this never fails.
///
/// # Example
///
/// ```
/// use loghub::typename::{clean_name, descriptor_of};
///
/// let ty = descriptor_of::<Vec<u8>>();
/// assert_eq!(ty.namespace(), Some("alloc.vec"));
/// assert_eq!(ty.name(), "Vec");
/// assert_eq!(clean_name(&ty), "alloc.vec.Vec<u8>");
/// ```
pub fn descriptor_of<T: ?Sized>() -> TypeDescriptor {
    parse(std::any::type_name::<T>())
}

pub(super) fn parse(raw: &str) -> TypeDescriptor {
    let raw = raw.trim();

    if let Some(name) = non_path_name(raw) {
        return TypeDescriptor::new(name);
    }

    let (path, argument_list) = match raw.find('<') {
        Some(i) if raw.ends_with('>') => (&raw[..i], Some(&raw[i + 1..raw.len() - 1])),
        _ => (raw, None),
    };

    let descriptor = match path.rfind("::") {
        Some(i) => TypeDescriptor::in_namespace(path[..i].replace("::", "."), &path[i + 2..]),
        None => TypeDescriptor::new(path),
    };

    match argument_list {
        Some(list) => descriptor.with_arguments(
            split_top_level(list, ',').into_iter().map(parse).collect(),
        ),
        None => descriptor,
    }
}

/// Recognize type shapes that have no module path of their own.
///
/// Returns the cleaned leaf name, or `None` for ordinary path types.
fn non_path_name(raw: &str) -> Option<String> {
    const PREFIXES: [&str; 6] = ["&mut ", "&", "*const ", "*mut ", "dyn ", "impl "];
    for prefix in PREFIXES {
        if let Some(rest) = raw.strip_prefix(prefix) {
            return Some(format!("{}{}", prefix, clean_name(&parse(rest))));
        }
    }

    if let Some(inner) = raw.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        let elements: Vec<String> = split_top_level(inner, ',')
            .into_iter()
            .map(|element| clean_name(&parse(element)))
            .collect();
        return Some(format!("({})", elements.join(",")));
    }

    if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        return Some(match split_once_top_level(inner, ';') {
            Some((element, len)) => {
                format!("[{}; {}]", clean_name(&parse(element)), len.trim())
            }
            None => format!("[{}]", clean_name(&parse(inner))),
        });
    }

    // Function pointers and similar exotica stay verbatim.
    if raw.starts_with("fn(") || raw.starts_with("unsafe ") || raw.starts_with("extern ") {
        return Some(raw.to_string());
    }

    None
}

/// Split `list` on `separator` at bracket depth zero.
///
/// The `>` of an `->` return-type arrow is not a closing angle bracket.
fn split_top_level(list: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut previous = '\0';

    for (i, c) in list.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' if previous != '-' => depth = depth.saturating_sub(1),
            ')' | ']' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                let part = list[start..i].trim();
                if !part.is_empty() {
                    parts.push(part);
                }
                start = i + 1;
            }
            _ => {}
        }
        previous = c;
    }

    let tail = list[start..].trim();
    if !tail.is_empty() {
        parts.push(tail);
    }
    parts
}

fn split_once_top_level(list: &str, separator: char) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    let mut previous = '\0';

    for (i, c) in list.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' if previous != '-' => depth = depth.saturating_sub(1),
            ')' | ']' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                return Some((&list[..i], &list[i + 1..]));
            }
            _ => {}
        }
        previous = c;
    }
    None
}
