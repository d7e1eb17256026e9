//! Recursive clean-name formatting.

use crate::typename::TypeDescriptor;

/// Format a descriptor into a clean, dotted display name.
///
/// Rules, applied recursively:
///
/// 1. An unbound generic parameter contributes nothing.
/// 2. A namespace is emitted with a trailing `.` unless it equals the scope
///    it is being formatted inside, so repeated segments collapse.
/// 3. A nested type emits its declaring type first, separated by `+`; the
///    declaring type is formatted with the nested type's namespace as its
///    scope.
/// 4. A constructed generic type emits its name with any trailing arity
///    marker stripped, then `<`, its comma-joined arguments (each scoped to
///    the current type's namespace), and `>`.
/// 5. Anything else emits its simple name verbatim.
///
/// The recursion is bounded by the nesting and argument depth of the input,
/// so formatting always terminates and never fails.
///
/// # Example
///
/// ```
/// use loghub::typename::{clean_name, TypeDescriptor};
///
/// let frame = TypeDescriptor::in_namespace("app.proto", "Frame");
/// let listener = TypeDescriptor::in_namespace("app.net", "Listener")
///     .with_arguments(vec![frame]);
/// assert_eq!(clean_name(&listener), "app.net.Listener<app.proto.Frame>");
/// ```
pub fn clean_name(ty: &TypeDescriptor) -> String {
    let mut out = String::new();
    write_name(&mut out, ty, None);
    out
}

fn write_name(out: &mut String, ty: &TypeDescriptor, scope: Option<&str>) {
    if ty.is_parameter() {
        return;
    }

    if let Some(namespace) = ty.namespace() {
        if scope != Some(namespace) {
            out.push_str(namespace);
            out.push('.');
        }
    }

    if let Some(declaring) = ty.declaring() {
        write_name(out, declaring, ty.namespace());
        out.push('+');
    }

    if ty.arguments().is_empty() {
        out.push_str(ty.name());
    } else {
        out.push_str(strip_arity(ty.name()));
        out.push('<');
        for (i, argument) in ty.arguments().iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            write_name(out, argument, ty.namespace());
        }
        out.push('>');
    }
}

/// Strip a trailing backtick arity marker (`` List`1 `` becomes `List`).
///
/// A marker at position zero is not a marker; the name stays intact.
fn strip_arity(name: &str) -> &str {
    match name.find('`') {
        Some(i) if i > 0 => &name[..i],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_in_namespace() {
        let ty = TypeDescriptor::in_namespace("app", "Widget");
        assert_eq!(clean_name(&ty), "app.Widget");
    }

    #[test]
    fn test_plain_name_without_namespace() {
        let ty = TypeDescriptor::new("u64");
        assert_eq!(clean_name(&ty), "u64");
    }

    #[test]
    fn test_nested_type_collapses_shared_namespace() {
        let ty = TypeDescriptor::in_namespace("app", "Inner")
            .nested_in(TypeDescriptor::in_namespace("app", "Outer"));
        assert_eq!(clean_name(&ty), "app.Outer+Inner");
    }

    #[test]
    fn test_nested_type_keeps_foreign_namespace() {
        let ty = TypeDescriptor::in_namespace("app", "Inner")
            .nested_in(TypeDescriptor::in_namespace("other", "Outer"));
        assert_eq!(clean_name(&ty), "app.other.Outer+Inner");
    }

    #[test]
    fn test_generic_argument_with_foreign_namespace() {
        let ty = TypeDescriptor::in_namespace("app.net", "Listener")
            .with_arguments(vec![TypeDescriptor::in_namespace("app.proto", "Frame")]);
        assert_eq!(clean_name(&ty), "app.net.Listener<app.proto.Frame>");
    }

    #[test]
    fn test_generic_argument_in_same_namespace_collapses() {
        let ty = TypeDescriptor::in_namespace("app", "List")
            .with_arguments(vec![TypeDescriptor::in_namespace("app", "Item")]);
        assert_eq!(clean_name(&ty), "app.List<Item>");
    }

    #[test]
    fn test_multiple_arguments_are_comma_joined() {
        let ty = TypeDescriptor::in_namespace("app", "Map").with_arguments(vec![
            TypeDescriptor::new("u32"),
            TypeDescriptor::in_namespace("other", "Value"),
        ]);
        assert_eq!(clean_name(&ty), "app.Map<u32,other.Value>");
    }

    #[test]
    fn test_unbound_parameter_formats_to_empty() {
        assert_eq!(clean_name(&TypeDescriptor::parameter("T")), "");
    }

    #[test]
    fn test_unbound_parameter_as_argument() {
        let ty = TypeDescriptor::in_namespace("app", "List")
            .with_arguments(vec![TypeDescriptor::parameter("T")]);
        assert_eq!(clean_name(&ty), "app.List<>");
    }

    #[test]
    fn test_arity_marker_is_stripped() {
        let ty = TypeDescriptor::in_namespace("app", "List`1")
            .with_arguments(vec![TypeDescriptor::new("u8")]);
        assert_eq!(clean_name(&ty), "app.List<u8>");
    }

    #[test]
    fn test_leading_backtick_is_not_a_marker() {
        assert_eq!(strip_arity("`odd"), "`odd");
        assert_eq!(strip_arity("List`2"), "List");
        assert_eq!(strip_arity("Plain"), "Plain");
    }

    #[test]
    fn test_generic_nested_type() {
        let ty = TypeDescriptor::in_namespace("app", "Inner")
            .nested_in(TypeDescriptor::in_namespace("app", "Outer"))
            .with_arguments(vec![TypeDescriptor::in_namespace("app.args", "Arg")]);
        assert_eq!(clean_name(&ty), "app.Outer+Inner<app.args.Arg>");
    }

    #[test]
    fn test_deeply_nested_chain() {
        let ty = TypeDescriptor::in_namespace("app", "C")
            .nested_in(
                TypeDescriptor::in_namespace("app", "B")
                    .nested_in(TypeDescriptor::in_namespace("app", "A")),
            );
        assert_eq!(clean_name(&ty), "app.A+B+C");
    }
}
