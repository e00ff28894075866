//! Reduce a call's callee to the simple name it is matched by.
//!
//! `T(...)` resolves to `T`, `i18n.T(...)` and `app.i18n.T(...)` resolve to
//! their trailing `T`. Qualification is followed at most [`MAX_DEPTH`] levels.

use swc_ecma_ast::{Callee, Expr, MemberProp};

/// Maximum number of member accesses in a qualified callee.
pub const MAX_DEPTH: usize = 5;

/// The callee expression shapes that matter for name resolution.
#[derive(Debug, Clone, Copy)]
pub enum CalleeShape<'a> {
    /// A bare identifier: `T`
    Name(&'a str),
    /// A non-computed member access: `object.property` or `object.#property`
    Qualified {
        object: &'a Expr,
        property: &'a str,
    },
    /// Anything else: computed access, calls, `super`, optional chains, parens...
    Other,
}

impl<'a> CalleeShape<'a> {
    pub fn of(expr: &'a Expr) -> Self {
        match expr {
            Expr::Ident(ident) => CalleeShape::Name(ident.sym.as_str()),
            Expr::Member(member) => match &member.prop {
                MemberProp::Ident(prop) => CalleeShape::Qualified {
                    object: &member.obj,
                    property: prop.sym.as_str(),
                },
                MemberProp::PrivateName(prop) => CalleeShape::Qualified {
                    object: &member.obj,
                    property: prop.name.as_str(),
                },
                MemberProp::Computed(_) => CalleeShape::Other,
            },
            _ => CalleeShape::Other,
        }
    }
}

/// Resolve a call's callee to its trailing simple name.
pub fn resolve_callee(callee: &Callee) -> Option<&str> {
    match callee {
        Callee::Expr(expr) => resolve_expr(expr, 0),
        _ => None,
    }
}

/// Resolve `expr` found `depth` member accesses deep.
///
/// A qualified expression yields its property name only if its whole object
/// chain fits under [`MAX_DEPTH`]. The object's root may be any expression
/// (`this.t`, `getI18n().T`).
pub fn resolve_expr(expr: &Expr, depth: usize) -> Option<&str> {
    match CalleeShape::of(expr) {
        CalleeShape::Name(name) => Some(name),
        CalleeShape::Qualified { object, property } if depth < MAX_DEPTH => {
            if let CalleeShape::Qualified { .. } = CalleeShape::of(object) {
                resolve_expr(object, depth + 1)?;
            }
            Some(property)
        }
        CalleeShape::Qualified { .. } | CalleeShape::Other => None,
    }
}
