//! AST visitor that collects message keys from translation function calls.

use swc_common::SourceMap;
use swc_ecma_ast::{CallExpr, Expr, ExprOrSpread, Lit, Program};
use swc_ecma_visit::{Visit, VisitWith};

use super::callee::resolve_callee;
use crate::core::data::{Catalog, SourceLocation, UnresolvedCall, UnresolvedReason};

/// Walks one program and appends every new literal key to a shared catalog.
///
/// Every node is visited in document order. A call is handled before its
/// arguments, so `T("outer", T("inner"))` yields `outer` then `inner`.
pub struct KeyCollector<'a> {
    func_name: &'a str,
    file_path: &'a str,
    source_map: &'a SourceMap,
    catalog: &'a mut Catalog,
    unresolved: &'a mut Vec<UnresolvedCall>,
}

impl<'a> KeyCollector<'a> {
    pub fn new(
        func_name: &'a str,
        file_path: &'a str,
        source_map: &'a SourceMap,
        catalog: &'a mut Catalog,
        unresolved: &'a mut Vec<UnresolvedCall>,
    ) -> Self {
        Self {
            func_name,
            file_path,
            source_map,
            catalog,
            unresolved,
        }
    }

    pub fn collect(mut self, program: &Program) {
        program.visit_with(&mut self);
    }

    fn handle_call(&mut self, node: &CallExpr) {
        if resolve_callee(&node.callee) != Some(self.func_name) {
            return;
        }

        match literal_key(node.args.first()) {
            Ok(key) => {
                self.catalog.insert(key);
            }
            Err(reason) => self.record_unresolved(node, reason),
        }
    }

    fn record_unresolved(&mut self, node: &CallExpr, reason: UnresolvedReason) {
        let loc = self.source_map.lookup_char_pos(node.span.lo);
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        self.unresolved.push(UnresolvedCall {
            location: SourceLocation::new(self.file_path, loc.line, loc.col.0 + 1),
            source_line,
            reason,
        });
    }
}

impl Visit for KeyCollector<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.handle_call(node);
        node.visit_children_with(self);
    }
}

/// Extract the key from a translation call's first argument.
///
/// Only a plain string literal qualifies. The key is the literal's source
/// text minus its quotes; escapes are kept as written.
pub fn literal_key(arg: Option<&ExprOrSpread>) -> Result<&str, UnresolvedReason> {
    let Some(arg) = arg else {
        return Err(UnresolvedReason::MissingArgument);
    };
    if arg.spread.is_some() {
        return Err(UnresolvedReason::NonLiteral);
    }

    match &*arg.expr {
        Expr::Lit(Lit::Str(s)) => match &s.raw {
            Some(raw) => Ok(unquote(raw.as_str())),
            None => s.value.as_str().ok_or(UnresolvedReason::NonLiteral),
        },
        _ => Err(UnresolvedReason::NonLiteral),
    }
}

/// Strip one leading and one trailing quote (`"` or `'`) from a raw literal.
pub fn unquote(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = raw
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    raw
}
