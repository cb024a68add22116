//! Scope checking and type inference.
//!
//! Visits each class once after expansion. Scope checking and
//! inference run together because inference depends on the bindings
//! in scope: attributes land in the base frame before any method body
//! is visited, and each method body, `let`, and `case` branch gets
//! its own frame. Every expression's `inferred_type` slot is written
//! here, children before parents.

use coolc_ast::{
    AttrDecl, BOOL, ClassDecl, Expr, ExprKind, Feature, INT, MethodDecl, OBJECT, SELF, SELF_TYPE,
    STRING,
};
use indexmap::IndexSet;

use crate::error::SemantError;
use crate::scope::VariableScope;
use crate::typectx::TypeContext;

/// Scope-check `class` and decorate every expression in place.
///
/// Attributes are processed first: every one is bound into the base
/// frame (and its initializer inferred) before any method body runs,
/// so bodies see all attributes regardless of declaration order.
pub fn infer_class(class: &mut ClassDecl, ctx: &TypeContext) -> Result<(), SemantError> {
    let mut inferencer = Inferencer {
        ctx,
        class_name: class.name.clone(),
        scope: VariableScope::new(),
    };

    let mut attrs_seen = IndexSet::new();
    for feature in &mut class.features {
        if let Feature::Attr(attr) = feature {
            inferencer.infer_attribute(attr, &mut attrs_seen)?;
        }
    }

    let mut methods_seen = IndexSet::new();
    for feature in &mut class.features {
        if let Feature::Method(method) = feature {
            inferencer.infer_method(method, &mut methods_seen)?;
        }
    }
    Ok(())
}

struct Inferencer<'a> {
    ctx: &'a TypeContext,
    class_name: String,
    scope: VariableScope,
}

impl Inferencer<'_> {
    fn infer_attribute(
        &mut self,
        attr: &mut AttrDecl,
        seen: &mut IndexSet<String>,
    ) -> Result<(), SemantError> {
        if !seen.insert(attr.name.clone()) {
            return Err(SemantError::DuplicateAttribute {
                class: self.class_name.clone(),
                attr: attr.name.clone(),
            });
        }
        // The attribute is in scope for its own initializer.
        let declared = self.resolve_self_type(&attr.declared_type).to_string();
        self.scope.insert(&attr.name, declared);
        if let Some(init) = &mut attr.init {
            self.infer_expr(init)?;
        }
        Ok(())
    }

    fn infer_method(
        &mut self,
        method: &mut MethodDecl,
        seen: &mut IndexSet<String>,
    ) -> Result<(), SemantError> {
        if !seen.insert(method.name.clone()) {
            return Err(SemantError::DuplicateMethod {
                class: self.class_name.clone(),
                method: method.name.clone(),
            });
        }

        self.with_frame(|this| {
            let mut formals_seen = IndexSet::new();
            for formal in &method.formals {
                if !formals_seen.insert(formal.name.clone()) {
                    return Err(SemantError::DuplicateFormal {
                        method: method.name.clone(),
                        formal: formal.name.clone(),
                    });
                }
                this.scope.insert(&formal.name, formal.declared_type.clone());
            }
            if let Some(body) = &mut method.body {
                this.infer_expr(body)?;
            }
            Ok(())
        })
    }

    /// Infer `expr` and all of its children, writing each node's
    /// `inferred_type` slot. Returns the type of `expr`.
    fn infer_expr(&mut self, expr: &mut Expr) -> Result<String, SemantError> {
        let inferred = match &mut expr.kind {
            ExprKind::IntLit { .. } => INT.to_string(),
            ExprKind::StrLit { .. } => STRING.to_string(),
            ExprKind::BoolLit { .. } => BOOL.to_string(),

            ExprKind::ObjectRef { name } => {
                if name.as_str() == SELF {
                    self.class_name.clone()
                } else {
                    self.scope
                        .lookup(name)
                        .ok_or_else(|| SemantError::VariableNotInScope(name.clone()))?
                        .to_string()
                }
            }

            ExprKind::New { class_name } => self.resolve_self_type(class_name).to_string(),

            ExprKind::IsVoid { expr } | ExprKind::Not { expr } => {
                self.infer_expr(expr)?;
                BOOL.to_string()
            }

            ExprKind::Neg { expr } => {
                self.infer_expr(expr)?;
                INT.to_string()
            }

            ExprKind::Eq { lhs, rhs } | ExprKind::Lt { lhs, rhs } | ExprKind::Le { lhs, rhs } => {
                self.infer_expr(lhs)?;
                self.infer_expr(rhs)?;
                BOOL.to_string()
            }

            ExprKind::Plus { lhs, rhs }
            | ExprKind::Sub { lhs, rhs }
            | ExprKind::Mult { lhs, rhs }
            | ExprKind::Div { lhs, rhs } => {
                self.infer_expr(lhs)?;
                self.infer_expr(rhs)?;
                INT.to_string()
            }

            ExprKind::While { predicate, body } => {
                self.infer_expr(predicate)?;
                self.infer_expr(body)?;
                OBJECT.to_string()
            }

            ExprKind::Block { body } => {
                let mut last = OBJECT.to_string();
                for item in body.iter_mut() {
                    last = self.infer_expr(item)?;
                }
                last
            }

            // An assignment has the type of its right-hand side.
            ExprKind::Assign { target, value } => {
                self.infer_expr(target)?;
                self.infer_expr(value)?
            }

            ExprKind::Let {
                name,
                declared_type,
                init,
                body,
            } => {
                let binding = self.resolve_self_type(declared_type).to_string();
                self.with_frame(|this| {
                    this.scope.insert(name, binding);
                    if let Some(init) = init {
                        this.infer_expr(init)?;
                    }
                    this.infer_expr(body)
                })?
            }

            ExprKind::If {
                predicate,
                then_branch,
                else_branch,
            } => {
                self.infer_expr(predicate)?;
                let then_ty = self.infer_expr(then_branch)?;
                let else_ty = self.infer_expr(else_branch)?;
                self.ctx.lca(&then_ty, &else_ty)
            }

            ExprKind::Case {
                scrutinee,
                branches,
            } => {
                self.infer_expr(scrutinee)?;
                let mut joined: Option<String> = None;
                for branch in branches.iter_mut() {
                    let binding = self.resolve_self_type(&branch.declared_type).to_string();
                    let ty = self.with_frame(|this| {
                        this.scope.insert(&branch.name, binding);
                        this.infer_expr(&mut branch.body)
                    })?;
                    joined = Some(match joined {
                        Some(acc) => self.ctx.lca(&acc, &ty),
                        None => ty,
                    });
                }
                joined.unwrap_or_else(|| OBJECT.to_string())
            }

            ExprKind::Dispatch { recv, method, args } => {
                let recv_class = match recv {
                    Some(recv) => self.infer_expr(recv)?,
                    // bare call: the implicit receiver is `self`
                    None => self.class_name.clone(),
                };
                for arg in args.iter_mut() {
                    self.infer_expr(arg)?;
                }
                self.dispatch_result(&recv_class, &recv_class, method)?
            }

            ExprKind::StaticDispatch {
                recv,
                class_name,
                method,
                args,
            } => {
                let recv_class = self.infer_expr(recv)?;
                for arg in args.iter_mut() {
                    self.infer_expr(arg)?;
                }
                self.dispatch_result(class_name, &recv_class, method)?
            }
        };

        expr.inferred_type = Some(inferred.clone());
        Ok(inferred)
    }

    /// Result type of calling `method` looked up on `lookup_class`,
    /// with a `SELF_TYPE` return resolved to `receiver_class`.
    fn dispatch_result(
        &self,
        lookup_class: &str,
        receiver_class: &str,
        method: &str,
    ) -> Result<String, SemantError> {
        let sig = self.ctx.method(lookup_class, method).ok_or_else(|| {
            SemantError::MethodNotFound {
                class: lookup_class.to_string(),
                method: method.to_string(),
            }
        })?;
        if sig.return_type == SELF_TYPE {
            Ok(receiver_class.to_string())
        } else {
            Ok(sig.return_type.clone())
        }
    }

    fn resolve_self_type<'a>(&'a self, declared: &'a str) -> &'a str {
        TypeContext::resolve_self_type(declared, &self.class_name)
    }

    /// Run `f` inside a fresh scope frame, popping it on every exit
    /// path.
    fn with_frame<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, SemantError>,
    ) -> Result<T, SemantError> {
        self.scope.push_frame();
        let result = f(self);
        self.scope.pop_frame();
        result
    }
}
