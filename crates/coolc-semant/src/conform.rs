//! Declared/inferred type conformance checking.
//!
//! Re-walks the typed AST produced by inference and verifies every
//! declared type against the type inferred for its expression. Walks
//! descend into all sub-expressions; the first violation aborts.

use coolc_ast::{
    AttrDecl, BOOL, ClassDecl, Expr, ExprKind, Feature, INT, MethodDecl, OBJECT, SELF_TYPE, STRING,
};

use crate::error::SemantError;
use crate::typectx::TypeContext;

/// Check every feature of `class` against its declared types.
pub fn check_class(class: &ClassDecl, ctx: &TypeContext) -> Result<(), SemantError> {
    let checker = ConformanceChecker {
        ctx,
        class_name: &class.name,
    };
    for feature in &class.features {
        match feature {
            Feature::Attr(attr) => checker.check_attribute(attr)?,
            Feature::Method(method) => checker.check_method(method)?,
        }
    }
    Ok(())
}

/// Inferred type of a node. Inference runs first and types every
/// reachable node; `Object` covers a slot left empty.
fn expr_type(expr: &Expr) -> &str {
    expr.inferred_type.as_deref().unwrap_or(OBJECT)
}

fn is_basic(name: &str) -> bool {
    name == INT || name == BOOL || name == STRING
}

struct ConformanceChecker<'a> {
    ctx: &'a TypeContext,
    class_name: &'a str,
}

impl ConformanceChecker<'_> {
    fn check_attribute(&self, attr: &AttrDecl) -> Result<(), SemantError> {
        let Some(init) = &attr.init else {
            return Ok(());
        };
        self.check_expr(init)?;

        let declared = self.resolve_self_type(&attr.declared_type);
        let inferred = expr_type(init);
        if !self.ctx.conforms(inferred, declared) {
            return Err(SemantError::AttributeTypeMismatch {
                attr: attr.name.clone(),
                inferred: inferred.to_string(),
                declared: declared.to_string(),
            });
        }
        Ok(())
    }

    fn check_method(&self, method: &MethodDecl) -> Result<(), SemantError> {
        for formal in &method.formals {
            if formal.declared_type == SELF_TYPE {
                return Err(SemantError::FormalSelfType {
                    method: method.name.clone(),
                    formal: formal.name.clone(),
                });
            }
            if !self.ctx.contains(&formal.declared_type) {
                return Err(SemantError::FormalUnknownType {
                    method: method.name.clone(),
                    formal: formal.name.clone(),
                    declared: formal.declared_type.clone(),
                });
            }
        }

        // Built-in methods have no body; the declared signature is
        // trusted as-is.
        let Some(body) = &method.body else {
            return Ok(());
        };
        self.check_expr(body)?;

        let declared = self.resolve_self_type(&method.return_type);
        let inferred = expr_type(body);
        if !self.ctx.conforms(inferred, declared) {
            return Err(SemantError::MethodReturnMismatch {
                method: method.name.clone(),
                inferred: inferred.to_string(),
                declared: declared.to_string(),
            });
        }
        Ok(())
    }

    fn check_expr(&self, expr: &Expr) -> Result<(), SemantError> {
        match &expr.kind {
            ExprKind::ObjectRef { .. }
            | ExprKind::IntLit { .. }
            | ExprKind::BoolLit { .. }
            | ExprKind::StrLit { .. }
            | ExprKind::New { .. } => Ok(()),

            ExprKind::Block { body } => {
                for item in body {
                    self.check_expr(item)?;
                }
                Ok(())
            }

            ExprKind::Assign { target, value } => {
                self.check_expr(target)?;
                self.check_expr(value)?;
                let declared = expr_type(target);
                let inferred = expr_type(value);
                if !self.ctx.conforms(inferred, declared) {
                    let name = match &target.kind {
                        ExprKind::ObjectRef { name } => name.as_str(),
                        _ => "<target>",
                    };
                    return Err(SemantError::AssignNonConformant {
                        target: name.to_string(),
                        inferred: inferred.to_string(),
                        declared: declared.to_string(),
                    });
                }
                Ok(())
            }

            ExprKind::If {
                predicate,
                then_branch,
                else_branch,
            } => {
                self.check_expr(predicate)?;
                self.check_expr(then_branch)?;
                self.check_expr(else_branch)?;
                if expr_type(predicate) != BOOL {
                    return Err(SemantError::IfPredicateNotBool(
                        expr_type(predicate).to_string(),
                    ));
                }
                Ok(())
            }

            ExprKind::While { predicate, body } => {
                self.check_expr(predicate)?;
                self.check_expr(body)?;
                if expr_type(predicate) != BOOL {
                    return Err(SemantError::WhilePredicateNotBool(
                        expr_type(predicate).to_string(),
                    ));
                }
                Ok(())
            }

            ExprKind::Not { expr } => {
                self.check_expr(expr)?;
                if expr_type(expr) != BOOL {
                    return Err(SemantError::NotOperandNotBool(expr_type(expr).to_string()));
                }
                Ok(())
            }

            ExprKind::Neg { expr } => {
                self.check_expr(expr)?;
                if expr_type(expr) != INT {
                    return Err(SemantError::NegOperandNotInt(expr_type(expr).to_string()));
                }
                Ok(())
            }

            ExprKind::Plus { lhs, rhs }
            | ExprKind::Sub { lhs, rhs }
            | ExprKind::Mult { lhs, rhs }
            | ExprKind::Div { lhs, rhs } => {
                self.check_expr(lhs)?;
                self.check_expr(rhs)?;
                if expr_type(lhs) != INT || expr_type(rhs) != INT {
                    return Err(SemantError::ArithOperandNotInt {
                        lhs: expr_type(lhs).to_string(),
                        rhs: expr_type(rhs).to_string(),
                    });
                }
                Ok(())
            }

            ExprKind::Lt { lhs, rhs } | ExprKind::Le { lhs, rhs } => {
                self.check_expr(lhs)?;
                self.check_expr(rhs)?;
                if expr_type(lhs) != INT || expr_type(rhs) != INT {
                    return Err(SemantError::ComparisonOperandNotInt {
                        lhs: expr_type(lhs).to_string(),
                        rhs: expr_type(rhs).to_string(),
                    });
                }
                Ok(())
            }

            // Equality between values of a basic type is only defined
            // on that same type; reference types compare freely.
            ExprKind::Eq { lhs, rhs } => {
                self.check_expr(lhs)?;
                self.check_expr(rhs)?;
                let lhs_ty = expr_type(lhs);
                let rhs_ty = expr_type(rhs);
                if (is_basic(lhs_ty) || is_basic(rhs_ty)) && lhs_ty != rhs_ty {
                    return Err(SemantError::EqComparisonBasicMismatch {
                        lhs: lhs_ty.to_string(),
                        rhs: rhs_ty.to_string(),
                    });
                }
                Ok(())
            }

            ExprKind::IsVoid { expr } => self.check_expr(expr),

            ExprKind::Let {
                name,
                declared_type,
                init,
                body,
            } => {
                if let Some(init) = init {
                    self.check_expr(init)?;
                    let declared = self.resolve_self_type(declared_type);
                    let inferred = expr_type(init);
                    if !self.ctx.conforms(inferred, declared) {
                        return Err(SemantError::LetInitNonConformant {
                            name: name.clone(),
                            inferred: inferred.to_string(),
                            declared: declared.to_string(),
                        });
                    }
                }
                self.check_expr(body)
            }

            ExprKind::Case {
                scrutinee,
                branches,
            } => {
                self.check_expr(scrutinee)?;
                for branch in branches {
                    self.check_expr(&branch.body)?;
                }
                Ok(())
            }

            ExprKind::Dispatch { recv, method, args } => {
                if let Some(recv) = recv {
                    self.check_expr(recv)?;
                }
                for arg in args {
                    self.check_expr(arg)?;
                }
                let receiver_class = match recv {
                    Some(recv) => expr_type(recv).to_string(),
                    None => self.class_name.to_string(),
                };
                self.check_call(&receiver_class, method, args)
            }

            ExprKind::StaticDispatch {
                recv,
                class_name,
                method,
                args,
            } => {
                self.check_expr(recv)?;
                for arg in args {
                    self.check_expr(arg)?;
                }
                let receiver_class = expr_type(recv);
                if !self.ctx.conforms(receiver_class, class_name) {
                    return Err(SemantError::StaticDispatchNonConformant {
                        receiver: receiver_class.to_string(),
                        target: class_name.clone(),
                    });
                }
                self.check_call(class_name, method, args)
            }
        }
    }

    /// Arity and per-argument conformance against the formal types of
    /// `method` on `class`.
    fn check_call(&self, class: &str, method: &str, args: &[Expr]) -> Result<(), SemantError> {
        let sig = self
            .ctx
            .method(class, method)
            .ok_or_else(|| SemantError::MethodNotFound {
                class: class.to_string(),
                method: method.to_string(),
            })?;

        if args.len() != sig.formal_types.len() {
            return Err(SemantError::ArityMismatch {
                class: class.to_string(),
                method: method.to_string(),
                expected: sig.formal_types.len(),
                found: args.len(),
            });
        }

        for (arg, declared) in args.iter().zip(&sig.formal_types) {
            let found = expr_type(arg);
            if !self.ctx.conforms(found, declared) {
                return Err(SemantError::ArgumentNonConformant {
                    class: class.to_string(),
                    method: method.to_string(),
                    declared: declared.clone(),
                    found: found.to_string(),
                });
            }
        }
        Ok(())
    }

    fn resolve_self_type<'a>(&'a self, declared: &'a str) -> &'a str {
        TypeContext::resolve_self_type(declared, self.class_name)
    }
}
