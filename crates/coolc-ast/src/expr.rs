//! Expression nodes.
//!
//! `Expr` wraps each tagged variant together with the `inferred_type`
//! slot so inference can decorate the tree in place with a
//! single-writer discipline: empty from the parser, written once by
//! inference, read by conformance checking.

use serde::{Deserialize, Serialize};

/// An expression node with its inferred-type slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub kind: ExprKind,
    pub inferred_type: Option<String>,
}

/// The tagged expression variants.
///
/// `Assign::target` is an `ObjectRef` node so traversals stay
/// uniform. `Dispatch::recv` of `None` encodes the parser's bare
/// self-dispatch (`f(x)`); an explicit `ObjectRef` named `self` is
/// the other encoding of the same call and behaves identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprKind {
    ObjectRef {
        name: String,
    },
    IntLit {
        value: i64,
    },
    BoolLit {
        value: bool,
    },
    StrLit {
        value: String,
    },
    Block {
        body: Vec<Expr>,
    },
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Dispatch {
        recv: Option<Box<Expr>>,
        method: String,
        args: Vec<Expr>,
    },
    StaticDispatch {
        recv: Box<Expr>,
        class_name: String,
        method: String,
        args: Vec<Expr>,
    },
    Plus {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Sub {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Mult {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Div {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Lt {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Le {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Eq {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    If {
        predicate: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    While {
        predicate: Box<Expr>,
        body: Box<Expr>,
    },
    Let {
        name: String,
        declared_type: String,
        init: Option<Box<Expr>>,
        body: Box<Expr>,
    },
    Case {
        scrutinee: Box<Expr>,
        branches: Vec<CaseBranch>,
    },
    New {
        class_name: String,
    },
    IsVoid {
        expr: Box<Expr>,
    },
    Neg {
        expr: Box<Expr>,
    },
    Not {
        expr: Box<Expr>,
    },
}

/// One `case` arm: a typed binder and its body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseBranch {
    pub name: String,
    pub declared_type: String,
    pub body: Expr,
}

impl CaseBranch {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, body: Expr) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            body,
        }
    }
}

impl Expr {
    /// Wrap a variant with an empty inferred-type slot.
    pub fn new(kind: ExprKind) -> Self {
        Self {
            kind,
            inferred_type: None,
        }
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::new(ExprKind::ObjectRef { name: name.into() })
    }

    pub fn int(value: i64) -> Self {
        Self::new(ExprKind::IntLit { value })
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(ExprKind::BoolLit { value })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(ExprKind::StrLit {
            value: value.into(),
        })
    }

    pub fn block(body: Vec<Expr>) -> Self {
        Self::new(ExprKind::Block { body })
    }

    pub fn assign(target: impl Into<String>, value: Expr) -> Self {
        Self::new(ExprKind::Assign {
            target: Box::new(Self::object(target)),
            value: Box::new(value),
        })
    }

    pub fn dispatch(recv: Expr, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::new(ExprKind::Dispatch {
            recv: Some(Box::new(recv)),
            method: method.into(),
            args,
        })
    }

    /// A bare call with the implicit `self` receiver.
    pub fn self_dispatch(method: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::new(ExprKind::Dispatch {
            recv: None,
            method: method.into(),
            args,
        })
    }

    pub fn static_dispatch(
        recv: Expr,
        class_name: impl Into<String>,
        method: impl Into<String>,
        args: Vec<Expr>,
    ) -> Self {
        Self::new(ExprKind::StaticDispatch {
            recv: Box::new(recv),
            class_name: class_name.into(),
            method: method.into(),
            args,
        })
    }

    pub fn plus(lhs: Expr, rhs: Expr) -> Self {
        Self::new(ExprKind::Plus {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Self::new(ExprKind::Sub {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn mult(lhs: Expr, rhs: Expr) -> Self {
        Self::new(ExprKind::Mult {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Self::new(ExprKind::Div {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn lt(lhs: Expr, rhs: Expr) -> Self {
        Self::new(ExprKind::Lt {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn le(lhs: Expr, rhs: Expr) -> Self {
        Self::new(ExprKind::Le {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn eq(lhs: Expr, rhs: Expr) -> Self {
        Self::new(ExprKind::Eq {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn if_then_else(predicate: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Self::new(ExprKind::If {
            predicate: Box::new(predicate),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    pub fn while_loop(predicate: Expr, body: Expr) -> Self {
        Self::new(ExprKind::While {
            predicate: Box::new(predicate),
            body: Box::new(body),
        })
    }

    pub fn let_in(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        init: Option<Expr>,
        body: Expr,
    ) -> Self {
        Self::new(ExprKind::Let {
            name: name.into(),
            declared_type: declared_type.into(),
            init: init.map(Box::new),
            body: Box::new(body),
        })
    }

    pub fn case(scrutinee: Expr, branches: Vec<CaseBranch>) -> Self {
        Self::new(ExprKind::Case {
            scrutinee: Box::new(scrutinee),
            branches,
        })
    }

    pub fn new_instance(class_name: impl Into<String>) -> Self {
        Self::new(ExprKind::New {
            class_name: class_name.into(),
        })
    }

    pub fn isvoid(expr: Expr) -> Self {
        Self::new(ExprKind::IsVoid {
            expr: Box::new(expr),
        })
    }

    pub fn neg(expr: Expr) -> Self {
        Self::new(ExprKind::Neg {
            expr: Box::new(expr),
        })
    }

    pub fn not(expr: Expr) -> Self {
        Self::new(ExprKind::Not {
            expr: Box::new(expr),
        })
    }
}
