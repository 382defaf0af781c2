//! Primitive operation plans.
//!
//! A [`Plan`] is the ordered list of primitives the resolver decided on.
//! Applying it replays each primitive through [`StackOps`], one call per
//! op, so host side effects fire once per pop.

use navstack_stack::StackOps;
use navstack_types::{EntryContext, Params};
use std::fmt;

/// One primitive stack mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum StackOp {
    Push {
        name: String,
        params: Params,
        context: Option<EntryContext>,
    },
    Pop,
    Replace {
        name: String,
        params: Params,
        context: Option<EntryContext>,
    },
}

impl StackOp {
    /// Issues this primitive against `stack`.
    pub fn apply_to<S: StackOps + ?Sized>(self, stack: &mut S) {
        match self {
            Self::Push {
                name,
                params,
                context,
            } => stack.push(name, params, context),
            Self::Pop => stack.pop(),
            Self::Replace {
                name,
                params,
                context,
            } => stack.replace(name, params, context),
        }
    }
}

impl fmt::Display for StackOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push { name, .. } => write!(f, "push({name})"),
            Self::Pop => f.write_str("pop"),
            Self::Replace { name, .. } => write!(f, "replace({name})"),
        }
    }
}

/// An ordered sequence of primitives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    ops: Vec<StackOp>,
}

impl Plan {
    pub(crate) fn new(ops: Vec<StackOp>) -> Self {
        Self { ops }
    }

    #[must_use]
    pub fn ops(&self) -> &[StackOp] {
        &self.ops
    }

    /// Number of pops in the plan.
    #[must_use]
    pub fn pops(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, StackOp::Pop)).count()
    }

    /// The final push or replace, which every plan ends with.
    #[must_use]
    pub fn committed(&self) -> Option<&StackOp> {
        self.ops.last()
    }

    /// Issues every primitive against `stack`, in order.
    pub fn apply<S: StackOps + ?Sized>(&self, stack: &mut S) {
        for op in &self.ops {
            op.clone().apply_to(stack);
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for op in &self.ops {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{op}")?;
            first = false;
        }
        Ok(())
    }
}
