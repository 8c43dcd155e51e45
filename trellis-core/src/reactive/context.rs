//! Evaluation Context
//!
//! Each tree of nodes shares one evaluation context. It carries the tree's
//! [`Options`] and two recursion guards:
//!
//! - a stack of the computed properties currently being evaluated or
//!   propagated, used to detect a formula that (transitively) reads itself
//!   and an update that (transitively) re-enters its own propagation;
//! - a counter of nested update propagations, optionally bounded by
//!   [`Options::max_depth`].
//!
//! Both are entered through RAII guards, so the bookkeeping unwinds correctly
//! when an evaluation returns early with an error.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::Options;
use crate::error::{Error, Result};
use crate::value::Key;

/// What is running for a property.
///
/// A setter may legitimately cause its own getter to be re-evaluated (it
/// writes a property the getter reads), and propagating a property
/// re-evaluates it, so each phase is tracked as a separate frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Get,
    Set,
    Propagate,
}

/// An entry in the evaluation stack: a property on a specific node.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    node: usize,
    prop: Key,
    phase: Phase,
}

/// State shared by every node of one tree.
#[derive(Debug)]
pub(crate) struct EvaluationContext {
    options: Options,
    stack: RefCell<Vec<Frame>>,
    depth: Cell<usize>,
}

impl EvaluationContext {
    pub(crate) fn new(options: Options) -> Rc<Self> {
        Rc::new(Self {
            options,
            stack: RefCell::new(Vec::new()),
            depth: Cell::new(0),
        })
    }

    pub(crate) fn options(&self) -> &Options {
        &self.options
    }

    /// Enter `phase` for `prop` on the node identified by `node`.
    ///
    /// Fails with [`Error::Cycle`] if the same frame is already running
    /// further up the stack and cycle detection is enabled.
    pub(crate) fn enter(
        &self,
        node: usize,
        prop: &Key,
        phase: Phase,
    ) -> Result<EvaluationGuard<'_>> {
        let frame = Frame {
            node,
            prop: prop.clone(),
            phase,
        };
        if self.options.detect_cycles && self.stack.borrow().contains(&frame) {
            tracing::warn!(prop = %prop, "cyclic dependency detected");
            return Err(Error::Cycle { prop: prop.clone() });
        }
        self.stack.borrow_mut().push(frame);
        Ok(EvaluationGuard { context: self })
    }

    /// Enter one level of update propagation.
    ///
    /// Only fails when [`Options::max_depth`] is set and exceeded.
    pub(crate) fn descend(&self) -> Result<DepthGuard<'_>> {
        let depth = self.depth.get() + 1;
        if let Some(limit) = self.options.max_depth.filter(|&limit| depth > limit) {
            tracing::warn!(limit, "propagation depth exceeded");
            return Err(Error::DepthExceeded { limit });
        }
        self.depth.set(depth);
        Ok(DepthGuard { context: self })
    }

    /// Number of evaluations currently in flight.
    pub(crate) fn evaluating(&self) -> usize {
        self.stack.borrow().len()
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth.get()
    }
}

/// Pops the evaluation stack when dropped.
pub(crate) struct EvaluationGuard<'a> {
    context: &'a EvaluationContext,
}

impl Drop for EvaluationGuard<'_> {
    fn drop(&mut self) {
        self.context.stack.borrow_mut().pop();
    }
}

/// Decrements the propagation depth when dropped.
pub(crate) struct DepthGuard<'a> {
    context: &'a EvaluationContext,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        let depth = self.context.depth.get();
        self.context.depth.set(depth.saturating_sub(1));
    }
}
