//! Dependency Graph
//!
//! Every node owns a [`DependencyTable`] describing who reads its
//! properties. An entry `deps[P] = [(Q, N), ...]` means "node N's computed
//! property Q read P during its last evaluation", so invalidating P must also
//! invalidate N.Q.
//!
//! # Design Decisions
//!
//! 1. Edges live on the node that was *read*, not on the reader. Propagation
//!    starts at the written property and only has to look at one table.
//!
//! 2. Readers are held weakly. A table never keeps a discarded child node
//!    alive; dead edges are skipped and pruned lazily.
//!
//! 3. Edges are kept in first-recorded order with set semantics on the
//!    (property, node) pair. There is no topological sort, so a diamond in
//!    the graph may re-evaluate a dependent more than once per write.

mod edge;
mod table;

pub use edge::Edge;
pub use table::DependencyTable;
