#![doc = include_str!("../README.md")]

pub mod canonicalize;
pub mod ctxt;
pub mod interrupt;
pub mod nary;
pub mod order;
pub mod primitive;
pub mod step;
pub mod tree;

pub use canonicalize::{canonicalize, CanonOptions};
pub use ctxt::{Ctxt, Domain};
pub use interrupt::{CancelToken, Interrupt, Interrupted};
pub use nary::{real::RealStatus, sort::Sorted};
pub use order::simplification_order;
pub use step::{Step, StepCollector};
pub use tree::{kind::{NodeKind, Number}, NodeId, Tree};
