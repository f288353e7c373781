pub mod a_star;
pub mod common;
pub mod fifo;
pub mod priority;

pub use common::{Frontier, FrontierKind};
pub use fifo::FifoFrontier;
pub use priority::PriorityFrontier;
