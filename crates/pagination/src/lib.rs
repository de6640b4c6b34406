use tactile_types::CounterGroup;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error(
        "Page counter '{group}' cannot be re-anchored to {attempted}: already advanced to {current}."
    )]
    PolicyViolation {
        group: CounterGroup,
        attempted: u32,
        current: u32,
    },
    #[error("Unknown layout master '{0}'.")]
    UnknownMaster(String),
}

pub mod counter;
pub mod resolver;
pub mod sequence;

pub use self::counter::PageCounterRegistry;
pub use self::resolver::{
    BreakDecision, BreakResolver, ResolvedSequence, SequenceRun, TransitionDelta, resolve_break,
};
pub use self::sequence::{SequenceBreak, SequenceProperties, SequencePropertiesBuilder};
