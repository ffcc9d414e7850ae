mod chain;
mod join;

pub use chain::{offset_chain, OffsetChain2D};
pub use join::{join_offset, make_offset, JoinOutcome};
