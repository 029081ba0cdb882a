mod plain;
mod redundant;

pub use plain::TransitionCodec;
pub use redundant::RedundantCodec;
