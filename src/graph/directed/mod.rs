mod adjacency;
pub use self::adjacency::*;
mod weighted;
pub use self::weighted::*;

#[cfg(test)]
pub use self::tests::*;
