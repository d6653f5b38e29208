pub mod cli;
pub mod two_pointer;

pub use two_pointer::{find, two_sum, Pair, SENTINEL};
