#[derive(Debug, PartialEq, Eq, clap::Parser)]
#[command(
    version,
    name = "two-sum-sorted",
    about = "Find the two one-based positions in a sorted list that sum to a target"
)]
pub struct Args {
    /// Sum the two entries must add up to
    #[arg(allow_negative_numbers = true)]
    pub target: i32,
    /// Entries, sorted in non-decreasing order
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<i32>,
}
