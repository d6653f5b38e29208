use two_sum_sorted::{find, Pair};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[test]
fn scan_does_not_allocate() {
    let numbers: Vec<i32> = (0..4096).collect();

    let _profiler = dhat::Profiler::builder().testing().build();

    let hit = find(&numbers, 4094 + 4095);
    let miss = find(&numbers, -1);

    let stats = dhat::HeapStats::get();
    dhat::assert_eq!(stats.total_blocks, 0);
    dhat::assert_eq!(hit, Pair::new(4095, 4096));
    dhat::assert_eq!(miss, None::<Pair>);
}
