use std::error::Error;
use subnet_mask_compare::output::report;
use subnet_mask_compare::{run_overlap_check, run_range_summary, run_reduction};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    // Positional overrides for the default file names.
    let args: Vec<String> = std::env::args().collect();
    let input = args.get(1).map(String::as_str).unwrap_or("country_90.txt");
    let remaining = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("remaining_ips.txt");
    let deleted = args.get(3).map(String::as_str).unwrap_or("deleted_ips.txt");

    let (result, skipped) =
        run_reduction(input, remaining, deleted).expect("Error reducing subnet list");
    report::print_elimination(&result, &skipped);

    // Cross-check the survivors with the independent overlap pass.
    let overlaps = run_overlap_check(remaining).expect("Error checking overlaps");
    report::print_overlaps(&overlaps);

    // Optional: summarize start,end IP ranges as minimal CIDR blocks.
    if let Some(ranges) = args.get(4).map(String::as_str) {
        let masks = args.get(5).map(String::as_str).unwrap_or("subnet_masks.txt");
        let subnets = run_range_summary(ranges, masks).expect("Error summarizing ranges");
        log::info!("# Summarized {} ranges to {}", subnets.len(), masks);
    }

    Ok(())
}
