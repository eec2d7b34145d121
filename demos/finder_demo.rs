//! Finder argument-builder walkthrough
//!
//! Builds the arguments for a couple of representative searches and prints
//! the parameter mapping a transport would send.
//!
//! Run with: cargo run --example `finder_demo`
//! Debug: `RUST_LOG=debug` cargo run --example `finder_demo`

use finder_args::{FilterType, FinderArgs};

fn main() {
    env_logger::init();

    // A fresh search, defaults untouched apart from the country restriction.
    let mut search = FinderArgs::new("221B Baker Street");
    search.set_countries(["GB"]).set_limit(5);
    print_params("initial search", &search);

    // Refining a previous result: narrow into its container and only accept
    // full addresses.
    let mut refine = FinderArgs::new("221B");
    refine
        .set_container("GB|RM|ENG|NW16XE")
        .set_language("en-gb")
        .add_type_filter(FilterType::Address);
    print_params("container refinement", &refine);
}

fn print_params(label: &str, args: &FinderArgs) {
    println!("--- {label} ---");
    for (key, value) in args.to_params() {
        println!("{key}={value}");
    }
    println!();
}
