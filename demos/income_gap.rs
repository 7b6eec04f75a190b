//! Compare mean household income between two survey groups.
//!
//! Run with: `cargo run --example income_gap`

use welch_t::output::{json, terminal};
use welch_t::{Sample, WelchTTest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Synthetic survey extract: income in thousands, labeled by firearm
    // ownership, with non-responses as None.
    let records = vec![
        (Some(52.0), "owner"),
        (Some(61.0), "owner"),
        (Some(48.5), "owner"),
        (None, "owner"),
        (Some(70.2), "owner"),
        (Some(55.3), "owner"),
        (Some(66.8), "owner"),
        (Some(38.5), "non-owner"),
        (Some(45.0), "non-owner"),
        (Some(41.2), "non-owner"),
        (Some(39.9), "non-owner"),
        (None, "non-owner"),
        (Some(47.1), "non-owner"),
        (Some(36.4), "non-owner"),
        (Some(43.3), "non-owner"),
    ];

    let owners = Sample::from_labeled(records.clone(), &"owner")?;
    let non_owners = Sample::from_labeled(records, &"non-owner")?;

    let result = WelchTTest::new()
        .confidence_level(0.95)
        .compute(&owners, &non_owners)?;

    println!("{}", terminal::format_result(&result));
    println!("{}", json::to_json_pretty(&result)?);

    Ok(())
}
