// src/display.rs
// =============================================================================
// Turns check results into output for the terminal.
//
// Text mode prints one status line per URL as soon as it is known, then a
// short summary. JSON mode prints the whole batch once, in input order.
// =============================================================================

use crate::checker::CheckResult;
use anyhow::Result;

// Formats one result, e.g.
//   The status of 'https://python.org' is: "Online!" ✅
pub fn format_result(result: &CheckResult) -> String {
    if result.is_online() {
        format!("The status of '{}' is: \"Online!\" ✅", result.url)
    } else {
        format!(
            "The status of '{}' is: \"Offline?\" ❌\n  Error: \"{}\"",
            result.url,
            result.outcome.error_detail()
        )
    }
}

pub fn print_result(result: &CheckResult) {
    println!("{}", format_result(result));
}

pub fn print_summary(results: &[CheckResult]) {
    let online = results.iter().filter(|r| r.is_online()).count();

    println!();
    println!("📊 Summary:");
    println!("   ✅ Online: {}", online);
    println!("   ❌ Offline: {}", results.len() - online);
    println!("   📋 Total: {}", results.len());
}

pub fn print_json(results: &[CheckResult]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}
