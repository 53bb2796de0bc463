//! Price formatting helpers.

/// Render a cent amount as a dollar string, e.g. `1999` -> `"$19.99"`.
pub fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;
