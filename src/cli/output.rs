//! Plain-text output helpers for CLI commands

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:14} {}", format!("{key}:"), value);
}

/// Format a count with its percentage share
pub fn format_share(count: usize, rate: f64) -> String {
    format!("{} ({:.1}%)", count, rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(5, 0.5), "5 (50.0%)");
        assert_eq!(format_share(0, 0.0), "0 (0.0%)");
    }
}
