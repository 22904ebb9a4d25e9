//! Basic usage example for fieldcheck-validator

use fieldcheck_validator::prelude::*;

fn main() -> Result<(), PatternError> {
    let mut validator = Validator::new();

    // Built-in rules
    for (value, rule) in [
        ("user@example.com", "email"),
        ("not-an-email", "email"),
        ("1234567890", "phone"),
        ("123", "phone"),
    ] {
        let ok = validator.validate(value, rule);
        println!("{rule:>11}: {value:<20} -> {}", if ok { "valid" } else { "invalid" });
    }

    // A user-added rule
    validator.add_rule("zip", r"^\d{5}$")?;
    println!("{:>11}: {:<20} -> {}", "zip", "90210", validator.validate("90210", "zip"));

    // Range and consistency checks
    validator.validate_numeric_range(150.0, 0.0, 100.0);
    validator.check_consistency("5", "5.0", "numeric");
    validator.check_consistency("5", "5.0", "quantum");

    // Everything that failed along the way
    println!("\naccumulated errors:");
    for message in validator.errors() {
        println!("  - {message}");
    }

    Ok(())
}
