//! The classic `strtod` demo: pull two numbers out of one string, using the
//! position where the first scan stopped as the start of the second.

use floatscan::{extract_pair, Fixed};

static ORBITS: &str = "365.24.1.1 29.53";

fn main() {
    let (year, month) = extract_pair(ORBITS);
    println!("{} {}", Fixed::new(year, 6), Fixed::new(month, 6));
    println!(
        "The moon completes {} orbits per Earth year.",
        Fixed::new(year / month, 2)
    );
}
