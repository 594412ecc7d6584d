pub mod active;
pub mod config;
pub mod gate;
pub mod menu;
pub mod session;
pub mod structs;

/// Avatar initials: first letter of up to the first two words, upper-cased.
pub fn initials(name: &str) -> String {
    let out = name
        .split_whitespace()
        .take(2)
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect::<String>();
    if out.is_empty() {
        "?".to_owned()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_names() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("jane"), "J");
        assert_eq!(initials("  mary   ann smith "), "MA");
        assert_eq!(initials("élise durand"), "ÉD");
    }

    #[test]
    fn initials_placeholder() {
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
    }
}
