/// True when the value has visible content after trimming.
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Loose email shape check: exactly one `@`, no whitespace, and a domain
/// with a non-empty label after its last dot. Intentionally permissive;
/// anything stricter belongs server-side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    if value.chars().filter(|c| *c == '@').count() != 1 {
        return false;
    }
    let (local, domain) = match value.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_values_are_not_filled() {
        assert!(!is_filled(""));
        assert!(!is_filled("   "));
        assert!(!is_filled("\n\t"));
        assert!(is_filled("  x "));
    }

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(is_valid_email("x@y.z"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("no domain@example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@.com"));
    }
}
