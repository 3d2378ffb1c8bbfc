//! Identifier masking for log output

/// Mask an identifier for logging (e.g. `a****e@example.com`)
///
/// Email addresses keep their first and last local-part characters and the
/// full domain. Anything else keeps only its last four characters.
pub fn mask_identifier(identifier: &str) -> String {
    if let Some((local, domain)) = identifier.split_once('@') {
        let chars: Vec<char> = local.chars().collect();
        let masked_local = match chars.len() {
            0 => String::new(),
            1 | 2 => "*".repeat(chars.len()),
            n => format!("{}{}{}", chars[0], "*".repeat(n - 2), chars[n - 1]),
        };
        return format!("{}@{}", masked_local, domain);
    }

    let chars: Vec<char> = identifier.chars().collect();
    if chars.len() <= 4 {
        "****".to_string()
    } else {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("***{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_identifier("alice@example.com"), "a***e@example.com");
        assert_eq!(mask_identifier("ab@x.com"), "**@x.com");
        assert_eq!(mask_identifier("a@x.com"), "*@x.com");
    }

    #[test]
    fn test_mask_other_identifiers() {
        assert_eq!(mask_identifier("user-123456"), "***3456");
        assert_eq!(mask_identifier("abc"), "****");
    }

    #[test]
    fn test_mask_handles_multibyte_characters() {
        assert_eq!(mask_identifier("élodie@exemple.fr"), "é****e@exemple.fr");
    }
}
