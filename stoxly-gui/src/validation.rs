//! Predicates used by the login and registration forms to validate user
//! input before anything is sent to the backend.

/// Symbols accepted (and required) in passwords.
const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// A valid email has exactly one `@`, no whitespace, and a dot somewhere
/// in the domain with characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// A valid password is at least 8 characters long, contains a lowercase
/// letter, an uppercase letter, a digit and one of `@$!%*?&`, and nothing
/// outside of this character set.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c))
}

/// A valid username is 3 to 20 characters from `[A-Za-z0-9._]`.
pub fn is_valid_username(username: &str) -> bool {
    let count = username.chars().count();
    (3..=20).contains(&count)
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
}

/// A valid one-time password is exactly 6 ASCII digits.
pub fn is_valid_otp(otp: &str) -> bool {
    otp.len() == 6 && otp.chars().all(|c| c.is_ascii_digit())
}

/// A valid phone number has the E.164 shape: an optional `+`, a non-zero
/// digit, then 1 to 14 further digits.
pub fn is_valid_phone_number(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let mut chars = digits.chars();
    matches!(chars.next(), Some(c) if ('1'..='9').contains(&c))
        && (1..=14).contains(&chars.clone().count())
        && chars.all(|c| c.is_ascii_digit())
}

/// Whether the string contains anything else than whitespace.
pub fn is_non_empty(s: &str) -> bool {
    !s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("alice@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@.com"));
        assert!(!is_valid_email("alice@example."));
        assert!(!is_valid_email("al ice@example.com"));
    }

    #[test]
    fn password() {
        assert!(is_valid_password("Abcdef1!"));
        assert!(is_valid_password("Str0ng&Passw0rd"));
        // too short
        assert!(!is_valid_password("Abc1!"));
        // missing character classes
        assert!(!is_valid_password("abcdefg1!"));
        assert!(!is_valid_password("ABCDEFG1!"));
        assert!(!is_valid_password("Abcdefgh!"));
        assert!(!is_valid_password("Abcdefg1"));
        // character outside of the allowed set
        assert!(!is_valid_password("Abcdef1! "));
        assert!(!is_valid_password("Abcdef1#"));
    }

    #[test]
    fn username() {
        assert!(is_valid_username("bob"));
        assert!(is_valid_username("bob.the_builder42"));
        assert!(!is_valid_username("bo"));
        assert!(!is_valid_username("a".repeat(21).as_str()));
        assert!(!is_valid_username("bob smith"));
        assert!(!is_valid_username("bob@builder"));
    }

    #[test]
    fn otp() {
        assert!(is_valid_otp("123456"));
        assert!(is_valid_otp("000000"));
        assert!(!is_valid_otp(""));
        assert!(!is_valid_otp("12345"));
        assert!(!is_valid_otp("1234567"));
        assert!(!is_valid_otp("12345a"));
        assert!(!is_valid_otp("12 456"));
    }

    #[test]
    fn phone_number() {
        assert!(is_valid_phone_number("+33612345678"));
        assert!(is_valid_phone_number("9876543210"));
        assert!(!is_valid_phone_number("+0612345678"));
        assert!(!is_valid_phone_number("1"));
        assert!(!is_valid_phone_number("+123456789012345678"));
        assert!(!is_valid_phone_number("call-me"));
    }

    #[test]
    fn non_empty() {
        assert!(is_non_empty("x"));
        assert!(is_non_empty(" x "));
        assert!(!is_non_empty(""));
        assert!(!is_non_empty("   "));
    }
}
