//! Free-text WHOIS response parser.
//!
//! WHOIS output is line-oriented `Key: Value` text with no standard for the
//! key names. Every registry picks its own labels ("Registry Expiry Date",
//! "Expires On", "paid-till", ...) and national registries localize them
//! (KRNIC emits Korean labels). This module extracts the three fields we
//! care about via exact normalized-key matching against declarative keyword
//! tables.

/// Known labels for the registration expiry date, lowercase.
const EXPIRY_KEYS: &[&str] = &[
    "registry expiry date",
    "registrar registration expiration date",
    "expiry date",
    "expiration date",
    "expiration time",
    "expire date",
    "expires",
    "expires on",
    "expire",
    "expiry",
    "paid-till",
    "valid until",
    "renewal date",
    // KRNIC (Korean national registry)
    "만료일",
    "사용 종료일",
];

/// Known labels for the creation/registration date, lowercase.
const CREATION_KEYS: &[&str] = &[
    "creation date",
    "created",
    "created on",
    "created date",
    "registered",
    "registered on",
    "registration date",
    "registration time",
    "domain registration date",
    // KRNIC
    "등록일",
];

/// Known labels for the sponsoring registrar, lowercase.
const REGISTRAR_KEYS: &[&str] = &[
    "registrar",
    "registrar name",
    "sponsoring registrar",
    "registrar organization",
    // KRNIC
    "등록대행자",
];

/// Fields extracted from raw WHOIS text.
///
/// Each field is `None` when no line carried a matching label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFields {
    pub expiry_date: Option<String>,
    pub creation_date: Option<String>,
    pub registrar: Option<String>,
}

/// Parse raw WHOIS text and extract expiry date, creation date, and registrar.
///
/// The input may be several concatenated WHOIS server responses (registries
/// often chain a thin registry answer with a registrar answer). Parsing is a
/// single pass over the lines:
///
/// - each line is split at the first `:` into key and value
/// - the key is trimmed and lowercased, the value trimmed
/// - a field is taken from the first line whose normalized key is *equal*
///   to one of that field's known labels; later matches never overwrite it
/// - lines without a colon, or with an empty value, are skipped
///
/// Matching is exact key equality, not substring search — a value that
/// happens to contain "expires" somewhere must not populate anything.
pub fn parse_whois_text(raw: &str) -> ParsedFields {
    let mut fields = ParsedFields::default();

    for line in raw.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let key = key.trim().to_lowercase();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        if fields.expiry_date.is_none() && EXPIRY_KEYS.contains(&key.as_str()) {
            fields.expiry_date = Some(value.to_string());
        } else if fields.creation_date.is_none() && CREATION_KEYS.contains(&key.as_str()) {
            fields.creation_date = Some(value.to_string());
        } else if fields.registrar.is_none() && REGISTRAR_KEYS.contains(&key.as_str()) {
            fields.registrar = Some(value.to_string());
        }

        if fields.expiry_date.is_some()
            && fields.creation_date.is_some()
            && fields.registrar.is_some()
        {
            break;
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verisign_style_response() {
        let raw = "Domain Name: EXAMPLE.COM\n\
                   Registry Domain ID: 2336799_DOMAIN_COM-VRSN\n\
                   Registrar: Example Registrar\n\
                   Creation Date: 1995-08-14T04:00:00Z\n\
                   Registry Expiry Date: 2025-01-01T00:00:00Z\n";

        let fields = parse_whois_text(raw);
        assert_eq!(fields.expiry_date.as_deref(), Some("2025-01-01T00:00:00Z"));
        assert_eq!(fields.creation_date.as_deref(), Some("1995-08-14T04:00:00Z"));
        assert_eq!(fields.registrar.as_deref(), Some("Example Registrar"));
    }

    #[test]
    fn test_parse_expiry_and_registrar_only() {
        let raw = "Registry Expiry Date: 2025-01-01T00:00:00Z\nRegistrar: Example Registrar\n";
        let fields = parse_whois_text(raw);
        assert_eq!(fields.expiry_date.as_deref(), Some("2025-01-01T00:00:00Z"));
        assert_eq!(fields.registrar.as_deref(), Some("Example Registrar"));
        assert_eq!(fields.creation_date, None);
    }

    #[test]
    fn test_parse_korean_labels() {
        // KRNIC pads labels with whitespace before the colon
        let raw = "도메인이름 : example.co.kr\n\
                   등록일 : 2010-05-20\n\
                   만료일 : 2026-03-15\n\
                   등록대행자 : 가비아\n";

        let fields = parse_whois_text(raw);
        assert_eq!(fields.expiry_date.as_deref(), Some("2026-03-15"));
        assert_eq!(fields.creation_date.as_deref(), Some("2010-05-20"));
        assert_eq!(fields.registrar.as_deref(), Some("가비아"));
    }

    #[test]
    fn test_first_match_wins_across_concatenated_responses() {
        // Registry answer followed by registrar answer; the first
        // occurrence in document order must win.
        let raw = "Registry Expiry Date: 2025-01-01T00:00:00Z\n\
                   \n\
                   Expiration Date: 2025-06-30T00:00:00Z\n\
                   Registrar: First Registrar\n\
                   Registrar: Second Registrar\n";

        let fields = parse_whois_text(raw);
        assert_eq!(fields.expiry_date.as_deref(), Some("2025-01-01T00:00:00Z"));
        assert_eq!(fields.registrar.as_deref(), Some("First Registrar"));
    }

    #[test]
    fn test_exact_key_match_not_substring() {
        // "Registrar URL" and "Registrar IANA ID" must not populate the
        // registrar field, and a value mentioning "expires" must not
        // populate the expiry field.
        let raw = "Registrar URL: http://www.example-registrar.com\n\
                   Registrar IANA ID: 1234\n\
                   Notice: this registration expires unless renewed\n";

        let fields = parse_whois_text(raw);
        assert_eq!(fields, ParsedFields::default());
    }

    #[test]
    fn test_lines_without_colon_are_skipped() {
        let raw = ">>> Last update of whois database <<<\n\
                   % This query returned 1 object\n\
                   expires: 2030-12-31\n";

        let fields = parse_whois_text(raw);
        assert_eq!(fields.expiry_date.as_deref(), Some("2030-12-31"));
    }

    #[test]
    fn test_case_and_whitespace_insensitive_keys() {
        let raw = "  EXPIRATION DATE  :  2027-07-07  \n";
        let fields = parse_whois_text(raw);
        assert_eq!(fields.expiry_date.as_deref(), Some("2027-07-07"));
    }

    #[test]
    fn test_empty_values_ignored() {
        let raw = "Registry Expiry Date:\nRegistry Expiry Date: 2025-01-01\n";
        let fields = parse_whois_text(raw);
        assert_eq!(fields.expiry_date.as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn test_value_with_colons_kept_whole() {
        // Timestamps contain colons; only the first colon splits the line.
        let raw = "Expires: 2025-01-01 00:00:00 UTC\n";
        let fields = parse_whois_text(raw);
        assert_eq!(fields.expiry_date.as_deref(), Some("2025-01-01 00:00:00 UTC"));
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let raw = "Registrar: Example Registrar\nExpires: 2025-01-01\nCreated: 2001-02-03\n";
        assert_eq!(parse_whois_text(raw), parse_whois_text(raw));
    }

    #[test]
    fn test_field_independence() {
        // A registrar-only document must leave the date fields untouched.
        let raw = "Registrar: Lonely Registrar\n";
        let fields = parse_whois_text(raw);
        assert_eq!(fields.registrar.as_deref(), Some("Lonely Registrar"));
        assert_eq!(fields.expiry_date, None);
        assert_eq!(fields.creation_date, None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_whois_text(""), ParsedFields::default());
    }
}
