//! Property tests: redaction removes generated PII and is idempotent.

use proptest::prelude::*;
use vigil_privacy::RedactionEngine;

proptest! {
    #[test]
    fn redacted_output_never_contains_generated_phone(
        cc in "[1-9][0-9]{0,2}",
        area in "[0-9]{2}",
        line in "[0-9]{7}",
    ) {
        let phone = format!("+{cc}-{area}-{line}");
        let input = format!("call {phone} now");
        let (out, _) = RedactionEngine::new().redact_text(&input);
        prop_assert!(!out.contains(&phone), "phone survived: {}", out);
        prop_assert_eq!(out, "call [PHONE] now");
    }

    #[test]
    fn redacted_output_never_contains_generated_email(
        user in "[a-z]{3,8}",
        domain in "[a-z]{3,8}",
        tld in "(com|org|net)",
    ) {
        let email = format!("{user}@{domain}.{tld}");
        let input = format!("mail {email} today");
        let (out, _) = RedactionEngine::new().redact_text(&input);
        prop_assert_eq!(out, "mail [EMAIL] today");
    }

    #[test]
    fn redacted_output_never_contains_generated_handle(handle in "@[a-z_]{2,15}") {
        let input = format!("hi {handle} there");
        let (out, _) = RedactionEngine::new().redact_text(&input);
        prop_assert!(!out.contains('@'));
        prop_assert_eq!(out, "hi [HANDLE] there");
    }

    #[test]
    fn plain_words_are_preserved(text in "[a-z]{1,10}( [a-z]{1,10}){0,8}") {
        let (out, redactions) = RedactionEngine::new().redact_text(&text);
        prop_assert_eq!(out, text);
        prop_assert!(redactions.is_empty());
    }

    #[test]
    fn redaction_is_idempotent(text in "[ -~]{0,120}") {
        let engine = RedactionEngine::new();
        let (once, _) = engine.redact_text(&text);
        let (twice, second_pass) = engine.redact_text(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(second_pass.is_empty());
    }
}
