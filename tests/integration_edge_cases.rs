//! Edge-case coverage for masking policies.
//!
//! These tests focus on behavior across Unicode scalar values (multi-byte
//! characters, combining marks) and on boundary lengths where eliding and
//! keep policies switch between masking, placeholders and passthrough.

use logveil::{ElideConfig, TextRedactionPolicy};

mod elide_boundaries {
    use super::*;

    #[test]
    fn every_length_below_the_minimum_yields_the_same_placeholder() {
        let policy = TextRedactionPolicy::elide(3, 4);
        for len in 0..7 {
            let value = "9".repeat(len);
            assert_eq!(policy.apply_to(&value), "*******", "length {len}");
        }
    }

    #[test]
    fn minimum_length_still_elides() {
        let policy = TextRedactionPolicy::elide(3, 4);
        assert_eq!(policy.apply_to("5550100"), "555****0100");
    }

    #[test]
    fn output_never_reveals_middle_length() {
        let policy = TextRedactionPolicy::elide(3, 4);
        let short = policy.apply_to("13800138000");
        let long = policy.apply_to("138001380001234567890");
        assert_eq!(short.len(), long.len());
    }

    #[test]
    fn zero_spans_reduce_to_the_bare_token() {
        let policy = TextRedactionPolicy::elide(0, 0);
        assert_eq!(policy.apply_to("anything"), "****");
        // Length zero is not below prefix + suffix = 0, so the token applies.
        assert_eq!(policy.apply_to(""), "****");
    }

    #[test]
    fn custom_token_placeholder_uses_the_token_character() {
        let policy = TextRedactionPolicy::elide_with(ElideConfig::new(1, 1).with_mask_token("##"));
        assert_eq!(policy.apply_to("abcd"), "a##d");
        assert_eq!(policy.apply_to("a"), "##");
    }
}

mod unicode {
    use super::*;

    #[test]
    fn elide_counts_scalar_values_not_bytes() {
        let policy = TextRedactionPolicy::elide(3, 4);
        // 11 scalar values, 33 bytes; byte-offset slicing would split a char.
        assert_eq!(policy.apply_to("电话号码一二三四五六七"), "电话号****四五六七");
    }

    #[test]
    fn keep_handles_multibyte_characters() {
        let policy = TextRedactionPolicy::keep_first(2);
        assert_eq!(policy.apply_to("秘密数据"), "秘密**");
    }

    #[test]
    fn keep_handles_combining_characters() {
        let policy = TextRedactionPolicy::keep_first(4);
        assert_eq!(policy.apply_to("cafe\u{0301}"), "cafe*");
    }

    #[test]
    fn mask_handles_emoji() {
        let policy = TextRedactionPolicy::mask_last(1);
        assert_eq!(policy.apply_to("pin🔒"), "pin*");
    }

    #[test]
    fn email_preserves_multibyte_domains() {
        let policy = TextRedactionPolicy::email_local(1);
        assert_eq!(policy.apply_to("张三@例子.公司"), "张*@例子.公司");
    }
}

mod special_cases {
    use super::*;

    #[test]
    fn very_long_values_keep_policy_shape() {
        let value = "x".repeat(100_000);

        let policy = TextRedactionPolicy::keep_last(10);
        let masked = policy.apply_to(&value);
        assert_eq!(masked.len(), 100_000);
        assert!(masked.ends_with("xxxxxxxxxx"));
        assert!(masked.starts_with("**********"));

        let policy = TextRedactionPolicy::elide(3, 4);
        assert_eq!(policy.apply_to(&value), "xxx****xxxx");
    }

    #[test]
    fn full_policy_ignores_input_entirely() {
        let policy = TextRedactionPolicy::default_full();
        assert_eq!(policy.apply_to("a"), "[REDACTED]");
        assert_eq!(policy.apply_to(&"x".repeat(1000)), "[REDACTED]");
    }

    #[test]
    fn whitespace_only_values_are_masked_like_any_other() {
        let policy = TextRedactionPolicy::elide(3, 4);
        assert_eq!(policy.apply_to("       "), "   ****    ");
        assert_eq!(policy.apply_to("  "), "*******");
    }
}
