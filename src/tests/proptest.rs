mod prop_tests {
    use crate::Qazarab;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn convert_is_idempotent(s in ".{0,200}") {
            let converter = Qazarab::new();
            let once = converter.convert(s.as_str()).unwrap().into_owned();
            let twice = converter.convert(once.as_str()).unwrap().into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn script_free_text_passes_through(s in "[a-zA-Z0-9 ]{0,200}") {
            let converter = Qazarab::new();
            let input = s.as_str();
            let result = converter.convert(input).unwrap();
            prop_assert_eq!(result.as_ref(), input);
            prop_assert!(matches!(result, std::borrow::Cow::Borrowed(b) if b.as_ptr() == input.as_ptr()));
        }

        #[test]
        fn marker_never_doubles(s in "[а-яёәіңғүұқөһА-ЯЁӘІҢҒҮҰҚӨҺ \\-]{0,80}") {
            let converter = Qazarab::new();
            let result = converter.convert(s.as_str()).unwrap();
            prop_assert!(!result.contains("ٴٴ"));
        }

        #[test]
        fn loan_consonant_words_never_carry_marker(s in "[фвцч][а-яәөүі]{0,10}") {
            let converter = Qazarab::new();
            let result = converter.convert(s.as_str()).unwrap();
            prop_assert!(!result.contains('\u{0674}'), "{} → {}", s, result);
        }

        #[test]
        fn signal_letter_words_never_carry_marker(s in "[кг][аәеоөіыртлмнсжз]{0,10}") {
            let converter = Qazarab::new();
            let result = converter.convert(s.as_str()).unwrap();
            prop_assert!(!result.contains('\u{0674}'), "{} → {}", s, result);
        }

        #[test]
        fn mapped_punctuation_never_survives(s in ".{0,200}") {
            let converter = Qazarab::new();
            let result = converter.convert(s.as_str()).unwrap();
            prop_assert!(!result.contains(','));
            prop_assert!(!result.contains(';'));
            prop_assert!(!result.contains('?'));
        }
    }
}
