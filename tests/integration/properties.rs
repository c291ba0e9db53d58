//! Property tests across resolution and formatting.

use brainstorm_foundation::GrammaticalNumber;
use brainstorm_lexicon::{Lexicon, NounClass, NounResolver};
use brainstorm_template::TitleFormatter;
use proptest::prelude::*;

fn lexicon() -> Lexicon {
    Lexicon::builder()
        .with_pair(NounClass::UsuallyPlural, "octopus", "octopi")
        .with_pair(NounClass::CountableAndUncountable, "cake", "cakes")
        .with_fixed(NounClass::PluraliaTantum, "scissors")
        .with_fixed(NounClass::Uncountable, "rice")
        .build()
}

fn capitalized(form: &str, word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => form == first.to_uppercase().chain(chars).collect::<String>(),
        None => form.is_empty(),
    }
}

proptest! {
    #[test]
    fn resolution_is_total(word in "\\PC{0,24}") {
        let lex = lexicon();
        let entity = NounResolver::new(&lex).resolve(&word);
        if NounResolver::new(&lex).classify(&word).is_none() {
            prop_assert_eq!(entity.number(), GrammaticalNumber::Singular);
            prop_assert_eq!(entity.singular(), entity.plural());
        }
    }

    #[test]
    fn unknown_words_are_capitalized(word in "[a-zà-ÿ][a-z ]{0,15}") {
        let lex = Lexicon::empty();
        let entity = NounResolver::new(&lex).resolve(&word);
        prop_assert!(capitalized(entity.singular(), &word));
        prop_assert!(capitalized(entity.plural(), &word));
    }

    #[test]
    fn subject_lists_never_fail(text in "[a-z, ]{0,40}") {
        let lex = lexicon();
        let set = NounResolver::new(&lex).resolve_subjects(&text);
        let items = text.split(',').filter(|s| !s.trim().is_empty()).count();
        prop_assert!(set.len() <= items);
    }

    #[test]
    fn resolved_subjects_always_format(word in "[a-z]{1,10}") {
        let lex = lexicon();
        let entity = NounResolver::new(&lex).resolve(&word);
        let out = TitleFormatter::new()
            .format_str("{0:a/an} {0:s} {0:is/are} {0:has/have} {0:p}", &[entity])
            .unwrap();
        prop_assert!(out.starts_with('a'));
    }
}
