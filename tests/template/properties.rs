//! Property tests for the template language.

use brainstorm_foundation::{GrammaticalEntity, GrammaticalNumber};
use brainstorm_template::{Template, TitleFormatter};
use proptest::prelude::*;

fn entity() -> impl Strategy<Value = GrammaticalEntity> {
    ("\\PC{0,12}", "\\PC{0,12}", any::<bool>()).prop_map(|(s, p, plural)| {
        let number = if plural {
            GrammaticalNumber::Plural
        } else {
            GrammaticalNumber::Singular
        };
        GrammaticalEntity::new(&s, &p, number)
    })
}

fn spec() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "", "s", "p", "a/an", "is/are", "has/have", ">6p", "*^9s", ".2", "junk",
    ])
}

proptest! {
    #[test]
    fn parse_never_panics(source in "\\PC{0,40}") {
        let _ = Template::parse(&source);
    }

    #[test]
    fn formatting_is_deterministic(
        a in entity(),
        b in entity(),
        spec_a in spec(),
        spec_b in spec(),
    ) {
        let source = format!("The {{0:{spec_a}}} of {{1:{spec_b}}}");
        let template = Template::parse(&source).unwrap();
        let formatter = TitleFormatter::new();
        let entities = [a, b];
        let first = formatter.format(&template, &entities).unwrap();
        let second = formatter.format(&template, &entities).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn correct_arity_always_formats(
        entities in prop::collection::vec(entity(), 1..=3),
        spec in spec(),
    ) {
        let source: String = (0..entities.len()).map(|i| format!("[{{{i}:{spec}}}]")).collect();
        let template = Template::parse(&source).unwrap();
        prop_assert!(TitleFormatter::new().format(&template, &entities).is_ok());
    }
}
