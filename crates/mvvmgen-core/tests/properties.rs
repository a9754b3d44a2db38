mod common;

use common::*;
use mvvmgen_core::{emit::event_args::EventArgsCachePlan, prelude::*};
use proptest::prelude::*;

static NAMES: [&str; 6] = ["FullName", "Initials", "Greeting", "Title", "IsValid", "Count"];

fn arb_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(&NAMES[..])
}

fn arb_names() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(arb_name(), 0..12)
}

// first_occurrences
fn first_occurrences<'a>(names: &[&'a str]) -> Vec<&'a str> {
    let mut out = Vec::new();
    for name in names {
        if !out.contains(name) {
            out.push(*name);
        }
    }

    out
}

fn host() -> SymbolTable {
    SymbolTable::new().with_type(view_model())
}

proptest! {
    #[test]
    fn also_notify_keeps_first_occurrence_order(names in arb_names()) {
        let field = FieldSymbol::new("_source", TypeRef::new("string"))
            .with_attribute(notify())
            .with_attribute(also_notify(&names));
        let decision = NotifyDecision::for_field(&host(), None, &field).expect("decision");

        let got = decision.also_notify.iter().map(String::as_str).collect::<Vec<_>>();
        prop_assert_eq!(got, first_occurrences(&names));
        prop_assert_eq!(decision.has_set_side_effects(), !names.is_empty());
    }

    #[test]
    fn split_also_notify_attributes_merge(left in arb_names(), right in arb_names()) {
        let field = FieldSymbol::new("_source", TypeRef::new("string"))
            .with_attribute(notify())
            .with_attribute(also_notify(&left))
            .with_attribute(also_notify(&right));
        let decision = NotifyDecision::for_field(&host(), None, &field).expect("decision");

        let all = left.iter().chain(&right).copied().collect::<Vec<_>>();
        let got = decision.also_notify.iter().map(String::as_str).collect::<Vec<_>>();
        prop_assert_eq!(got, first_occurrences(&all));
    }

    #[test]
    fn cache_registration_is_idempotent(names in arb_names()) {
        let mut once = EventArgsCachePlan::new(true);
        let mut twice = EventArgsCachePlan::new(true);

        for name in &names {
            let reference = once.register(name);
            prop_assert_eq!(twice.register(name), reference.clone());
            prop_assert_eq!(twice.register(name), reference);
        }

        prop_assert_eq!(
            once.names().collect::<Vec<_>>(),
            first_occurrences(&names)
        );
        prop_assert_eq!(
            once.names().collect::<Vec<_>>(),
            twice.names().collect::<Vec<_>>()
        );
    }

    #[test]
    fn every_token_is_declared_exactly_once(notified in prop::collection::vec(arb_names(), 1..5)) {
        let candidates = notified
            .iter()
            .enumerate()
            .map(|(i, names)| {
                field(
                    &format!("_value{i}"),
                    TypeRef::new("int"),
                    vec![notify(), also_notify(names)],
                )
            })
            .collect::<Vec<_>>();
        let output = generate(&host(), &candidates);
        let cache = &output.unit("EventArgsCache.g.cs").expect("cache").text;

        for names in &notified {
            for name in names {
                let declaration = format!(" {name}PropertyChanged = new");
                prop_assert_eq!(cache.matches(&declaration).count(), 1);
            }
        }
    }

    #[test]
    fn generation_is_deterministic(notified in prop::collection::vec(arb_names(), 0..5), cache in any::<bool>()) {
        let candidates = notified
            .iter()
            .enumerate()
            .map(|(i, names)| {
                field(
                    &format!("_value{i}"),
                    TypeRef::new("int"),
                    vec![notify(), also_notify(names)],
                )
            })
            .collect::<Vec<_>>();
        let generator = Generator::new(Options { event_args_cache: cache, ..options() });

        let first = generator.run(&host(), &candidates, &NeverCancelled).expect("first");
        let second = generator.run(&host(), &candidates, &NeverCancelled).expect("second");

        prop_assert_eq!(first.fingerprint(), second.fingerprint());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn accessor_split_never_overrides_both(getter in 0_i64..7, setter in 0_i64..7) {
        let split = AccessorSplit::resolve(
            AccessModifier::from_value(getter),
            AccessModifier::from_value(setter),
        );

        prop_assert!(split.getter().is_none() || split.setter().is_none());
        prop_assert!(split.property().is_set());
    }
}
