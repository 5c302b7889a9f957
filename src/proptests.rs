use std::collections::HashMap;

use proptest::prelude::*;
use proptest_derive::Arbitrary;

use crate::tests::check_invariants;
use crate::HamtMap;

/// Actions to drive against the map and a `HashMap` model in lockstep.
/// Keys come from a deliberately small space so insertions overwrite and
/// hash paths collide often.
#[derive(Arbitrary, Debug, Clone)]
enum Action {
    Insert(u8, u16),
    Get(u8),
    Clear,
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn matches_hashmap_model(actions: Vec<Action>) {
        let mut map: HamtMap<u8, u16> = HamtMap::new();
        let mut model: HashMap<u8, u16> = HashMap::new();

        for action in &actions {
            match action {
                Action::Insert(key, value) => {
                    map.insert(*key, *value).unwrap();
                    model.insert(*key, *value);
                }
                Action::Get(key) => {
                    prop_assert_eq!(map.get(key), model.get(key));
                }
                Action::Clear => {
                    map.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(map.len(), model.len());
        }

        check_invariants(&map);

        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Some(value));
        }

        let mut collected: Vec<(u8, u16)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        collected.sort_unstable();
        let mut expected: Vec<(u8, u16)> = model.iter().map(|(k, v)| (*k, *v)).collect();
        expected.sort_unstable();
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn clone_matches_and_stays_independent(
        pairs: Vec<(u8, u16)>,
        extra: Vec<(u8, u16)>,
    ) {
        let mut source: HamtMap<u8, u16> = HamtMap::new();
        let mut model: HashMap<u8, u16> = HashMap::new();
        for (key, value) in &pairs {
            source.insert(*key, *value).unwrap();
            model.insert(*key, *value);
        }

        let mut copy = source.clone();
        check_invariants(&copy);
        prop_assert_eq!(copy.len(), source.len());

        for (key, value) in &extra {
            copy.insert(*key, *value).unwrap();
        }

        // The source must still match the model exactly.
        prop_assert_eq!(source.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(source.get(key), Some(value));
        }
        check_invariants(&source);
    }

    #[test]
    fn iteration_is_exhaustive(pairs: Vec<(u8, u16)>) {
        let mut map: HamtMap<u8, u16> = HamtMap::new();
        let mut model: HashMap<u8, u16> = HashMap::new();
        for (key, value) in &pairs {
            map.insert(*key, *value).unwrap();
            model.insert(*key, *value);
        }

        let mut count = 0usize;
        for (key, value) in &map {
            prop_assert_eq!(model.get(key), Some(value));
            count += 1;
        }
        prop_assert_eq!(count, model.len());
    }
}
