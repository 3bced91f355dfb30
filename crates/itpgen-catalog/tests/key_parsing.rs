use itpgen_catalog::{abbreviation, EquipmentClass, EquipmentPair, Voltage};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_pair_parsing_never_panics(key in "\\PC{0,12}") {
        let _ = key.parse::<EquipmentPair>();
        let _ = key.parse::<Voltage>();
        let _ = abbreviation(&key);
    }

    #[test]
    fn prop_stored_keys_parse_case_insensitively(idx in 0..16usize, upper in any::<bool>()) {
        let pair = EquipmentPair::ALL[idx];
        let key = if upper {
            pair.stored_key().to_ascii_uppercase()
        } else {
            pair.stored_key()
        };
        prop_assert_eq!(key.parse::<EquipmentPair>().unwrap(), pair);
        prop_assert_eq!(abbreviation(&key), Some(pair.abbreviation()));
    }

    #[test]
    fn prop_ehv_spelling_names_ev_pairs(
        idx in 0..4usize,
        sep in prop::sample::select(vec!["", "_", "-", " "]),
        upper in any::<bool>(),
    ) {
        let class = EquipmentClass::ALL[idx];
        let key = format!("ehv{sep}{}", class.key());
        let key = if upper { key.to_ascii_uppercase() } else { key };

        let pair = EquipmentPair::new(Voltage::Ev, class);
        prop_assert_eq!(key.parse::<EquipmentPair>().unwrap(), pair);
        prop_assert_eq!(abbreviation(&key), Some(pair.abbreviation()));
    }
}
