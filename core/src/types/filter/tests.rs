use crate::types::{Field, Filter, Treasure};

fn vase() -> Treasure {
    Treasure::new("001", "Vase", "img1.jpg", "Pottery", "Greece").unwrap()
}

fn term(value: &str) -> Option<Field> {
    Some(Field::try_from(value).unwrap())
}

#[test]
fn empty_filter_matches_everything() {
    assert!(Filter::default().matches(&vase()));
}

#[test]
fn category_term_must_match_exactly() {
    let mut filter = Filter::default();

    filter.category = term("Pottery");
    assert!(filter.matches(&vase()));

    filter.category = term("pottery");
    assert!(!filter.matches(&vase()));
}

#[test]
fn both_terms_must_match() {
    let filter = Filter {
        category: term("Pottery"),
        country: term("Rome"),
    };
    assert!(!filter.matches(&vase()));

    let filter = Filter {
        category: term("Pottery"),
        country: term("Greece"),
    };
    assert!(filter.matches(&vase()));
}

#[test]
fn clear_restores_the_no_filter_state() {
    let mut filter = Filter {
        category: term("Pottery"),
        country: None,
    };
    assert!(!filter.is_empty());

    filter.clear();
    assert!(filter.is_empty());
    assert!(filter.matches(&vase()));
}
