use crate::error::ValidationError;
use crate::types::Treasure;

#[test]
fn builds_from_valid_fields() {
    let treasure = Treasure::new("001", "Vase", "img1.jpg", "Pottery", "Greece").unwrap();
    assert_eq!(treasure.catalogue_number.as_str(), "001");
    assert_eq!(treasure.country.as_str(), "Greece");
}

#[test]
fn names_the_empty_field() {
    let err = Treasure::new("001", "", "img1.jpg", "Pottery", "Greece").unwrap_err();
    assert_eq!(err, ValidationError::EmptyField { field: "name" });

    let err = Treasure::new("001", "Vase", "img1.jpg", "Pottery", "").unwrap_err();
    assert_eq!(err, ValidationError::EmptyField { field: "country" });
}

#[test]
fn equality_is_structural() {
    let a = Treasure::new("001", "Vase", "img1.jpg", "Pottery", "Greece").unwrap();
    let b = Treasure::new("001", "Vase", "img1.jpg", "Pottery", "Greece").unwrap();
    let c = Treasure::new("001", "Vase", "img2.jpg", "Pottery", "Greece").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn displays_number_and_name() {
    let treasure = Treasure::new("001", "Vase", "img1.jpg", "Pottery", "Greece").unwrap();
    assert_eq!(treasure.to_string(), "(001) Vase");
}

#[test]
fn orders_by_catalogue_number_first() {
    let a = Treasure::new("001", "Zither", "z.jpg", "Music", "China").unwrap();
    let b = Treasure::new("002", "Abacus", "a.jpg", "Mathematics", "China").unwrap();
    assert!(a < b);
}
