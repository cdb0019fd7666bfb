use nutype::nutype;

/// A single record field. Construction rejects the empty string, so a record
/// with an empty field cannot be represented, let alone enter the store.
#[nutype(
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Borrow,
        Display,
    )
)]
pub struct Field(String);
