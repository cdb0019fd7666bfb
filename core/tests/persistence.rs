use std::io::Write;
use std::path::Path;

use museum_core::{DataStore, StoreError, Treasure};
use tempfile::TempDir;

fn write_file(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("treasures.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn treasure(number: &str, name: &str, category: &str, country: &str) -> Treasure {
    Treasure::new(number, name, "img.jpg", category, country).unwrap()
}

#[test]
fn loads_a_well_formed_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "001\tVase\timg1.jpg\tPottery\tGreece\n002\tCoin\timg2.jpg\tCurrency\tRome\n",
    );

    let mut store = DataStore::new(path);
    assert_eq!(store.load().unwrap(), 2);
    assert_eq!(store.len(), 2);
    assert!(store.find_by_number("001").is_some());
    assert!(store.find_by_name("Coin").is_some());
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treasures.txt");

    let mut original = DataStore::new(&path);
    original.create(treasure("002", "Coin", "Currency", "Rome"));
    original.create(treasure("001", "Vase", "Pottery", "Greece"));
    original.save().unwrap();

    let mut reloaded = DataStore::new(&path);
    reloaded.load().unwrap();

    let saved: Vec<_> = original.iter().cloned().collect();
    let loaded: Vec<_> = reloaded.iter().cloned().collect();
    assert_eq!(saved, loaded);
}

#[test]
fn save_writes_catalogue_number_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treasures.txt");

    let mut store = DataStore::new(&path);
    store.create(treasure("002", "Coin", "Currency", "Rome"));
    store.create(treasure("001", "Vase", "Pottery", "Greece"));
    store.save().unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "001\tVase\timg.jpg\tPottery\tGreece\n002\tCoin\timg.jpg\tCurrency\tRome\n"
    );
}

#[test]
fn duplicate_rows_collapse_on_load() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "001\tVase\timg1.jpg\tPottery\tGreece\n001\tVase\timg1.jpg\tPottery\tGreece\n",
    );

    let mut store = DataStore::new(path);
    assert_eq!(store.load().unwrap(), 2);
    assert_eq!(store.len(), 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();

    let mut store = DataStore::new(dir.path().join("absent.txt"));
    assert!(matches!(store.load(), Err(StoreError::Io(_))));
    assert!(store.is_empty());
}

#[test]
fn malformed_line_aborts_but_keeps_earlier_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "001\tVase\timg1.jpg\tPottery\tGreece\n002\tCoin\timg2.jpg\n003\tUrn\timg3.jpg\tPottery\tItaly\n",
    );

    let mut store = DataStore::new(path);
    let err = store.load().unwrap_err();
    assert!(matches!(
        err,
        StoreError::MissingFields { line: 2, found: 3 }
    ));

    // The row before the malformed one was retained, the one after was not.
    assert_eq!(store.len(), 1);
    assert!(store.find_by_number("001").is_some());
    assert!(store.find_by_number("003").is_none());
}

#[test]
fn empty_field_aborts_with_the_line_number() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "001\t\timg1.jpg\tPottery\tGreece\n");

    let mut store = DataStore::new(path);
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::CorruptRecord { line: 1, .. }));
    assert!(store.is_empty());
}

#[test]
fn extra_fields_are_discarded_on_load() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "001\tVase\timg1.jpg\tPottery\tGreece\tdonated 1912\n",
    );

    let mut store = DataStore::new(path);
    assert_eq!(store.load().unwrap(), 1);

    let loaded = store.find_by_number("001").unwrap();
    assert_eq!(loaded.name.as_str(), "Vase");
    assert_eq!(loaded.country.as_str(), "Greece");
}

#[test]
fn redundant_save_is_harmless() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treasures.txt");

    let mut store = DataStore::new(&path);
    store.create(treasure("001", "Vase", "Pottery", "Greece"));
    store.save().unwrap();
    store.save().unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 1);
}
