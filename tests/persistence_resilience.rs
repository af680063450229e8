use rust_decimal_macros::dec;
use tempfile::TempDir;
use tipsplit::persistence::{decode_record, encode_record};
use tipsplit::prelude::*;

fn store_with(record: &str) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set(STORAGE_KEY, record).unwrap();
    store
}

#[test]
fn test_roundtrip_preserves_state() {
    let states = [
        BillState::default(),
        BillState::new(dec!(100), dec!(10), dec!(4), Currency::Usd),
        BillState::new(dec!(0.01), dec!(17.25), dec!(12), Currency::Php),
        BillState::new(dec!(123456789.99), dec!(0.1), dec!(2.5), Currency::Aud),
    ];

    for state in states {
        let mut repo = BillRepository::new(MemoryStore::new());
        repo.save(&state).unwrap();
        assert_eq!(repo.load().unwrap(), Some(state));
    }
}

#[test]
fn test_missing_people_defaults_to_one() {
    let splitter = Splitter::open(store_with(r#"{"amount":40,"tip":5}"#)).unwrap();
    assert_eq!(splitter.state().people, dec!(1));
    assert_eq!(splitter.state().amount, dec!(40));
}

#[test]
fn test_negative_people_clamped_on_load() {
    let splitter = Splitter::open(store_with(r#"{"amount":40,"tip":5,"people":-5}"#)).unwrap();
    assert_eq!(splitter.state().people, dec!(1));
}

#[test]
fn test_zero_people_cannot_break_division() {
    let splitter = Splitter::open(store_with(r#"{"amount":40,"tip":0,"people":0}"#)).unwrap();
    assert_eq!(splitter.state().people, dec!(1));
    assert_eq!(splitter.summary().per_person, dec!(40));
}

#[test]
fn test_malformed_record_is_ignored() {
    let splitter = Splitter::open(store_with("{\"amount\": 12,")).unwrap();
    assert_eq!(splitter.state(), &BillState::default());
}

#[test]
fn test_record_without_currency_uses_default() {
    let state = decode_record(r#"{"amount":1,"tip":2,"people":3}"#).unwrap();
    assert_eq!(state.currency, Currency::Aud);
}

#[test]
fn test_load_does_not_write() {
    let raw = r#"{"amount":"12","tip":0,"people":2,"currency":"usd"}"#;
    let splitter = Splitter::open(store_with(raw)).unwrap();
    assert_eq!(splitter.state().amount, dec!(12));
    assert_eq!(splitter.state().currency, Currency::Usd);

    let store = splitter.into_store();
    assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some(raw));
}

#[test]
fn test_file_store_survives_sessions() {
    let tmp = TempDir::new().unwrap();

    {
        let mut splitter = Splitter::open(FileStore::new(tmp.path())).unwrap();
        splitter.set_amount("64.80").unwrap();
        splitter.set_people("3").unwrap();
        splitter.select_currency(Currency::Usd).unwrap();
    }

    let splitter = Splitter::open(FileStore::new(tmp.path())).unwrap();
    assert_eq!(
        splitter.state(),
        &BillState::new(dec!(64.8), dec!(0), dec!(3), Currency::Usd)
    );

    let on_disk = std::fs::read_to_string(tmp.path().join("expenseData.json")).unwrap();
    assert_eq!(on_disk, encode_record(splitter.state()).unwrap());
}

#[test]
fn test_file_store_reset_removes_file() {
    let tmp = TempDir::new().unwrap();
    let mut splitter = Splitter::open(FileStore::new(tmp.path())).unwrap();
    splitter.set_amount("10").unwrap();
    assert!(tmp.path().join("expenseData.json").exists());

    splitter.reset().unwrap();
    assert!(!tmp.path().join("expenseData.json").exists());
}
