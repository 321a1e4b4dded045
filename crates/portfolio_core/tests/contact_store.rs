use portfolio_core::{ContactStore, FixedDirResolver, RepoError};

fn fresh_store(dir: &tempfile::TempDir) -> ContactStore<FixedDirResolver> {
    ContactStore::new(FixedDirResolver::new(dir.path()), "test_contacts.db")
}

#[test]
fn most_recent_contact_is_listed_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    store.insert("A", "B", "a@x.com", "pw1").unwrap();
    store.insert("C", "D", "c@x.com", "pw2").unwrap();

    let contacts = store.list_all().unwrap();
    assert_eq!(contacts[0].email, "c@x.com");
    assert_eq!(contacts[1].email, "a@x.com");
}

#[test]
fn three_contacts_list_in_reverse_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);
    store.initialize().unwrap();

    let ids: Vec<_> = ["first", "second", "third"]
        .iter()
        .map(|name| {
            store
                .insert(*name, "Tester", format!("{name}@example.com"), "password123")
                .unwrap()
        })
        .collect();

    let listed: Vec<_> = store.list_all().unwrap().iter().map(|c| c.id).collect();
    let expected: Vec<_> = ids.iter().rev().copied().collect();
    assert_eq!(listed, expected);
}

#[test]
fn initialize_does_not_seed_and_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    store.initialize().unwrap();
    store.initialize().unwrap();

    assert_eq!(store.count().unwrap(), 0);
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn count_tracks_listing_length() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);
    store.initialize().unwrap();
    assert_eq!(store.count().unwrap(), store.list_all().unwrap().len());

    for n in 0..4 {
        store
            .insert("John", "Doe", format!("john{n}@example.com"), "password123")
            .unwrap();
        assert_eq!(store.count().unwrap(), n + 1);
        assert_eq!(store.count().unwrap(), store.list_all().unwrap().len());
    }

    store.insert("", "Doe", "x@example.com", "pw").unwrap_err();
    assert_eq!(store.count().unwrap(), 4);
}

#[test]
fn insert_rejects_each_blank_field() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    let cases = [
        ("", "Doe", "john@example.com", "password123", "first_name"),
        ("John", "  ", "john@example.com", "password123", "last_name"),
        ("John", "Doe", "", "password123", "email"),
        ("John", "Doe", "john@example.com", "\t", "password"),
    ];
    for (first, last, email, password, missing) in cases {
        let err = store.insert(first, last, email, password).unwrap_err();
        assert!(err.is_validation(), "unexpected error: {err}");
        match err {
            RepoError::Validation(validation) => {
                assert_eq!(validation.missing_fields(), &[missing]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn fields_are_trimmed_and_otherwise_stored_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    store
        .insert(
            " José ",
            "O'Connor-Smith",
            "jose.o'connor-smith@example.com",
            " P@ssw0rd!@#$%^&*() ",
        )
        .unwrap();

    let contact = store.list_all().unwrap().pop().unwrap();
    assert_eq!(contact.first_name, "José");
    assert_eq!(contact.last_name, "O'Connor-Smith");
    assert_eq!(contact.email, "jose.o'connor-smith@example.com");
    assert_eq!(contact.password.as_stored(), "P@ssw0rd!@#$%^&*()");
    assert!(!contact.created_at.is_empty());
}

#[test]
fn email_and_password_shape_is_not_checked() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    store.insert("A", "B", "not-an-email", "1").unwrap();

    assert_eq!(store.list_all().unwrap()[0].email, "not-an-email");
}

#[test]
fn ids_auto_increment() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    let first = store.insert("A", "B", "a@x.com", "pw").unwrap();
    let second = store.insert("A", "B", "a@x.com", "pw").unwrap();

    assert!(first > 0);
    assert_eq!(second, first + 1);
}

#[test]
fn contact_serializes_with_column_names() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);
    store.insert("Jane", "Smith", "jane@example.com", "secret").unwrap();

    let contact = store.list_all().unwrap().pop().unwrap();
    let json = serde_json::to_value(&contact).unwrap();

    assert_eq!(json["first_name"], "Jane");
    assert_eq!(json["last_name"], "Smith");
    assert_eq!(json["email"], "jane@example.com");
    assert_eq!(json["password"], "secret");
    assert!(json["id"].is_i64());
    assert!(json["created_at"].is_string());
}
