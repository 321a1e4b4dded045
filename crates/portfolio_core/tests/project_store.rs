use portfolio_core::{
    FallbackResolver, FixedDirResolver, NewProject, ProjectStore, RepoError, SEED_PROJECTS,
};
use std::fs;

fn fresh_store(dir: &tempfile::TempDir) -> ProjectStore<FixedDirResolver> {
    ProjectStore::new(FixedDirResolver::new(dir.path()), "test_projects.db")
}

#[test]
fn fresh_store_seeds_then_appends_inserted_project() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    assert_eq!(store.initialize().unwrap(), 2);
    let seeded = store.list_all().unwrap();
    let titles: Vec<_> = seeded.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Sign Language Recognition using Deep Learning",
            "Decentro Vault: Decentralized Banking System",
        ]
    );

    let id = store.insert("T", "D", "i.png").unwrap();
    let projects = store.list_all().unwrap();
    assert_eq!(projects.len(), 3);

    let last = &projects[2];
    assert_eq!(last.id, id);
    assert!(last.id > projects[0].id && last.id > projects[1].id);
    assert_eq!(
        (
            last.title.as_str(),
            last.description.as_str(),
            last.image_file_name.as_str()
        ),
        ("T", "D", "i.png")
    );
}

#[test]
fn repeated_initialize_does_not_duplicate_seed_rows() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    assert_eq!(store.initialize().unwrap(), 2);
    assert_eq!(store.initialize().unwrap(), 0);

    assert_eq!(store.list_all().unwrap().len(), SEED_PROJECTS.len());
}

#[test]
fn initialize_keeps_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);
    store.initialize().unwrap();
    store.insert("Kept", "Still here", "kept.png").unwrap();

    let reopened = fresh_store(&dir);
    assert_eq!(reopened.initialize().unwrap(), 0);

    let projects = reopened.list_all().unwrap();
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[2].title, "Kept");
}

#[test]
fn insert_trims_fields_before_storing() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    store.insert(" x ", "\td\n", "  i.jpg").unwrap();

    let project = store.list_all().unwrap().pop().unwrap();
    assert_eq!(project.title, "x");
    assert_eq!(project.description, "d");
    assert_eq!(project.image_file_name, "i.jpg");
    assert!(!project.created_at.is_empty());
}

#[test]
fn insert_rejects_each_blank_field_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);
    store.initialize().unwrap();

    let cases = [
        ("", "Description", "image.jpg", "title"),
        ("   ", "Description", "image.jpg", "title"),
        ("Title", "", "image.jpg", "description"),
        ("Title", "Description", " \t ", "image_file_name"),
    ];
    for (title, description, image, missing) in cases {
        let err = store.insert(title, description, image).unwrap_err();
        match err {
            RepoError::Validation(validation) => {
                assert_eq!(validation.missing_fields(), &[missing]);
                assert!(validation.to_string().contains("are required"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn ids_increase_and_listing_is_ascending() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    let ids: Vec<_> = (0..5)
        .map(|n| {
            store
                .insert(format!("Project {n}"), "desc", "p.png")
                .unwrap()
        })
        .collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    let listed: Vec<_> = store.list_all().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(listed, ids);
}

#[test]
fn duplicate_titles_and_long_text_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);
    let long_description = "lorem ipsum ".repeat(5_000);

    store.insert("Same", long_description.as_str(), "a.png").unwrap();
    store.insert("Same", "short", "b.png").unwrap();

    let projects = store.list_all().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].description, long_description.trim());
    assert_eq!(projects[1].title, projects[0].title);
}

#[test]
fn unicode_and_punctuation_round_trip_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    store
        .insert(
            "Café ☕ Project: 100%!",
            "Description with émojis 🚀 and unicode: ñáéíóú",
            "special_chars.webp",
        )
        .unwrap();

    let project = store.list_all().unwrap().pop().unwrap();
    assert_eq!(project.title, "Café ☕ Project: 100%!");
    assert_eq!(
        project.description,
        "Description with émojis 🚀 and unicode: ñáéíóú"
    );
}

#[test]
fn list_all_on_empty_table_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn insert_new_accepts_prevalidated_input() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);
    let project = NewProject::new("Prebuilt", "from a form", "form.png").unwrap();

    let id = store.insert_new(&project).unwrap();

    assert_eq!(store.list_all().unwrap()[0].id, id);
}

#[test]
fn separate_instances_stay_isolated() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();
    let first = fresh_store(&first_dir);
    let second = fresh_store(&second_dir);

    first.initialize().unwrap();
    first.insert("Only here", "d", "i.png").unwrap();

    assert!(second.list_all().unwrap().is_empty());
    assert_eq!(first.list_all().unwrap().len(), 3);
}

#[test]
fn initialize_falls_back_when_preferred_dir_is_not_writable() {
    let root = tempfile::tempdir().unwrap();
    let blocker = root.path().join("blocker");
    fs::write(&blocker, b"file in the way").unwrap();
    let fallback = root.path().join("fallback");
    let store = ProjectStore::new(
        FallbackResolver::new(blocker.join("data"), &fallback),
        "projects.db",
    );

    assert_eq!(store.initialize().unwrap(), 2);

    assert_eq!(store.db_path().unwrap(), fallback.join("projects.db"));
    assert!(fallback.join("projects.db").is_file());
    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn path_is_resolved_on_every_call() {
    let root = tempfile::tempdir().unwrap();
    let preferred_parent = root.path().join("site");
    fs::write(&preferred_parent, b"blocks the preferred dir").unwrap();
    let preferred = preferred_parent.join("data");
    let fallback = root.path().join("fallback");
    let store = ProjectStore::new(FallbackResolver::new(&preferred, &fallback), "projects.db");

    store.initialize().unwrap();
    assert_eq!(store.list_all().unwrap().len(), 2);

    fs::remove_file(&preferred_parent).unwrap();

    assert_eq!(store.db_path().unwrap(), preferred.join("projects.db"));
    assert!(store.list_all().unwrap().is_empty());
}
