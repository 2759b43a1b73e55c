use potion_core::db::open_db_in_memory;
use potion_core::view::task_view::TaskListView;
use potion_core::{
    BrewError, Category, CoreObserver, InMemoryKvStore, KvStore, Language, MoodAlchemy, MoodKind,
    NarrativeError, Potion, SqliteKvStore, StoreError, StoreResult, Task,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// In-memory store whose writes can be switched to fail.
#[derive(Default)]
struct FlakyStore {
    inner: InMemoryKvStore,
    fail_writes: Cell<bool>,
}

impl KvStore for FlakyStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::Backend("disk full".to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        self.inner.remove(key)
    }
}

#[derive(Clone, Default)]
struct RecordingObserver {
    events: Rc<RefCell<Vec<String>>>,
}

impl CoreObserver for RecordingObserver {
    fn tasks_changed(&self, tasks: &[Task]) {
        self.events.borrow_mut().push(format!("tasks:{}", tasks.len()));
    }

    fn potion_brewed(&self, potion: &Potion) {
        self.events
            .borrow_mut()
            .push(format!("potion:{}", potion.task_count));
    }

    fn language_changed(&self, language: Language) {
        self.events.borrow_mut().push(format!("language:{language}"));
    }
}

#[test]
fn end_to_end_brew_produces_expected_story() {
    let conn = open_db_in_memory().unwrap();
    let mut app = MoodAlchemy::load(SqliteKvStore::new(&conn)).unwrap();

    let task = app.add_task("Buy milk", Category::Home).unwrap();
    app.toggle_task(task.id).unwrap();
    app.select_mood(MoodKind::Energy);
    app.set_diary_note("felt great");

    let potion = app.brew_potion().unwrap();
    assert_eq!(potion.task_count, 1);
    assert_eq!(potion.task_categories, vec![Category::Home]);

    let story = app.story(&potion);
    let clause = story
        .find(" This magical brew is enhanced infused with warmth and comfort.")
        .unwrap();
    let count = story
        .find(" With 1 task completed, your potion is truly one of a kind.")
        .unwrap();
    let note = story
        .find(" The essence of \"felt great\" adds a personal touch to this unique creation.")
        .unwrap();
    assert!(clause < count && count < note);
}

#[test]
fn brew_resets_session_but_rejected_brew_keeps_it() {
    let kv = InMemoryKvStore::new();
    let mut app = MoodAlchemy::load(&kv).unwrap();

    app.set_diary_note("draft");
    let err = app.brew_potion().unwrap_err();
    assert!(matches!(err, BrewError::NoMoodSelected));
    assert_eq!(app.diary_note(), "draft");
    assert!(app.potions().is_empty());

    app.select_mood(MoodKind::Calm);
    app.brew_potion().unwrap();
    assert!(app.current_mood().is_none());
    assert_eq!(app.diary_note(), "");
    assert_eq!(app.potions().len(), 1);
}

#[test]
fn observers_are_notified_of_changes() {
    let kv = InMemoryKvStore::new();
    let mut app = MoodAlchemy::load(&kv).unwrap();
    let observer = RecordingObserver::default();
    app.register_observer(Box::new(observer.clone()));

    let task = app.add_task("Read", Category::Hobby).unwrap();
    app.toggle_task(task.id).unwrap();
    assert!(app.add_task(" ", Category::Hobby).is_err());
    app.select_mood(MoodKind::Joy);
    app.brew_potion().unwrap();
    assert!(!app.remove_task(uuid::Uuid::new_v4()).unwrap());
    assert!(app.remove_task(task.id).unwrap());
    app.toggle_language().unwrap();

    assert_eq!(
        *observer.events.borrow(),
        vec![
            "tasks:1".to_string(),
            "tasks:1".to_string(),
            "potion:1".to_string(),
            "tasks:0".to_string(),
            "language:ru".to_string(),
        ]
    );
}

#[test]
fn language_choice_drives_story_and_persists() {
    let kv = InMemoryKvStore::new();
    {
        let mut app = MoodAlchemy::load(&kv).unwrap();
        assert_eq!(app.language(), Language::En);
        assert_eq!(app.toggle_language().unwrap(), Language::Ru);
        app.select_mood(MoodKind::Sadness);
        let potion = app.brew_potion().unwrap();
        assert!(app.story(&potion).starts_with("Нежный фиолетовый эликсир"));
    }

    let app = MoodAlchemy::load(&kv).unwrap();
    assert_eq!(app.language(), Language::Ru);
    assert_eq!(app.potions().len(), 1);
    assert_eq!(
        app.task_list_view(),
        TaskListView::Empty("Пока нет задач. Добавьте первую задачу!")
    );
}

#[test]
fn diary_note_length_counts_characters() {
    let kv = InMemoryKvStore::new();
    let mut app = MoodAlchemy::load(&kv).unwrap();
    app.set_diary_note("привет");
    assert_eq!(app.diary_note_len(), 6);
}

#[test]
fn visual_and_details_follow_current_language() {
    let kv = InMemoryKvStore::new();
    let mut app = MoodAlchemy::load(&kv).unwrap();
    let task = app.add_task("Yoga", Category::Relaxation).unwrap();
    app.toggle_task(task.id).unwrap();
    app.select_mood(MoodKind::Calm);
    let potion = app.brew_potion().unwrap();

    let visual = app.potion_visual(&potion).unwrap();
    assert_eq!(visual.base_color, "#e6e6fa");
    assert_eq!(visual.highlight_color, "#ffffff");
    assert_eq!(visual.sparkle_count, 1);
    assert_eq!(visual.bubble_count, 2);

    let details = app.potion_details(&potion);
    assert_eq!(details.mood_name, "Calm");
    assert_eq!(details.task_lines, vec!["🧘 Yoga".to_string()]);
    assert_eq!(details.note, None);
}

#[test]
fn session_loads_when_a_stored_potion_has_unknown_mood() {
    let kv = InMemoryKvStore::new();
    let joy = {
        let mut app = MoodAlchemy::load(&kv).unwrap();
        app.add_task("Water plants", Category::Home).unwrap();
        app.select_mood(MoodKind::Joy);
        app.brew_potion().unwrap()
    };
    let raw = kv.get("potions").unwrap().unwrap();
    let mut snapshot: serde_json::Value = serde_json::from_str(&raw).unwrap();
    snapshot["items"].as_array_mut().unwrap().push(serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "createdAt": 0,
        "mood": { "mood": "euphoria", "color": "#123456" },
        "tasks": [],
        "diaryNote": "",
        "taskCategories": [],
        "taskCount": 0
    }));
    kv.set("potions", &snapshot.to_string()).unwrap();

    let app = MoodAlchemy::load(&kv).unwrap();
    assert_eq!(app.tasks().len(), 1);
    assert_eq!(app.potions().len(), 1);
    assert_eq!(app.story(&app.potions()[0]), app.story(&joy));
    assert_eq!(app.foreign_potions().len(), 1);
    assert_eq!(
        app.foreign_stories(),
        vec![Err(NarrativeError::UnknownMood("euphoria".to_string()))]
    );
}

#[test]
fn failed_brew_write_still_notifies_and_resets_session() {
    let kv = FlakyStore::default();
    let mut app = MoodAlchemy::load(&kv).unwrap();
    let observer = RecordingObserver::default();
    app.register_observer(Box::new(observer.clone()));

    let task = app.add_task("Paint", Category::Hobby).unwrap();
    app.toggle_task(task.id).unwrap();
    app.select_mood(MoodKind::Calm);
    app.set_diary_note("quiet evening");

    kv.fail_writes.set(true);
    let err = app.brew_potion().unwrap_err();
    assert!(matches!(
        err,
        BrewError::Persistence(StoreError::Backend(_))
    ));
    assert_eq!(app.potions().len(), 1);
    assert_eq!(app.potions()[0].diary_note, "quiet evening");
    assert!(app.current_mood().is_none());
    assert_eq!(app.diary_note(), "");
    assert_eq!(observer.events.borrow().last().unwrap(), "potion:1");
    assert!(app.flush().is_err());

    kv.fail_writes.set(false);
    app.flush().unwrap();
    let reloaded = MoodAlchemy::load(&kv).unwrap();
    assert_eq!(reloaded.potions().len(), 1);
    assert_eq!(reloaded.potions()[0].id, app.potions()[0].id);
}
