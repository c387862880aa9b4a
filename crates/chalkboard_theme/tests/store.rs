use std::sync::{Arc, Barrier, Mutex};
use std::thread;
use std::time::Duration;

use chalkboard_theme::{
    FileStorage, MemoryStorage, Mode, ModeStorage, StorageError, ThemeStore, STORAGE_KEY,
};

/// Memory storage whose writes of one value take a while
struct SlowStorage {
    inner: MemoryStorage,
    slow_value: &'static str,
    delay: Duration,
}

impl ModeStorage for SlowStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if value == self.slow_value {
            thread::sleep(self.delay);
        }
        self.inner.write(key, value)
    }
}

#[test]
fn two_toggles_round_trip_mode_and_persisted_value() {
    let storage = MemoryStorage::new();
    let store = ThemeStore::new(storage.clone());
    assert_eq!(store.mode(), Mode::Dark);

    assert_eq!(store.toggle(), Mode::Light);
    assert_eq!(store.mode(), Mode::Light);
    assert_eq!(storage.get(STORAGE_KEY).as_deref(), Some("light"));

    assert_eq!(store.toggle(), Mode::Dark);
    assert_eq!(store.mode(), Mode::Dark);
    assert_eq!(storage.get(STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn invalid_persisted_value_starts_dark() {
    let store = ThemeStore::new(MemoryStorage::with_value(STORAGE_KEY, "solarized"));
    assert_eq!(store.mode(), Mode::Dark);
}

#[test]
fn listener_sees_each_toggle_once_with_new_mode() {
    let store = ThemeStore::new(MemoryStorage::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = store.subscribe(move |mode| sink.lock().unwrap().push(mode));

    store.toggle();
    assert_eq!(*seen.lock().unwrap(), vec![Mode::Light]);

    store.toggle();
    assert_eq!(*seen.lock().unwrap(), vec![Mode::Light, Mode::Dark]);
}

#[test]
fn every_subscriber_is_notified() {
    let store = ThemeStore::new(MemoryStorage::new());
    let seen = Arc::new(Mutex::new(Vec::new()));

    let subs: Vec<_> = (0..3)
        .map(|i| {
            let sink = seen.clone();
            store.subscribe(move |mode| sink.lock().unwrap().push((i, mode)))
        })
        .collect();

    store.toggle();

    let mut calls = seen.lock().unwrap().clone();
    calls.sort_by_key(|(i, _)| *i);
    assert_eq!(calls, vec![(0, Mode::Light), (1, Mode::Light), (2, Mode::Light)]);
    drop(subs);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn listener_can_read_store_during_notification() {
    let store = Arc::new(ThemeStore::new(MemoryStorage::new()));
    let observed = Arc::new(Mutex::new(None));

    let reader = Arc::downgrade(&store);
    let sink = observed.clone();
    let _sub = store.subscribe(move |_| {
        if let Some(store) = reader.upgrade() {
            *sink.lock().unwrap() = Some(store.mode());
        }
    });

    store.toggle();
    assert_eq!(*observed.lock().unwrap(), Some(Mode::Light));
}

#[test]
fn file_backed_mode_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");

    {
        let store = ThemeStore::new(FileStorage::new(&path));
        assert_eq!(store.mode(), Mode::Dark);
        store.toggle();
    }

    let restored = ThemeStore::new(FileStorage::new(&path));
    assert_eq!(restored.mode(), Mode::Light);
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("theme = \"light\""), "{contents}");
}

#[test]
fn unreadable_state_file_starts_dark_and_is_repaired() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");
    std::fs::write(&path, "[[[ not toml").unwrap();

    let store = ThemeStore::new(FileStorage::new(&path));
    assert_eq!(store.mode(), Mode::Dark);
    store.toggle();

    let restored = ThemeStore::new(FileStorage::new(&path));
    assert_eq!(restored.mode(), Mode::Light);
}

#[test]
fn concurrent_toggles_persist_the_final_mode() {
    let memory = MemoryStorage::new();
    let store = Arc::new(ThemeStore::new(SlowStorage {
        inner: memory.clone(),
        slow_value: "light",
        delay: Duration::from_millis(50),
    }));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = store.subscribe(move |mode| sink.lock().unwrap().push(mode));

    let start = Arc::new(Barrier::new(2));
    let first = {
        let (store, start) = (store.clone(), start.clone());
        thread::spawn(move || {
            start.wait();
            store.toggle()
        })
    };
    let second = {
        let (store, start) = (store.clone(), start.clone());
        thread::spawn(move || {
            start.wait();
            thread::sleep(Duration::from_millis(10));
            store.toggle()
        })
    };
    let mut returned = vec![first.join().unwrap(), second.join().unwrap()];
    returned.sort_by_key(|mode| mode.as_str());

    assert_eq!(returned, vec![Mode::Dark, Mode::Light]);
    assert_eq!(store.mode(), Mode::Dark);
    assert_eq!(memory.get(STORAGE_KEY).as_deref(), Some(store.mode().as_str()));

    let mut heard = seen.lock().unwrap().clone();
    heard.sort_by_key(|mode| mode.as_str());
    assert_eq!(heard, vec![Mode::Dark, Mode::Light]);
}
