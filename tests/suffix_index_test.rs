//! Integration tests for the suffix index.
//! Exercises the public API the way a caller outside the crate sees it.

use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::thread;

use suffix_index_lib::config::input::InputConfig;
use suffix_index_lib::corpus::load_words;
use suffix_index_lib::{SuffixIndex, SuffixIndexError};

#[test]
fn test_word_and_suffix_queries() {
    let index = SuffixIndex::from(["banana", "bandana", "ana"]);

    assert!(index.search("banana"));
    assert!(index.search("ana"));
    assert!(!index.search("ban"));

    // "ana" is a stored word and also a suffix of both longer words.
    assert!(index.ends_with("ana"));
    assert!(index.ends_with("nana"));
    assert!(index.ends_with("dana"));
    assert!(!index.ends_with("banana"));
    assert!(!index.ends_with("band"));

    assert!(index.check_invariants().is_ok());
}

#[test]
fn test_error_reporting_through_try_variants() {
    let mut index = SuffixIndex::new();

    assert_eq!(index.try_insert("word"), Ok(()));
    assert_eq!(
        index.try_insert("word"),
        Err(SuffixIndexError::DuplicateWord("word".to_string()))
    );
    assert_eq!(
        index.try_erase("ord"),
        Err(SuffixIndexError::UnknownWord("ord".to_string()))
    );
    assert_eq!(index.try_erase(""), Err(SuffixIndexError::EmptyWord));
    assert!(index.ends_with("ord"));
}

#[test]
fn test_insert_erase_restores_previous_tree() {
    let base = SuffixIndex::from(["abde", "abc", "b"]);
    let mut index = base.clone();

    assert!(index.insert("abd"));
    assert_eq!(index.size(), 12);
    assert!(index.erase("abd"));

    assert_eq!(index, base);
    assert!(index.check_invariants().is_ok());
}

#[test]
fn test_shared_index_behind_external_lock() {
    const THREAD_COUNT: usize = 4;
    const WORDS_PER_THREAD: usize = 25;

    let index = Arc::new(Mutex::new(SuffixIndex::new()));
    let mut handles = Vec::with_capacity(THREAD_COUNT);

    for thread_id in 0..THREAD_COUNT {
        let index = Arc::clone(&index);
        handles.push(thread::spawn(move || {
            for j in 0..WORDS_PER_THREAD {
                let word = format!("w{thread_id}x{j}");
                assert!(index.lock().unwrap().insert(&word));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let index = index.lock().unwrap();
    assert_eq!(index.word_count(), THREAD_COUNT * WORDS_PER_THREAD);
    assert!(index.search("w3x24"));
    assert!(index.ends_with("x24"));
    assert!(index.check_invariants().is_ok());
}

#[test]
fn test_corpus_loading_builds_same_index() {
    let corpus = "abde\nabc\nb\nabd\nb\n";
    let (loaded, report) = load_words(Cursor::new(corpus), &InputConfig::default()).unwrap();

    assert_eq!(report.inserted, 4);
    assert_eq!(report.duplicates, 1);
    assert_eq!(loaded, SuffixIndex::from(["abde", "abc", "b", "abd"]));
    assert_eq!(loaded.words(), vec!["abc", "abd", "abde", "b"]);
}
