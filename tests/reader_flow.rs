use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ayah::app::{Driver, Screen};
use ayah::translation::TranslationApi;
use ayah::ui::{render_to_string, UIViewModel, UNKNOWN_CHAPTER_TITLE};
use ayah::worker::WorkerHandle;
use ayah::{initialize, Action, AyahError, Config, Event, Result, TranslatedVerse, Translator};

const TIMEOUT: Duration = Duration::from_secs(5);

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/quran.json")
}

fn config() -> Config {
    Config {
        data_file: fixture(),
        ..Config::default()
    }
}

/// In-memory API that records the requests it serves.
#[derive(Clone, Default)]
struct FakeApi {
    calls: Arc<Mutex<Vec<String>>>,
    fail_translations: bool,
}

impl FakeApi {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl TranslationApi for FakeApi {
    fn list_translators(&self) -> Result<Vec<Translator>> {
        self.calls.lock().unwrap().push("list".to_string());
        Ok(["fa.makarem", "fa.ansarian"]
            .iter()
            .map(|id| Translator {
                identifier: (*id).to_string(),
                language: "fa".to_string(),
                name: format!("name of {id}"),
                english_name: (*id).to_string(),
            })
            .collect())
    }

    fn fetch_translation(&self, chapter_id: u32, translator_id: &str) -> Result<Vec<TranslatedVerse>> {
        self.calls.lock().unwrap().push(format!("{chapter_id}/{translator_id}"));
        if self.fail_translations {
            return Err(AyahError::Api {
                code: 503,
                status: "Service Unavailable".to_string(),
            });
        }
        // One item short, so the last verse has no translation.
        Ok((1..=2)
            .map(|n| TranslatedVerse {
                number: n,
                text: format!("{translator_id} {chapter_id}:{n}"),
            })
            .collect())
    }
}

fn driver(api: &FakeApi) -> Driver {
    Driver::new(initialize(&config()), Some(WorkerHandle::spawn(api.clone()).unwrap()))
}

#[test]
fn fixture_content_loads() {
    let state = initialize(&config());
    assert_eq!(state.content.len(), 3);
    assert_eq!(state.filtered_chapters.len(), 3);
}

#[test]
fn reading_a_chapter_fetches_translators_then_translation() {
    let api = FakeApi::default();
    let mut driver = driver(&api);

    driver.dispatch(&Event::OpenChapter(1)).unwrap();
    driver.settle(TIMEOUT).unwrap();

    assert_eq!(api.calls(), vec!["list", "1/fa.makarem"]);

    let UIViewModel::VerseList(view) = driver.state().compute_viewmodel() else {
        panic!("expected verse list");
    };
    assert_eq!(view.title, "الفاتحة");
    assert_eq!(view.translator_label, "name of fa.makarem");
    let translations: Vec<Option<&str>> = view.rows.iter().map(|r| r.translation.as_deref()).collect();
    assert_eq!(translations, vec![Some("fa.makarem 1:1"), Some("fa.makarem 1:2"), None]);
}

#[test]
fn switching_translator_discards_superseded_result() {
    let api = FakeApi::default();
    let mut driver = driver(&api);

    // Selecting before the list arrives is ignored: the translator is unknown.
    driver.dispatch(&Event::OpenChapter(2)).unwrap();
    driver.dispatch(&Event::SelectTranslator("fa.ansarian".to_string())).unwrap();

    // The list arrives and the first translator's fetch goes out.
    assert!(driver.receive_one(TIMEOUT).unwrap());
    assert_eq!(driver.pending(), 1);

    // Switch before that fetch answers; its result must not win.
    driver.dispatch(&Event::SelectTranslator("fa.ansarian".to_string())).unwrap();
    driver.settle(TIMEOUT).unwrap();

    assert_eq!(api.calls(), vec!["list", "2/fa.makarem", "2/fa.ansarian"]);
    let state = driver.state();
    assert_eq!(state.translations[0].text, "fa.ansarian 2:1");
    assert_eq!(state.selected_translator.as_ref().unwrap().identifier, "fa.ansarian");
}

#[test]
fn chapter_change_relists_translators_and_keeps_offered_selection() {
    let api = FakeApi::default();
    let mut driver = driver(&api);

    driver.dispatch(&Event::OpenChapter(1)).unwrap();
    driver.settle(TIMEOUT).unwrap();
    driver.dispatch(&Event::SelectTranslator("fa.ansarian".to_string())).unwrap();
    driver.settle(TIMEOUT).unwrap();

    driver.dispatch(&Event::Back).unwrap();
    driver.dispatch(&Event::OpenChapter(112)).unwrap();
    driver.settle(TIMEOUT).unwrap();

    assert_eq!(
        api.calls(),
        vec!["list", "1/fa.makarem", "1/fa.ansarian", "list", "112/fa.ansarian"]
    );
    let state = driver.state();
    assert_eq!(state.translators.len(), 2);
    assert_eq!(state.selected_translator.as_ref().unwrap().identifier, "fa.ansarian");
    assert_eq!(state.translations[0].text, "fa.ansarian 112:1");
}

#[test]
fn failed_fetch_leaves_reader_usable() {
    let api = FakeApi {
        fail_translations: true,
        ..FakeApi::default()
    };
    let mut driver = driver(&api);

    driver.dispatch(&Event::OpenChapter(1)).unwrap();
    driver.settle(TIMEOUT).unwrap();

    let state = driver.state();
    assert!(state.translations.is_empty());
    assert_eq!(state.translators.len(), 2);
    assert_eq!(state.screen, Screen::VerseList { chapter_id: 1 });

    let screen = render_to_string(&state.compute_viewmodel(), &state.theme, 80);
    assert!(screen.contains("(1)"));
}

#[test]
fn unknown_chapter_renders_placeholder_without_network() {
    let api = FakeApi::default();
    let mut driver = driver(&api);

    driver.dispatch(&Event::OpenChapter(115)).unwrap();
    driver.settle(TIMEOUT).unwrap();

    assert!(api.calls().is_empty());
    let UIViewModel::VerseList(view) = driver.state().compute_viewmodel() else {
        panic!("expected verse list");
    };
    assert_eq!(view.title, UNKNOWN_CHAPTER_TITLE);
}

#[test]
fn recitation_plays_every_verse_in_order() {
    let mut driver = Driver::new(initialize(&config()), None);

    driver.dispatch(&Event::OpenChapter(1)).unwrap();
    driver.dispatch(&Event::SelectReciter(2)).unwrap();
    driver.dispatch(&Event::TogglePlayback).unwrap();

    let mut urls = vec![];
    while let Some(action) = driver.next_audio() {
        match action {
            Action::PlayAudio { url, .. } => {
                urls.push(url);
                driver.dispatch(&Event::AudioFinished).unwrap();
            }
            Action::StopAudio => break,
            Action::PostToWorker(_) => unreachable!("worker requests are not queued as audio"),
        }
    }

    assert_eq!(
        urls,
        vec![
            "https://quranaudio.pages.dev/2/1_1.mp3",
            "https://quranaudio.pages.dev/2/1_2.mp3",
            "https://quranaudio.pages.dev/2/1_3.mp3",
        ]
    );
    assert!(!driver.state().sequencer.is_playing());
}

#[test]
fn chapter_search_matches_either_name() {
    let mut driver = Driver::new(initialize(&config()), None);

    driver.dispatch(&Event::QueryChanged("baq".to_string())).unwrap();
    let ids: Vec<u32> = driver.state().filtered_chapters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2]);

    driver.dispatch(&Event::QueryChanged("الإخلاص".to_string())).unwrap();
    let ids: Vec<u32> = driver.state().filtered_chapters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![112]);

    driver.dispatch(&Event::QueryChanged(String::new())).unwrap();
    driver.dispatch(&Event::ToggleSort).unwrap();
    let ids: Vec<u32> = driver.state().filtered_chapters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![112, 2, 1]);
}
