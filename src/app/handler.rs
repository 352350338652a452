//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes reader input and
//! worker responses, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the front end, the audio collaborator or the worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Every event runs to completion before the next one is handled, so state is
//! only ever touched from one logical thread.
//!
//! # Example
//!
//! ```rust
//! use ayah::app::{handle_event, AppState, Event};
//! use ayah::storage::ContentStore;
//! use ayah::ui::Theme;
//!
//! let mut state = AppState::new(ContentStore::default(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::ToggleSort)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), ayah::AyahError>(())
//! ```

use super::modes::Screen;
use super::state::FONT_SIZE_STEP;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Reciter;
use crate::worker::WorkerResponse;

/// Events triggered by reader input, audio completion or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the chapter list search text.
    QueryChanged(String),
    /// Flips the chapter list between ascending and descending order.
    ToggleSort,
    /// Switches between the light and dark themes.
    ToggleTheme,

    /// Opens the verse screen of a chapter.
    OpenChapter(u32),
    /// Returns to the chapter list.
    Back,

    /// Grows the verse text by one step.
    IncreaseFontSize,
    /// Shrinks the verse text by one step.
    DecreaseFontSize,

    /// Requests the translator list unless a request is outstanding.
    LoadTranslators,
    /// Selects a translator by edition identifier.
    SelectTranslator(String),
    /// Selects a reciter by id.
    SelectReciter(u32),

    /// Play/pause button.
    ///
    /// Starts from the first verse when stopped, pauses when playing.
    TogglePlayback,
    /// The audio collaborator finished the current verse.
    AudioFinished,

    /// Wraps a response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the view changed, and the side effects
/// to run in order.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` keeps the signature stable
/// for handlers that may fail.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::QueryChanged(query) => {
            if &state.query == query {
                return Ok((false, vec![]));
            }
            state.query.clone_from(query);
            tracing::trace!(query = %state.query, "search query updated");
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::ToggleSort => {
            state.sort = state.sort.toggle();
            tracing::debug!(sort = ?state.sort, "sort order toggled");
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            state.theme = state.theme.toggled();
            tracing::debug!(theme = %state.theme.name, "theme toggled");
            Ok((true, vec![]))
        }
        Event::OpenChapter(chapter_id) => {
            let mut actions = vec![];

            if state.screen.chapter_id() == Some(*chapter_id) {
                tracing::debug!(chapter_id = chapter_id, "chapter already open");
                return Ok((false, actions));
            }

            actions.extend(state.sequencer.reset().and_then(|c| state.playback_action(c)));
            state.screen = Screen::VerseList { chapter_id: *chapter_id };
            state.translations.clear();
            state.in_flight = None;

            if state.open_chapter().is_none() {
                tracing::debug!(chapter_id = chapter_id, "chapter not found, showing placeholder");
                return Ok((true, actions));
            }

            tracing::debug!(chapter_id = chapter_id, "chapter opened");

            actions.extend(state.request_translators());
            actions.extend(state.request_translation());
            Ok((true, actions))
        }
        Event::Back => {
            if state.screen == Screen::ChapterList {
                return Ok((false, vec![]));
            }

            let actions: Vec<Action> = state
                .sequencer
                .reset()
                .and_then(|c| state.playback_action(c))
                .into_iter()
                .collect();

            state.screen = Screen::ChapterList;
            state.translations.clear();
            state.in_flight = None;
            tracing::debug!("returned to chapter list");
            Ok((true, actions))
        }
        Event::IncreaseFontSize => {
            let before = state.font_size;
            state.set_font_size(before.saturating_add(FONT_SIZE_STEP));
            Ok((state.font_size != before, vec![]))
        }
        Event::DecreaseFontSize => {
            let before = state.font_size;
            state.set_font_size(before.saturating_sub(FONT_SIZE_STEP));
            Ok((state.font_size != before, vec![]))
        }
        Event::LoadTranslators => Ok((false, state.request_translators().into_iter().collect())),
        Event::SelectTranslator(identifier) => {
            let Some(translator) = state.translators.iter().find(|t| &t.identifier == identifier).cloned() else {
                tracing::debug!(translator_id = %identifier, "unknown translator, ignoring");
                return Ok((false, vec![]));
            };

            tracing::debug!(translator_id = %translator.identifier, "translator selected");
            state.selected_translator = Some(translator);
            Ok((true, state.request_translation().into_iter().collect()))
        }
        Event::SelectReciter(id) => {
            let Some(reciter) = Reciter::by_id(*id) else {
                tracing::debug!(reciter_id = id, "unknown reciter, ignoring");
                return Ok((false, vec![]));
            };

            state.reciter = reciter;
            tracing::debug!(reciter_id = id, playing = state.sequencer.is_playing(), "reciter selected");

            let actions = state
                .sequencer
                .reissue()
                .and_then(|c| state.playback_action(c))
                .into_iter()
                .collect();
            Ok((true, actions))
        }
        Event::TogglePlayback => {
            let command = if state.sequencer.is_playing() {
                state.sequencer.stop()
            } else {
                let Some(chapter) = state.screen.chapter_id().and_then(|id| state.content.chapter(id)) else {
                    tracing::debug!("no chapter open, nothing to play");
                    return Ok((false, vec![]));
                };
                state.sequencer.start(chapter)
            };

            let actions = command.and_then(|c| state.playback_action(c)).into_iter().collect();
            Ok((true, actions))
        }
        Event::AudioFinished => {
            let actions: Vec<Action> = state
                .sequencer
                .on_item_finished()
                .and_then(|c| state.playback_action(c))
                .into_iter()
                .collect();
            Ok((!actions.is_empty(), actions))
        }
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::TranslatorsLoaded { translators } => {
            state.translators_requested = false;
            state.translators.clone_from(translators);
            tracing::debug!(count = translators.len(), "translators loaded");

            let kept = state.selected_translator.as_ref().and_then(|selected| {
                state
                    .translators
                    .iter()
                    .find(|t| t.identifier == selected.identifier)
                    .cloned()
            });

            if let Some(translator) = kept {
                state.selected_translator = Some(translator);
                return Ok((true, vec![]));
            }

            state.selected_translator = state.translators.first().cloned();
            tracing::debug!(
                translator_id = ?state.selected_translator.as_ref().map(|t| &t.identifier),
                "selected first translator"
            );
            Ok((true, state.request_translation().into_iter().collect()))
        }
        WorkerResponse::TranslationLoaded { ticket, verses } => {
            if !state.is_current(ticket) {
                tracing::debug!(
                    generation = ticket.generation,
                    chapter_id = ticket.chapter_id,
                    translator_id = %ticket.translator_id,
                    "discarding superseded translation"
                );
                return Ok((false, vec![]));
            }

            state.in_flight = None;
            state.translations.clone_from(verses);
            tracing::debug!(verse_count = verses.len(), "translation applied");
            Ok((true, vec![]))
        }
        WorkerResponse::Error {
            operation,
            message,
            ticket,
        } => {
            tracing::warn!(operation = %operation, error = %message, "worker request failed, keeping previous state");

            match ticket {
                Some(ticket) if state.is_current(ticket) => state.in_flight = None,
                Some(_) => {}
                None => state.translators_requested = false,
            }
            Ok((false, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Chapter, TranslatedVerse, Translator, Verse};
    use crate::storage::ContentStore;
    use crate::ui::Theme;
    use crate::worker::{FetchTicket, WorkerMessage};

    fn chapter(id: u32, verses: u32) -> Chapter {
        Chapter {
            id,
            name: format!("name-{id}"),
            transliteration: format!("translit-{id}"),
            kind: "meccan".to_string(),
            total_verses: verses,
            verses: (1..=verses)
                .map(|v| Verse {
                    id: v,
                    text: format!("{id}:{v}"),
                })
                .collect(),
        }
    }

    fn state() -> AppState {
        AppState::new(
            ContentStore::from_chapters(vec![chapter(1, 2), chapter(2, 3)]),
            Theme::default(),
        )
    }

    fn translator(id: &str) -> Translator {
        Translator {
            identifier: id.to_string(),
            language: "fa".to_string(),
            name: format!("{id} name"),
            english_name: id.to_string(),
        }
    }

    fn fetch_ticket(actions: &[Action]) -> FetchTicket {
        actions
            .iter()
            .find_map(|a| match a {
                Action::PostToWorker(WorkerMessage::FetchTranslation { ticket }) => Some(ticket.clone()),
                _ => None,
            })
            .expect("a translation fetch")
    }

    fn send(state: &mut AppState, event: Event) -> Vec<Action> {
        handle_event(state, &event).unwrap().1
    }

    fn translators_loaded(ids: &[&str]) -> Event {
        Event::WorkerResponse(WorkerResponse::TranslatorsLoaded {
            translators: ids.iter().map(|id| translator(id)).collect(),
        })
    }

    #[test]
    fn opening_chapter_relists_translators_unless_pending() {
        let mut state = state();
        let actions = send(&mut state, Event::OpenChapter(1));
        assert_eq!(actions, vec![Action::PostToWorker(WorkerMessage::ListTranslators)]);

        send(&mut state, Event::Back);
        let actions = send(&mut state, Event::OpenChapter(2));
        assert!(actions.is_empty(), "list request still outstanding");

        send(&mut state, translators_loaded(&["a"]));
        send(&mut state, Event::Back);

        let actions = send(&mut state, Event::OpenChapter(1));
        assert_eq!(actions[0], Action::PostToWorker(WorkerMessage::ListTranslators));
        assert_eq!(fetch_ticket(&actions).chapter_id, 1);
    }

    #[test]
    fn chapter_change_keeps_selection_only_if_still_listed() {
        let mut state = state();
        send(&mut state, Event::OpenChapter(1));
        send(&mut state, translators_loaded(&["a", "b"]));
        send(&mut state, Event::SelectTranslator("b".to_string()));
        send(&mut state, Event::Back);

        let actions = send(&mut state, Event::OpenChapter(2));
        assert_eq!(actions[0], Action::PostToWorker(WorkerMessage::ListTranslators));
        assert_eq!(fetch_ticket(&actions).translator_id, "b");

        // Still offered: kept, and the fetch already issued stays current.
        let in_flight = state.in_flight.clone();
        assert!(send(&mut state, translators_loaded(&["a", "b"])).is_empty());
        assert_eq!(state.selected_translator.as_ref().unwrap().identifier, "b");
        assert_eq!(state.in_flight, in_flight);

        send(&mut state, Event::Back);
        send(&mut state, Event::OpenChapter(1));

        // No longer offered: replaced by the first one and refetched.
        let actions = send(&mut state, translators_loaded(&["c", "a"]));
        assert_eq!(state.selected_translator.as_ref().unwrap().identifier, "c");
        assert_eq!(state.translators.len(), 2);
        let ticket = fetch_ticket(&actions);
        assert_eq!((ticket.chapter_id, ticket.translator_id.as_str()), (1, "c"));
    }

    #[test]
    fn load_translators_skips_only_while_pending() {
        let mut state = state();
        assert_eq!(
            send(&mut state, Event::LoadTranslators),
            vec![Action::PostToWorker(WorkerMessage::ListTranslators)]
        );
        assert!(send(&mut state, Event::LoadTranslators).is_empty());

        send(&mut state, translators_loaded(&["a"]));
        assert!(state.in_flight.is_none(), "no chapter open, nothing to fetch");
        assert_eq!(
            send(&mut state, Event::LoadTranslators),
            vec![Action::PostToWorker(WorkerMessage::ListTranslators)]
        );
    }

    #[test]
    fn failed_translator_list_can_be_retried() {
        let mut state = state();
        send(&mut state, Event::OpenChapter(1));
        assert!(send(&mut state, Event::LoadTranslators).is_empty());

        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::Error {
                operation: "list translators".to_string(),
                message: "offline".to_string(),
                ticket: None,
            }),
        );
        assert!(state.translators.is_empty());

        assert_eq!(
            send(&mut state, Event::LoadTranslators),
            vec![Action::PostToWorker(WorkerMessage::ListTranslators)]
        );
    }

    #[test]
    fn first_translator_is_auto_selected_and_fetched() {
        let mut state = state();
        send(&mut state, Event::OpenChapter(2));

        let actions = send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::TranslatorsLoaded {
                translators: vec![translator("fa.makarem"), translator("fa.ansarian")],
            }),
        );

        let ticket = fetch_ticket(&actions);
        assert_eq!(ticket.chapter_id, 2);
        assert_eq!(ticket.translator_id, "fa.makarem");

        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::TranslationLoaded {
                ticket,
                verses: vec![TranslatedVerse {
                    number: 8,
                    text: "t".to_string(),
                }],
            }),
        );
        assert_eq!(state.translations.len(), 1);
    }

    #[test]
    fn superseded_translation_is_discarded() {
        let mut state = state();
        send(&mut state, Event::OpenChapter(1));
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::TranslatorsLoaded {
                translators: vec![translator("a"), translator("b")],
            }),
        );
        let first = state.in_flight.clone().unwrap();

        let second = fetch_ticket(&send(&mut state, Event::SelectTranslator("b".to_string())));
        assert_ne!(first, second);

        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::TranslationLoaded {
                ticket: first,
                verses: vec![TranslatedVerse {
                    number: 1,
                    text: "stale".to_string(),
                }],
            }),
        )
        .unwrap();
        assert!(!render);
        assert!(state.translations.is_empty());

        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::TranslationLoaded {
                ticket: second,
                verses: vec![TranslatedVerse {
                    number: 1,
                    text: "fresh".to_string(),
                }],
            }),
        );
        assert_eq!(state.translations[0].text, "fresh");
    }

    #[test]
    fn fetch_failure_keeps_previous_translation() {
        let mut state = state();
        send(&mut state, Event::OpenChapter(1));
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::TranslatorsLoaded {
                translators: vec![translator("a"), translator("b")],
            }),
        );
        let ticket = state.in_flight.clone().unwrap();
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::TranslationLoaded {
                ticket,
                verses: vec![TranslatedVerse {
                    number: 1,
                    text: "kept".to_string(),
                }],
            }),
        );

        let failed = fetch_ticket(&send(&mut state, Event::SelectTranslator("b".to_string())));
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::Error {
                operation: "fetch translation".to_string(),
                message: "offline".to_string(),
                ticket: Some(failed),
            }),
        );

        assert_eq!(state.translations[0].text, "kept");
        assert!(state.in_flight.is_none());
    }

    #[test]
    fn playback_walks_chapter_and_stops() {
        let mut state = state();
        send(&mut state, Event::OpenChapter(1));

        let actions = send(&mut state, Event::TogglePlayback);
        assert_eq!(
            actions,
            vec![Action::PlayAudio {
                url: "https://quranaudio.pages.dev/1/1_1.mp3".to_string(),
                verse_index: 0,
            }]
        );

        let actions = send(&mut state, Event::AudioFinished);
        assert!(matches!(&actions[..], [Action::PlayAudio { verse_index: 1, .. }]));

        let actions = send(&mut state, Event::AudioFinished);
        assert_eq!(actions, vec![Action::StopAudio]);
        assert!(!state.sequencer.is_playing());
        assert_eq!(state.sequencer.index(), 1);
    }

    #[test]
    fn toggle_while_playing_pauses_and_restart_begins_at_first_verse() {
        let mut state = state();
        send(&mut state, Event::OpenChapter(2));
        send(&mut state, Event::TogglePlayback);
        send(&mut state, Event::AudioFinished);

        assert_eq!(send(&mut state, Event::TogglePlayback), vec![Action::StopAudio]);
        assert_eq!(state.sequencer.index(), 1);

        let actions = send(&mut state, Event::TogglePlayback);
        assert!(matches!(&actions[..], [Action::PlayAudio { verse_index: 0, .. }]));
    }

    #[test]
    fn reciter_change_reissues_current_verse() {
        let mut state = state();
        send(&mut state, Event::OpenChapter(2));
        send(&mut state, Event::TogglePlayback);
        send(&mut state, Event::AudioFinished);

        let actions = send(&mut state, Event::SelectReciter(3));
        assert_eq!(
            actions,
            vec![Action::PlayAudio {
                url: "https://quranaudio.pages.dev/3/2_2.mp3".to_string(),
                verse_index: 1,
            }]
        );
        assert_eq!(state.sequencer.index(), 1);
    }

    #[test]
    fn reciter_change_while_stopped_emits_nothing() {
        let mut state = state();
        send(&mut state, Event::OpenChapter(2));
        assert!(send(&mut state, Event::SelectReciter(2)).is_empty());
        assert_eq!(state.reciter.id, 2);
        assert!(send(&mut state, Event::SelectReciter(42)).is_empty());
        assert_eq!(state.reciter.id, 2);
    }

    #[test]
    fn leaving_chapter_stops_and_resets_playback() {
        let mut state = state();
        send(&mut state, Event::OpenChapter(2));
        send(&mut state, Event::TogglePlayback);
        send(&mut state, Event::AudioFinished);

        assert_eq!(send(&mut state, Event::Back), vec![Action::StopAudio]);
        assert_eq!(state.sequencer.index(), 0);
        assert!(!state.sequencer.is_playing());
        assert_eq!(state.screen, Screen::ChapterList);
    }

    #[test]
    fn unknown_chapter_shows_placeholder_without_requests() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::OpenChapter(404)).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(send(&mut state, Event::TogglePlayback).is_empty());
    }

    #[test]
    fn toggle_on_chapter_list_plays_nothing() {
        let mut state = state();
        assert!(send(&mut state, Event::TogglePlayback).is_empty());
        assert!(!state.sequencer.is_playing());
    }

    #[test]
    fn query_and_sort_drive_filtered_list() {
        let mut state = state();
        send(&mut state, Event::QueryChanged("TRANSLIT-2".to_string()));
        assert_eq!(state.filtered_chapters.len(), 1);

        send(&mut state, Event::QueryChanged(String::new()));
        send(&mut state, Event::ToggleSort);
        let ids: Vec<u32> = state.filtered_chapters.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn font_size_steps_by_two() {
        let mut state = state();
        send(&mut state, Event::IncreaseFontSize);
        assert_eq!(state.font_size, 20);
        send(&mut state, Event::DecreaseFontSize);
        send(&mut state, Event::DecreaseFontSize);
        assert_eq!(state.font_size, 16);
    }

    #[test]
    fn theme_toggle() {
        let mut state = state();
        send(&mut state, Event::ToggleTheme);
        assert!(state.theme.dark);
        send(&mut state, Event::ToggleTheme);
        assert!(!state.theme.dark);
    }
}
