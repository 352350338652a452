//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! front end (main.rs, or any embedding UI) and the domain/storage/worker
//! layers. It implements the event-driven architecture behind both screens.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Reader Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                             ↑                                  ↓
//!                             └──── Worker / Audio Completions ──┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`driver`]: Runs actions against the worker and queues audio
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Screen navigation state
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use ayah::app::{handle_event, Action, AppState, Event};
//! use ayah::domain::Chapter;
//! use ayah::storage::ContentStore;
//! use ayah::ui::Theme;
//!
//! let chapter: Chapter = serde_json::from_str(
//!     r#"{"id":1,"name":"الفاتحة","transliteration":"Al-Fatihah","type":"meccan",
//!         "total_verses":1,"verses":[{"id":1,"text":"بِسْمِ اللَّهِ"}]}"#,
//! )?;
//! let mut state = AppState::new(ContentStore::from_chapters(vec![chapter]), Theme::default());
//!
//! handle_event(&mut state, &Event::OpenChapter(1))?;
//! let (_, actions) = handle_event(&mut state, &Event::TogglePlayback)?;
//! assert!(matches!(actions[0], Action::PlayAudio { verse_index: 0, .. }));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod driver;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use driver::Driver;
pub use handler::{handle_event, Event};
pub use modes::Screen;
pub use state::{AppState, DEFAULT_FONT_SIZE, FONT_SIZE_STEP, MAX_FONT_SIZE, MIN_FONT_SIZE};
