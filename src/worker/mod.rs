//! Background worker for translation fetches.
//!
//! - `handler`: request executor and thread handle
//! - `messages`: request/response protocol and fetch tickets

pub mod handler;
pub mod messages;

pub use handler::{TranslationWorker, WorkerHandle};
pub use messages::{FetchTicket, WorkerMessage, WorkerResponse};
