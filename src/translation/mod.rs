//! Chunked text translation
//!
//! The translation pipeline has three layers:
//!
//! 1. **Chunking** - long inputs are split into bounded chunks on sentence
//!    boundaries, losslessly, so translated chunks reassemble by plain
//!    concatenation.
//! 2. **Providers** - each translation backend sits behind the
//!    [`TranslationProvider`] trait; its wire format never leaks upward.
//! 3. **Session** - [`TranslationSession`] owns the observable state record,
//!    dispatches one sequential call per chunk, and guarantees a consistent
//!    terminal state on every exit path.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use polyread::translation::{GoogleTranslateProvider, TranslationSession};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = Arc::new(GoogleTranslateProvider::new().unwrap());
//!     let mut session = TranslationSession::new(provider);
//!
//!     session.translate("Hello world", "es", None).await;
//!     match session.error() {
//!         None => println!("{}", session.translated_text()),
//!         Some(err) => eprintln!("{}", err),
//!     }
//! }
//! ```

pub mod chunk;
pub mod error;
pub mod google;
pub mod mock;
pub mod mymemory;
pub mod provider;
pub mod session;

pub use chunk::{MAX_CHUNK_CHARS, split_into_chunks};
pub use error::{TranslationError, TranslationResult};
pub use google::GoogleTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use mymemory::MyMemoryProvider;
pub use provider::{AUTO_SOURCE, TranslationProvider, validate_lang};
pub use session::{TranslationSession, TranslationState};
