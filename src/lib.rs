// Library surface for headless and integration tests.
// The App and rendering stay in main.rs to keep this free of terminal types.
pub mod runtime;
pub mod session;
pub mod words;
