//! # dummylog
//!
//! A synthetic log and HTTP traffic generator for exercising log pipelines,
//! dashboards and HTTP instrumentation without a real application.
//!
//! ## Modes
//!
//! ```text
//! run:   timer tick → SentenceSource → encode → sink
//! serve: POST /say → echo body
//! ```
//!
//! Both modes stop when the process receives SIGINT or SIGTERM, delivered
//! through one shared cancellation token.
//!
//! ## Quick Start
//!
//! ```bash
//! # Text lines on stdout, one per second
//! dummylog run
//!
//! # JSON lines into a file, twice a second
//! dummylog run --format json --file /tmp/dummy.log --interval 500ms
//!
//! # Echo server on 0.0.0.0:8080
//! dummylog serve
//! curl -X POST -d hello localhost:8080/say
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct holds the loaded configuration
/// and the process-wide shutdown token.
pub mod app;

/// Command-line interface using clap.
///
/// - `run [--format] [--file] [--interval] [--words] [--seed]` - Emit messages
/// - `serve` - Start the echo server
pub mod cli;

/// Configuration file loading and interval parsing.
pub mod config;

/// Core domain types.
pub mod domain;

/// Message emission.
///
/// - [`Emitter`](emitter::Emitter): writes encoded sentences to its sink
/// - [`run`](emitter::run): fixed-interval loop driven by a cancellation token
/// - [`TriggerSink`](emitter::TriggerSink): write-shaped adapter that emits
///   into a scratch buffer and reports the generated length
pub mod emitter;

/// Filler sentence generation.
pub mod sentence;

/// HTTP echo service with bounded graceful shutdown.
pub mod server;
