//! micac-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the foundation types shared by every phase of the
//! micac compiler. The lexer is the first consumer; the parser (an external
//! collaborator) consumes the same locations and diagnostics.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. PLAIN DATA
//!    Locations, spans and diagnostics are small `Copy`/`Clone` values with
//!    public fields. They carry no references into the source text.
//!
//! 2. ACCUMULATE, NEVER ABORT
//!    Diagnostics are collected by a [`Handler`]. Reporting an error never
//!    unwinds or returns early; the caller decides what is fatal.
//!
//! 3. TOOLING FRIENDLY
//!    Every public data type implements `serde::Serialize` so IDE and test
//!    tooling can dump them as JSON.
//
// ============================================================================
// SOURCE LOCATIONS
// ============================================================================
//
// A Location is a 1-based (line, column) pair. Columns are measured in bytes
// from the first byte of the line. A Span adds the half-open byte range
// [start, end) so a consumer can slice the original text.
//
// SourceFile precomputes line start offsets once, so rendering a diagnostic
// is a binary search plus a slice.
//
// ============================================================================
// DIAGNOSTICS
// ============================================================================
//
// Diagnostic  - level + message + span + optional code, notes, helps
// DiagnosticBuilder - fluent construction, `.emit(&handler)`
// Handler     - interior-mutable accumulator shared by reference
//
// The Handler uses a RefCell so a lexer can report through `&Handler` while
// the caller keeps its own shared reference for inspection afterwards.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use span::{Location, SourceFile, Span};

/// Hash map used for lookup tables across the compiler.
pub use rustc_hash::FxHashMap;
