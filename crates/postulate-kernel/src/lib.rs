//! # postulate-kernel
//!
//! The locally-nameless term kernel: a restricted Calculus of Constructions
//! with no universes, no inductives, and no subtyping.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      Environment                       │
//! │   ordered name -> { ty, def }, seeded with Type/SORRY   │
//! └────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//! ┌─────────────────────────┐     ┌─────────────────────────┐
//! │          Term           │     │      subst / shift       │
//! │  de Bruijn expressions  │◄────┤  capture-avoiding subst   │
//! └─────────────────────────┘     └─────────────────────────┘
//!              │
//!              ▼
//! ┌─────────────────────────┐
//! │        normalize         │
//! │   simp, structural eq    │
//! └─────────────────────────┘
//! ```
//!
//! Type checking itself (`type_of`, `apply_type`, `member_of`) lives in
//! `postulate-check`, which depends on this crate.

pub mod env;
pub mod normalize;
pub mod pretty;
pub mod subst;
pub mod term;

pub use env::{Declaration, Environment};
pub use normalize::simp;
pub use pretty::pretty;
pub use subst::{shift, subst};
pub use term::{eq, Term};
