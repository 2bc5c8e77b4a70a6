//! `kinerja-api` — HTTP boundary for the evaluation form.

pub mod app;
