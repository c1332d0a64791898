// Answer bank engine.
// Implements: question catalog, classification, cached-answer matching, bank transforms.
// Banks are caller-owned values; every transform returns a new bank.

pub mod bank;
pub mod catalog;
pub mod classifier;
pub mod handlers;
pub mod matcher;
