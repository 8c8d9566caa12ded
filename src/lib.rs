//! Petition Builder - Guided EB-2 NIW petition assembly.
//!
//! This crate implements the guided petition-builder workflow: background
//! intake with CV-assisted autofill, AI-suggested endeavor selection, cover
//! letter drafting with iterative revision, and sequential per-recommender
//! reference letter generation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
