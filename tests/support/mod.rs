//! Scripted collaborators and fixtures shared by integration tests.

#![allow(dead_code)]

pub mod fakes;
pub mod fixtures;
