//! Ports: traits the application drives its collaborators through.

pub mod outbound;
