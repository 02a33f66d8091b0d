//! Wire shapes shared between the risk API and its clients.

pub mod dto;
