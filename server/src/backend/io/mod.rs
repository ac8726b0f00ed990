//! # IO Module
//!
//! Interface layer between HTTP clients and the domain logic.
//!
//! - **rest**: axum handlers for the page, fragments and JSON endpoints
//! - **html**: markup for the page and its fragments

pub mod html;
pub mod rest;
