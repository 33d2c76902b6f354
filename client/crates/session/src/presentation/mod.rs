//! Presentation Layer
//!
//! Route table, guard hook, auth page, navigation menu and DTOs.

pub mod auth_page;
pub mod dto;
pub mod guard;
pub mod nav_menu;
pub mod router;
