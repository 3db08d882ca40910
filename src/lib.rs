// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is an animated single-page portfolio built with the Iced GUI
//! framework.
//!
//! Its navigation bar carries an underline that follows the scroll position,
//! interpolating between the nav items of the two sections around a
//! lookahead line. The underline geometry lives in [`nav`] and is independent
//! of the widget tree; [`ui`] feeds it measured layout and renders the result.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod nav;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
