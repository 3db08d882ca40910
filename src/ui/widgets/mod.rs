// SPDX-License-Identifier: MPL-2.0
pub mod layout_probe;

pub use layout_probe::{layout_probe, LayoutProbe};
