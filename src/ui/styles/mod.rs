// SPDX-License-Identifier: MPL-2.0
//! Centralized widget style helpers shared by the panes.

pub mod button;
pub mod container;
