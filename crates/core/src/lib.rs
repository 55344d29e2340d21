// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vr-core: the command tree shared by the normalizer and both engines

pub mod command;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use command::{Command, Env, Leaf};
