// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

pub mod core;
pub mod loader;
pub mod targets;

pub use self::core::ScanSettings;
pub use loader::load_settings;
pub use targets::read_targets;
