// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

pub mod inline_js;

pub use inline_js::InlineJsScanner;
