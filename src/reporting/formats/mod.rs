// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

pub mod csv;
pub mod html;
pub mod json;
pub mod text;
