// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Kaiku Scanner Library
 * Exposes scanner modules for testing
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod config;
pub mod errors;
pub mod http_client;
pub mod rate_limiter;
pub mod reporting;
pub mod worker;

// Scanner modules
pub mod scanners;
