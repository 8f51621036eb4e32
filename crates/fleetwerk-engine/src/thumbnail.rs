// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Thumbnail URL convention of the monitor backend.

/// Relative path of the latest job's thumbnail for printer `key`.
pub fn thumbnail_path(key: &str) -> String {
    format!("/printers/{key}/latest_thumb")
}

/// Join a relative thumbnail path onto the API base, with exactly one `/` at
/// the seam.
pub fn resolve_thumbnail_url(api_base: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        api_base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}
