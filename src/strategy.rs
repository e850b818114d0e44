use tracing::debug;

use crate::{
    patterns::{JSON_CONFIG_PREFIX, MODAL_DELIMITER},
    CleanError,
};

/// Modal-delimiter strategy: the player reliably emits
/// "This is a modal window." between its chrome and the review body, so
/// everything before the last occurrence is discarded. A remainder at or
/// below `min_remainder` characters is assumed to be more chrome and the
/// strategy does not apply.
pub(crate) fn after_modal_delimiter(text: &str, min_remainder: usize) -> Option<&str> {
    let (_, tail) = text.rsplit_once(MODAL_DELIMITER)?;
    let tail = tail.trim();
    if tail.chars().count() > min_remainder {
        debug!("modal delimiter found, discarding leading chrome");
        Some(tail)
    } else {
        debug!("modal delimiter remainder too short, falling through");
        None
    }
}

/// JSON-prefix strategy: locate the end of a leading JSON blob by counting
/// brace depth rather than parsing. Truncated or malformed blobs that a real
/// parser would reject still get a usable boundary this way; if depth never
/// returns to zero the strategy silently does not apply.
///
/// A blob closing at or past `max_fraction` of the text is left alone since
/// the braces are probably part of the content itself. The known
/// clickstream-config prefix is a confirmed marker and skips that guard.
pub(crate) fn strip_json_prefix(
    text: &str,
    max_fraction: f64,
) -> Result<Option<&str>, CleanError> {
    if !text.starts_with('{') {
        return Ok(None);
    }

    let mut depth = 0usize;
    let mut end = None;
    for (seen, (idx, ch)) in text.char_indices().enumerate() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    end = Some((idx + 1, seen + 1));
                    break;
                }
            }
            _ => {}
        }
    }

    let Some((end_byte, end_chars)) = end else {
        debug!("unbalanced braces in leading blob, skipping JSON strip");
        return Ok(None);
    };

    let confirmed = text.starts_with(JSON_CONFIG_PREFIX);
    let total_chars = text.chars().count();
    if confirmed || (end_chars as f64) < total_chars as f64 * max_fraction {
        let rest = text
            .get(end_byte..)
            .ok_or(CleanError::SliceBounds(end_byte))?;
        debug!("leading JSON blob stripped ({end_chars} chars)");
        Ok(Some(rest.trim()))
    } else {
        Ok(None)
    }
}
