//! # Table Source IO
//!
//! Tables are JSON documents; optionally wrapped as a JavaScript
//! constant declaration (`const wordVocab = { ... };`), which is how
//! browser front-ends commonly ship them.

use std::path::Path;

use crate::NTResult;

/// Strip an optional `const|let|var NAME =` prefix and trailing `;`.
///
/// ## Arguments
/// * `source` - the table source text.
///
/// ## Returns
/// The JSON payload slice.
pub fn strip_js_declaration(source: &str) -> &str {
    let trimmed = source.trim();

    let is_declaration = ["const ", "let ", "var "]
        .iter()
        .any(|kw| trimmed.starts_with(kw));

    let payload = match trimmed.find('=') {
        Some(eq) if is_declaration => &trimmed[eq + 1..],
        _ => trimmed,
    };

    payload.trim().trim_end_matches(';').trim_end()
}

/// Read a table source file, returning its JSON payload.
pub fn read_table_source<P: AsRef<Path>>(path: P) -> NTResult<String> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    log::debug!("read table source {} ({} bytes)", path.display(), source.len());
    Ok(strip_js_declaration(&source).to_string())
}
