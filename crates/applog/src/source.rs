//! Cached source-file line lookup and snippet windowing.
//!
//! Files are read once and kept in a process-wide cache; unreadable files
//! yield an empty result and are not cached, so a later call reads fresh.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, LazyLock, Mutex, PoisonError},
};

use rustc_hash::FxHashMap;

/// Default snippet window size, in lines.
pub(crate) const SNIPPET_WINDOW: usize = 14;

static CACHE: LazyLock<Mutex<FxHashMap<PathBuf, Arc<Vec<String>>>>> =
    LazyLock::new(|| Mutex::new(FxHashMap::default()));

/// Returns the lines of `path`, without terminators. Empty if unreadable.
pub(crate) fn lines(path: &Path) -> Arc<Vec<String>> {
    if let Some(cached) = CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(path)
    {
        return Arc::clone(cached);
    }

    let fresh: Arc<Vec<String>> = Arc::new(
        fs::read_to_string(path)
            .map(|text| text.lines().map(str::to_owned).collect())
            .unwrap_or_default(),
    );

    // Failed or empty reads stay out of the cache so they are retried.
    if !fresh.is_empty() {
        CACHE
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_owned(), Arc::clone(&fresh));
    }
    fresh
}

/// Returns the 1-based line `lineno` of `path`, if present.
pub(crate) fn line(path: &Path, lineno: u32) -> Option<String> {
    let lines = lines(path);
    let index = usize::try_from(lineno).ok()?.checked_sub(1)?;
    lines.get(index).cloned()
}

/// Renders a window of `num` lines around the 1-based line `lnum` of `path`.
///
/// Each line in the window is rendered as `<number>\t<text>\n`. Windows are
/// clamped to the start and end of the file; an unreadable file yields an
/// empty string.
pub(crate) fn snippet(path: &Path, lnum: u32, num: usize) -> String {
    let cnt = num.div_ceil(2);
    let lines = lines(path);
    let total = lines.len();
    let lnum = usize::try_from(lnum).unwrap_or(usize::MAX);

    let start = lnum.saturating_sub(cnt);
    let finish = if total.saturating_sub(lnum) >= cnt {
        lnum.saturating_add(cnt)
    } else {
        total
    };
    let finish = finish.min(total);
    let start = start.min(finish);

    lines
        .get(start..finish)
        .unwrap_or(&[])
        .iter()
        .enumerate()
        .map(|(offset, text)| format!("{}\t{}\n", start + offset + 1, text))
        .collect()
}
