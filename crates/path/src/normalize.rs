use log::trace;
use smallvec::SmallVec;
use strutil_runtime::CANONICAL_SEPARATOR;

use crate::LOG_TARGET;
use crate::separators::normalize_separators;

/// Segments kept on the stack before the segment stack spills to the heap.
const INLINE: usize = 16;

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// Resolve `.` and `..` segments of a canonical-separator path.
///
/// A `..` cancels the segment before it. A `..` with nothing to cancel, or
/// following another unresolved `..`, is kept, also right after the root of
/// a rooted path. Empty segments count as regular segments.
fn collapse_segments(path: &str) -> String {
    let rooted = path.starts_with(CANONICAL_SEPARATOR);
    let body = if rooted {
        &path[CANONICAL_SEPARATOR.len_utf8()..]
    } else {
        path
    };

    let mut stack: SmallVec<[&str; INLINE]> = SmallVec::new();
    for segment in body.split(CANONICAL_SEPARATOR) {
        match segment {
            CURRENT_DIR => {}
            PARENT_DIR => match stack.last() {
                Some(&top) if top != PARENT_DIR => {
                    stack.pop();
                }
                _ => stack.push(PARENT_DIR),
            },
            _ => stack.push(segment),
        }
    }

    let mut out = String::with_capacity(path.len());
    if rooted {
        out.push(CANONICAL_SEPARATOR);
    }
    for (i, segment) in stack.iter().enumerate() {
        if i > 0 {
            out.push(CANONICAL_SEPARATOR);
        }
        out.push_str(segment);
    }
    out
}

/// Normalize separators in `path` and remove its relative parts in place.
///
/// `a/./b` becomes `a/b` and `a/../b` becomes `b`, while unresolvable
/// leading parents survive: `../../a` is unchanged and `/a/../../b`
/// becomes `/../b`. Applying it twice gives the same result as once.
pub fn remove_relative_parts(path: &mut String) {
    normalize_separators(path);

    let collapsed = collapse_segments(path);
    if collapsed != *path {
        trace!(target: LOG_TARGET, "removed relative parts: {path:?} -> {collapsed:?}");
        *path = collapsed;
    }
}

/// Owning variant of [`remove_relative_parts`].
pub fn normalize_path(path: &str) -> String {
    let mut out = path.to_owned();
    remove_relative_parts(&mut out);
    out
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
