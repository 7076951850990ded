use super::types::TaskGid;

const GID_LEN: usize = 16;

/// Extract the Asana task gid from a branch name of the form `{feature}/{gid}`.
///
/// Only the segment after the last `/` is considered. It must be a whole
/// number of exactly 16 decimal digits. Anything else yields `None`, which
/// callers treat as "no task linked" rather than an error.
pub fn extract_task_gid(git_ref: &str) -> Option<TaskGid> {
    let (_, candidate) = git_ref.rsplit_once('/')?;

    if !is_whole_number(candidate) || candidate.len() != GID_LEN {
        return None;
    }

    Some(TaskGid::new(candidate.to_string()))
}

fn is_whole_number(candidate: &str) -> bool {
    !candidate.is_empty()
        && !candidate.contains('.')
        && candidate.bytes().all(|b| b.is_ascii_digit())
}
