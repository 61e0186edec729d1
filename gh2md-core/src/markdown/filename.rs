/// Longest file stem [`sanitize_filename`] produces
const MAX_STEM_LEN: usize = 80;

/// Stem used when nothing of the title survives sanitization
const FALLBACK_STEM: &str = "untitled";

/// Turn a title into a lowercase, dash-separated file stem.
///
/// ASCII letters and digits are kept (lowercased); every run of other
/// characters becomes a single `-`. The result never starts or ends with `-`
/// and is at most 80 characters long.
pub fn sanitize_filename(title: &str) -> String {
  let mut stem = String::with_capacity(title.len().min(MAX_STEM_LEN));
  let mut pending_dash = false;

  for c in title.chars() {
    if c.is_ascii_alphanumeric() {
      if pending_dash && !stem.is_empty() {
        stem.push('-');
      }
      pending_dash = false;
      stem.push(c.to_ascii_lowercase());
    } else {
      pending_dash = true;
    }

    if stem.len() >= MAX_STEM_LEN {
      break;
    }
  }

  stem.truncate(MAX_STEM_LEN);
  let stem = stem.trim_end_matches('-');

  if stem.is_empty() {
    FALLBACK_STEM.to_string()
  } else {
    stem.to_string()
  }
}
