//! Line-oriented validation of spawn reason name files.
//!
//! One name per line. A leading byte order mark and surrounding whitespace are
//! ignored, as are blank lines and lines starting with `#`. Everything else must decode under the active
//! [`NameMatching`] policy.

use mobspawn_types::{MobSpawnReason, NameMatching, UnknownVariant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// 1-based line number.
    pub line: usize,
    pub error: UnknownVariant,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub accepted: Vec<MobSpawnReason>,
    pub skipped: usize,
    pub rejections: Vec<Rejection>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} accepted, {} rejected, {} skipped",
            self.accepted.len(),
            self.rejections.len(),
            self.skipped
        )
    }
}

pub fn validate_names(content: &str, matching: NameMatching) -> ValidationReport {
    let mut report = ValidationReport::default();
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            report.skipped += 1;
            continue;
        }
        match matching.decode(trimmed) {
            Ok(reason) => report.accepted.push(reason),
            Err(error) => report.rejections.push(Rejection {
                line: idx + 1,
                error,
            }),
        }
    }

    tracing::debug!(
        accepted = report.accepted.len(),
        rejected = report.rejections.len(),
        skipped = report.skipped,
        %matching,
        "Validated names"
    );
    report
}
