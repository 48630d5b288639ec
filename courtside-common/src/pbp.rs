//! Play-by-play segmentation and navigation
//!
//! Converts a flat, time-ordered play log into scoring segments (maximal
//! runs of plays ending at a play that carries a score snapshot) and drives
//! a cursor over those segments: single step in either direction, or a jump
//! to the next/previous quarter. All operations are total; out-of-range
//! cursors clamp instead of erroring.

use serde::Serialize;

use crate::models::Play;

/// A maximal run of consecutive plays ending at (or trailing after) a
/// scoring play. The period is the period of the segment's last play.
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub plays: Vec<Play>,
    pub period: i64,
}

/// Partition a play log into scoring segments.
///
/// Each play carrying a score snapshot closes the segment being
/// accumulated; trailing plays with no closing score form a final segment
/// with the period of their last play. A non-empty log where no play scores
/// at all yields exactly one segment holding every play.
///
/// Concatenating the returned segments' plays, in order, reproduces the
/// input exactly.
pub fn segment_plays(plays: Vec<Play>) -> Vec<Segment> {
    if plays.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut buffer: Vec<Play> = Vec::new();
    let mut current_period = plays[0].period;

    for play in &plays {
        buffer.push(play.clone());
        current_period = play.period;

        if play.score.is_some() {
            segments.push(Segment {
                plays: std::mem::take(&mut buffer),
                period: current_period,
            });
        }
    }

    // Trailing plays with no closing score
    if !buffer.is_empty() {
        segments.push(Segment {
            plays: buffer,
            period: current_period,
        });
    }

    // No segment at all: one segment holding every play, period from the
    // first play
    if segments.is_empty() {
        segments.push(Segment {
            period: plays[0].period,
            plays,
        });
    }

    segments
}

/// Cursor-driven view over the segments of one game's play log.
///
/// Owns the segment list and a single cursor (index into it, initially 0).
/// Navigation methods mutate the cursor; the `*_target` variants compute
/// the destination without mutating, for rendering links.
#[derive(Debug, Clone)]
pub struct PlayByPlayView {
    segments: Vec<Segment>,
    cursor: usize,
}

impl PlayByPlayView {
    /// Segment the given plays and start at the first segment.
    pub fn new(plays: Vec<Play>) -> Self {
        Self {
            segments: segment_plays(plays),
            cursor: 0,
        }
    }

    /// Segment the given plays and start at `cursor`, clamped into range.
    pub fn with_cursor(plays: Vec<Play>, cursor: usize) -> Self {
        let mut view = Self::new(plays);
        view.cursor = cursor.min(view.last_index());
        view
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The currently displayed segment, None only when there are no plays.
    pub fn current_segment(&self) -> Option<&Segment> {
        self.segments.get(self.cursor)
    }

    /// Plays of the current segment (empty when there are no segments).
    pub fn current_plays(&self) -> &[Play] {
        self.current_segment().map(|s| s.plays.as_slice()).unwrap_or(&[])
    }

    /// Period of the current segment; 1 when there are no segments.
    pub fn current_period(&self) -> i64 {
        self.current_segment().map(|s| s.period).unwrap_or(1)
    }

    fn last_index(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Destination of a single step forward; no-op at the last segment.
    pub fn forward_target(&self) -> usize {
        (self.cursor + 1).min(self.last_index())
    }

    /// Destination of a single step backward; no-op at the first segment.
    pub fn backward_target(&self) -> usize {
        self.cursor.saturating_sub(1)
    }

    /// Destination of a jump to the next period: the first segment after
    /// the cursor whose period is at least current+1, else the last segment.
    pub fn next_period_target(&self) -> usize {
        let target = self.current_period() + 1;
        self.segments
            .iter()
            .enumerate()
            .find(|(i, s)| *i > self.cursor && s.period >= target)
            .map(|(i, _)| i)
            .unwrap_or_else(|| self.last_index())
    }

    /// Destination of a jump to the previous period.
    ///
    /// Finds the first segment of period current-1 by scanning forward for
    /// the last segment before that period and taking its successor. When
    /// the exact target period has no segment (a quarter with no scoring
    /// play), falls back to the segment just before the current period
    /// began; when already in period 1 or no fallback applies, stays put.
    pub fn prev_period_target(&self) -> usize {
        let current = self.current_period();
        let target = current - 1;
        if target < 1 {
            return self.cursor;
        }

        let mut last_before_target: Option<usize> = None;
        for (i, segment) in self.segments.iter().enumerate() {
            if segment.period < target {
                last_before_target = Some(i);
            } else {
                break;
            }
        }

        let candidate = last_before_target.map(|i| i + 1).unwrap_or(0);
        if candidate < self.segments.len() && self.segments[candidate].period == target {
            return candidate;
        }

        // Target period absent from the log: step to just before the
        // current period began, if it began anywhere past the start.
        if let Some(first_current) = self.segments.iter().position(|s| s.period == current) {
            if first_current > 0 {
                return first_current - 1;
            }
        }

        self.cursor
    }

    pub fn step_forward(&mut self) {
        self.cursor = self.forward_target();
    }

    pub fn step_backward(&mut self) {
        self.cursor = self.backward_target();
    }

    pub fn jump_next_period(&mut self) {
        self.cursor = self.next_period_target();
    }

    pub fn jump_prev_period(&mut self) {
        self.cursor = self.prev_period_target();
    }

    /// True iff some segment lies in a later period than the current one.
    pub fn can_jump_next_period(&self) -> bool {
        let current = self.current_period();
        self.segments.iter().any(|s| s.period > current)
    }

    /// True iff some segment lies in an earlier period than the current one.
    pub fn can_jump_prev_period(&self) -> bool {
        let current = self.current_period();
        self.segments.iter().any(|s| s.period < current)
    }
}

/// Redisplay a score snapshot for presentation.
///
/// The dataset stores snapshots as "away - home"; the site displays
/// "home - away". Missing, empty, or unparseable snapshots render as a
/// placeholder or pass through untouched.
pub fn display_score(score: Option<&str>) -> String {
    match score {
        None => "-".to_string(),
        Some(s) if s.is_empty() => "-".to_string(),
        Some(s) => {
            let parts: Vec<&str> = s.split(" - ").collect();
            if parts.len() == 2 {
                format!("{} - {}", parts[1], parts[0])
            } else {
                s.to_string()
            }
        }
    }
}

/// Pick the display description for a play: home, then visitor, then
/// neutral, then a placeholder.
pub fn play_description(play: &Play) -> &str {
    [
        play.home_description.as_deref(),
        play.visitor_description.as_deref(),
        play.neutral_description.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|s| !s.is_empty())
    .unwrap_or("N/A")
}
