//! Field paths and codec diagnostics.
//!
//! A [`Location`] tracks where in the structure graph the codec currently is,
//! rendered the way the C API spells member access: `.` between embedded
//! members, `->` after a pointer, `[i]` for array elements. For example
//! `pStages[1]->pSpecializationInfo->dataSize`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A named member
    Field(&'a str),
    /// An element of an array reached through a pointer
    Index(usize),
    /// The target of a pointer member
    Pointee,
}

/// Current position of an encode or decode walk.
#[derive(Debug, Clone, Default)]
pub struct Location {
    path: String,
    /// Saved (path length, via_pointer) for each pushed segment
    marks: Vec<(usize, bool)>,
    via_pointer: bool,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment<'_>) {
        self.marks.push((self.path.len(), self.via_pointer));
        match segment {
            Segment::Field(name) => {
                if !self.path.is_empty() {
                    self.path.push_str(if self.via_pointer { "->" } else { "." });
                }
                self.path.push_str(name);
                self.via_pointer = false;
            }
            Segment::Index(i) => {
                self.path.push('[');
                self.path.push_str(&i.to_string());
                self.path.push(']');
                self.via_pointer = true;
            }
            Segment::Pointee => self.via_pointer = true,
        }
    }

    pub fn pop(&mut self) {
        if let Some((len, via_pointer)) = self.marks.pop() {
            self.path.truncate(len);
            self.via_pointer = via_pointer;
        }
    }

    pub fn depth(&self) -> usize {
        self.marks.len()
    }

    pub fn as_str(&self) -> &str {
        if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("WARNING"),
            Severity::Error => f.write_str("ERROR"),
        }
    }
}

/// A diagnostic produced while encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub severity: Severity,
    pub location: String,
    pub text: String,
}

impl Message {
    pub fn warning(location: &Location, text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            location: location.as_str().to_string(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.location, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_member_access() {
        let mut loc = Location::new();
        loc.push(Segment::Field("pStages"));
        loc.push(Segment::Index(1));
        loc.push(Segment::Field("pSpecializationInfo"));
        loc.push(Segment::Pointee);
        loc.push(Segment::Field("dataSize"));
        assert_eq!(loc.as_str(), "pStages[1]->pSpecializationInfo->dataSize");

        loc.pop();
        loc.pop();
        loc.pop();
        loc.push(Segment::Field("pName"));
        assert_eq!(loc.as_str(), "pStages[1]->pName");
    }

    #[test]
    fn test_location_embedded_member() {
        let mut loc = Location::new();
        loc.push(Segment::Field("front"));
        loc.push(Segment::Field("compareOp"));
        assert_eq!(loc.as_str(), "front.compareOp");
        loc.pop();
        loc.pop();
        assert_eq!(loc.depth(), 0);
        assert_eq!(loc.as_str(), "<root>");
    }

    #[test]
    fn test_message_display() {
        let mut loc = Location::new();
        loc.push(Segment::Field("compareOp"));
        let msg = Message::warning(&loc, "Unknown VkCompareOp value 137");
        assert_eq!(
            msg.to_string(),
            "[WARNING] compareOp: Unknown VkCompareOp value 137"
        );
    }
}
