// src/persona/mod.rs
// Persona variants for the brainstormer agent. A request can carry a
// "[PERSONA: tag]" marker in front of the prompt to switch system prompts.

mod prompts;

pub use prompts::{
    DEFAULT_BRAINSTORM_PROMPT, ENTREPRENEUR_PROMPT, HACKATHON_PROMPT, STUDENT_PROMPT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Student,
    Entrepreneur,
    Hackathon,
}

impl Persona {
    /// Returns the system prompt for this persona.
    pub fn prompt(&self) -> &'static str {
        match self {
            Persona::Student => STUDENT_PROMPT,
            Persona::Entrepreneur => ENTREPRENEUR_PROMPT,
            Persona::Hackathon => HACKATHON_PROMPT,
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Persona::Student => "student",
                Persona::Entrepreneur => "entrepreneur",
                Persona::Hackathon => "hackathon",
            }
        )
    }
}

impl std::str::FromStr for Persona {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Persona::Student),
            "entrepreneur" => Ok(Persona::Entrepreneur),
            "hackathon" => Ok(Persona::Hackathon),
            _ => Err(()),
        }
    }
}

const PERSONA_MARKER: &str = "[PERSONA:";

/// Split a raw prompt into an optional persona and the effective prompt.
///
/// `"[PERSONA: student] idea"` yields `(Some(Student), "idea")`. A marker
/// with an unknown tag, or with no closing bracket, is not treated as a
/// marker at all: the whole original string comes back unchanged with no
/// persona.
pub fn extract_persona(raw: &str) -> (Option<Persona>, &str) {
    let trimmed = raw.trim_start();
    let Some(rest) = strip_marker_prefix(trimmed) else {
        return (None, raw);
    };
    let Some(close) = rest.find(']') else {
        return (None, raw);
    };

    let tag = rest[..close].trim();
    match tag.parse::<Persona>() {
        Ok(persona) => (Some(persona), rest[close + 1..].trim()),
        Err(()) => (None, raw),
    }
}

// Case-insensitive "[PERSONA:" prefix match. `get` keeps multibyte input
// from splitting a char boundary.
fn strip_marker_prefix(s: &str) -> Option<&str> {
    let prefix = s.get(..PERSONA_MARKER.len())?;
    if prefix.eq_ignore_ascii_case(PERSONA_MARKER) {
        Some(&s[PERSONA_MARKER.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_known_tag() {
        let (persona, prompt) = extract_persona("[PERSONA: student] idea X");
        assert_eq!(persona, Some(Persona::Student));
        assert_eq!(prompt, "idea X");
    }

    #[test]
    fn test_extract_case_insensitive() {
        let (persona, prompt) = extract_persona("[persona: HACKATHON]   weekend build");
        assert_eq!(persona, Some(Persona::Hackathon));
        assert_eq!(prompt, "weekend build");
    }

    #[test]
    fn test_no_marker() {
        let (persona, prompt) = extract_persona("idea X");
        assert_eq!(persona, None);
        assert_eq!(prompt, "idea X");
    }

    #[test]
    fn test_missing_closing_bracket_keeps_original() {
        let raw = "[PERSONA: student idea X";
        let (persona, prompt) = extract_persona(raw);
        assert_eq!(persona, None);
        assert_eq!(prompt, raw);
    }

    #[test]
    fn test_unknown_tag_keeps_original() {
        let raw = "[PERSONA: pirate] idea X";
        let (persona, prompt) = extract_persona(raw);
        assert_eq!(persona, None);
        assert_eq!(prompt, raw);
    }

    #[test]
    fn test_multibyte_prompt_is_untouched() {
        let raw = "日本語のアイデアをください";
        let (persona, prompt) = extract_persona(raw);
        assert_eq!(persona, None);
        assert_eq!(prompt, raw);
    }

    #[test]
    fn test_roundtrip_display_parse() {
        for p in [Persona::Student, Persona::Entrepreneur, Persona::Hackathon] {
            assert_eq!(p.to_string().parse::<Persona>(), Ok(p));
        }
    }
}
