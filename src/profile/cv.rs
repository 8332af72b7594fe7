//! Lightweight CV parsing via keyword spotting.
//!
//! No NLP model — skills come from a fixed keyword list, experience lines
//! from a year pattern. The output feeds the text encoder and is echoed back
//! on the embedding record for diagnostics.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::EmbedError;

/// Skill keywords spotted as substrings of the lower-cased CV text.
const SKILL_KEYWORDS: [&str; 20] = [
    "python",
    "pytorch",
    "tensorflow",
    "nlp",
    "ml",
    "llm",
    "react",
    "webrtc",
    "unity",
    "three.js",
    "product",
    "design",
    "data",
    "cloud",
    "aws",
    "gcp",
    "azure",
    "leadership",
    "manager",
    "research",
];

/// Maximum summary length in characters before truncation.
const SUMMARY_LEN: usize = 280;

/// Maximum number of experience lines kept.
const MAX_EXPERIENCE_LINES: usize = 5;

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2}|19\d{2})\b").expect("year pattern is valid"));

/// Structured CV fields extracted from raw text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CvData {
    /// Leading text, newlines flattened, truncated to 280 chars with `...`.
    pub summary: String,
    /// Sorted skill keywords found in the text.
    pub skills: Vec<String>,
    /// Lines mentioning a year or the word "experience", capped at 5.
    pub experience: Vec<String>,
    /// The unmodified source text.
    pub raw_text: String,
}

/// Parse raw CV text into structured fields.
pub fn parse_cv_text(raw_text: &str) -> CvData {
    let skills = extract_skills(raw_text);
    let experience = extract_experience(raw_text);

    let flattened: String = raw_text
        .chars()
        .take(SUMMARY_LEN)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let summary = if raw_text.chars().count() > SUMMARY_LEN {
        format!("{flattened}...")
    } else {
        flattened
    };

    CvData {
        summary,
        skills,
        experience,
        raw_text: raw_text.to_string(),
    }
}

/// Parse a CV document from disk.
///
/// `.json` files are flattened to a space-joined string of their values
/// before text parsing; everything else is read as plain text. Returns
/// [`EmbedError::CvNotFound`] if the path does not exist.
pub fn parse_cv(cv_path: &Path) -> Result<CvData, EmbedError> {
    if !cv_path.exists() {
        return Err(EmbedError::CvNotFound(cv_path.to_path_buf()));
    }

    let raw_text = read_document(cv_path)?;
    Ok(parse_cv_text(&raw_text))
}

fn read_document(path: &Path) -> Result<String, EmbedError> {
    let contents = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        let payload: serde_json::Value = serde_json::from_str(&contents)?;
        return Ok(flatten_json(&payload));
    }

    Ok(contents)
}

/// Join the scalar renderings of a JSON object's values (or array's items).
fn flatten_json(value: &serde_json::Value) -> String {
    let stringify = |v: &serde_json::Value| match v {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    match value {
        serde_json::Value::Object(map) => {
            map.values().map(stringify).collect::<Vec<_>>().join(" ")
        }
        serde_json::Value::Array(items) => {
            items.iter().map(stringify).collect::<Vec<_>>().join(" ")
        }
        other => stringify(other),
    }
}

fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut skills: Vec<String> = SKILL_KEYWORDS
        .iter()
        .filter(|skill| lowered.contains(**skill))
        .map(|skill| skill.to_string())
        .collect();
    skills.sort();
    skills
}

fn extract_experience(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| {
            YEAR_PATTERN.is_match(line) || line.to_lowercase().contains("experience")
        })
        .map(|line| line.trim().to_string())
        .take(MAX_EXPERIENCE_LINES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn extracts_known_skills_sorted() {
        let cv = parse_cv_text("Senior engineer. Python, PyTorch, and AWS. Some ML research.");
        assert_eq!(cv.skills, vec!["aws", "ml", "python", "pytorch", "research"]);
    }

    #[test]
    fn extracts_experience_lines_by_year() {
        let cv = parse_cv_text(
            "Jane Doe\n2019 - 2022: Data platform lead\nHobbies: chess\nWork experience below\n",
        );
        assert_eq!(cv.experience.len(), 2);
        assert!(cv.experience[0].contains("2019"));
        assert!(cv.experience[1].contains("experience"));
    }

    #[test]
    fn experience_lines_are_capped() {
        let text = (2010..2020)
            .map(|y| format!("{y}: another role"))
            .collect::<Vec<_>>()
            .join("\n");
        let cv = parse_cv_text(&text);
        assert_eq!(cv.experience.len(), 5);
    }

    #[test]
    fn summary_truncates_and_flattens() {
        let long = "line one\n".repeat(60);
        let cv = parse_cv_text(&long);
        assert!(cv.summary.ends_with("..."));
        assert!(!cv.summary.contains('\n'));
        assert_eq!(cv.summary.chars().count(), 283);
    }

    #[test]
    fn short_summary_kept_verbatim() {
        let cv = parse_cv_text("brief");
        assert_eq!(cv.summary, "brief");
        assert_eq!(cv.raw_text, "brief");
    }

    #[test]
    fn missing_path_is_cv_not_found() {
        let err = parse_cv(Path::new("/nonexistent/cv.txt")).unwrap_err();
        assert!(matches!(err, EmbedError::CvNotFound(_)));
    }

    #[test]
    fn parses_plain_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Python developer since 2018").unwrap();
        let cv = parse_cv(file.path()).unwrap();
        assert_eq!(cv.skills, vec!["python"]);
        assert_eq!(cv.experience.len(), 1);
    }

    #[test]
    fn parses_json_export() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"headline": "ML engineer", "skills": "python pytorch"}}"#
        )
        .unwrap();
        let cv = parse_cv(file.path()).unwrap();
        assert!(cv.skills.contains(&"ml".to_string()));
        assert!(cv.skills.contains(&"pytorch".to_string()));
    }
}
