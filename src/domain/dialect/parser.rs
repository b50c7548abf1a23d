//! Best-effort reader for the projects config dialect.
//!
//! The dialect looks like YAML but only one fixed shape is understood: a list of
//! `- name:` entries followed by `key: value` lines and a nested `topics:` list.
//! Lines are routed by testing key substrings in a fixed priority order, and
//! anything that does not match is skipped. Parsing never fails.

use crate::domain::project::{Classification, ProjectRecord};

const RECORD_MARKER: &str = "- name:";
const NAME_KEY: &str = "name:";
const LIST_MARKER: &str = "- ";
const UPDATED_AT_KEY: &str = "updated_at:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    OutsideRecord,
    InRecord,
    InTopics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Description,
    Url,
    Classification,
    Icon,
    Language,
    Stars,
    Forks,
    Topics,
}

/// Keys tested before topic items, in priority order. `image:` is the icon key
/// used by older configs.
const FIELD_KEYS: [(&str, Field); 9] = [
    ("description:", Field::Description),
    ("url:", Field::Url),
    ("classification:", Field::Classification),
    ("icon:", Field::Icon),
    ("image:", Field::Icon),
    ("language:", Field::Language),
    ("stars:", Field::Stars),
    ("forks:", Field::Forks),
    ("topics:", Field::Topics),
];

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Field(Field, &'a str),
    TopicItem(&'a str),
    UpdatedAt(&'a str),
    Unrecognized,
}

/// Parse dialect text into project records, in source order.
///
/// Entries without a name are dropped.
pub fn parse_projects(text: &str) -> Vec<ProjectRecord> {
    let mut parser = DialectParser::new();
    for line in text.lines() {
        parser.feed(line);
    }
    parser.finish()
}

struct DialectParser {
    state: ParserState,
    current: Option<ProjectRecord>,
    records: Vec<ProjectRecord>,
}

impl DialectParser {
    fn new() -> Self {
        Self { state: ParserState::OutsideRecord, current: None, records: Vec::new() }
    }

    fn feed(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return;
        }

        if trimmed.starts_with(RECORD_MARKER) {
            self.close_record();
            let name = value_after(line, NAME_KEY).map(str::trim).unwrap_or_default();
            self.current = Some(ProjectRecord::new(name));
            self.state = ParserState::InRecord;
            return;
        }

        if self.state == ParserState::OutsideRecord {
            return;
        }

        let line = classify_line(line, self.state);
        let Some(record) = self.current.as_mut() else {
            return;
        };

        match line {
            Line::Field(Field::Description, raw) => {
                record.description = Some(unquote(raw.trim()).trim().to_string());
            }
            Line::Field(Field::Url, raw) => record.url = text_value(raw),
            Line::Field(Field::Classification, raw) => {
                record.classification = text_value(raw).map(|value| Classification::parse(&value));
            }
            Line::Field(Field::Icon, raw) => record.icon = text_value(raw),
            Line::Field(Field::Language, raw) => record.language = text_value(raw),
            Line::Field(Field::Stars, raw) => {
                if let Some(stars) = count_value(raw) {
                    record.stars = stars;
                }
            }
            Line::Field(Field::Forks, raw) => {
                if let Some(forks) = count_value(raw) {
                    record.forks = forks;
                }
            }
            Line::Field(Field::Topics, _) => self.state = ParserState::InTopics,
            Line::TopicItem(topic) => record.topics.push(topic.to_string()),
            Line::UpdatedAt(raw) => {
                record.updated_at = text_value(raw);
                self.state = ParserState::InRecord;
            }
            Line::Unrecognized => {}
        }
    }

    fn close_record(&mut self) {
        if let Some(record) = self.current.take()
            && !record.name.is_empty()
        {
            self.records.push(record);
        }
    }

    fn finish(mut self) -> Vec<ProjectRecord> {
        self.close_record();
        self.records
    }
}

fn classify_line(line: &str, state: ParserState) -> Line<'_> {
    for (key, field) in FIELD_KEYS {
        if let Some(raw) = value_after(line, key) {
            return Line::Field(field, raw);
        }
    }

    if state == ParserState::InTopics
        && let Some(topic) = line.trim().strip_prefix(LIST_MARKER)
    {
        return Line::TopicItem(topic.trim());
    }

    match value_after(line, UPDATED_AT_KEY) {
        Some(raw) => Line::UpdatedAt(raw),
        None => Line::Unrecognized,
    }
}

/// Text following the first occurrence of `key`.
fn value_after<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.find(key).map(|index| &line[index + key.len()..])
}

fn text_value(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn count_value(raw: &str) -> Option<u64> {
    let value = raw.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Strip one quote character from each end when both ends are quoted.
/// The two quotes need not be the same kind.
fn unquote(value: &str) -> &str {
    const QUOTES: [char; 2] = ['"', '\''];
    if value.len() >= 2
        && let Some(inner) = value.strip_prefix(QUOTES).and_then(|v| v.strip_suffix(QUOTES))
    {
        return inner;
    }
    value
}
