//! Serializer for the projects config dialect.
//!
//! Output is shaped so that [`parse_projects`](super::parse_projects) reads it
//! back unchanged: values are written verbatim, and only `description` is
//! wrapped in quotes because it is the only field the parser unquotes.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::project::ProjectRecord;

const HEADER: &str = "\
# Projects Configuration
# This file is dynamically updated with all public repositories from GitHub
# You can manually edit the 'classification' field for each project
# Classification options: training, project
# The 'icon' field is automatically generated based on the project name (animal emoji)
#
# To update this file, run: folio sync
#";

const ITEM_INDENT: &str = "  ";
const FIELD_INDENT: &str = "    ";
const TOPIC_INDENT: &str = "      ";

/// Render records as a complete config file, header included.
pub fn write_projects(records: &[ProjectRecord], generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&format!(
        "# Last updated: {}\n\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    out.push_str("projects:");
    if records.is_empty() {
        out.push_str(" []\n");
        return out;
    }
    out.push('\n');

    for record in records {
        write_record(&mut out, record);
    }
    out
}

fn write_record(out: &mut String, record: &ProjectRecord) {
    out.push_str(&format!("{ITEM_INDENT}- name: {}\n", single_line(&record.name)));

    if let Some(description) = &record.description {
        push_field(out, "description", &quote_description(&single_line(description)));
    }
    if let Some(url) = &record.url {
        push_field(out, "url", &single_line(url));
    }
    if let Some(classification) = &record.classification {
        push_field(out, "classification", &single_line(classification.as_str()));
    }
    if let Some(icon) = &record.icon {
        push_field(out, "icon", &single_line(icon));
    }
    if let Some(language) = &record.language {
        push_field(out, "language", &single_line(language));
    }
    push_field(out, "stars", &record.stars.to_string());
    push_field(out, "forks", &record.forks.to_string());

    if record.topics.is_empty() {
        push_field(out, "topics", "[]");
    } else {
        out.push_str(&format!("{FIELD_INDENT}topics:\n"));
        for topic in &record.topics {
            out.push_str(&format!("{TOPIC_INDENT}- {}\n", single_line(topic)));
        }
    }

    if let Some(updated_at) = &record.updated_at {
        push_field(out, "updated_at", &single_line(updated_at));
    }
}

fn push_field(out: &mut String, key: &str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        out.push_str(&format!("{FIELD_INDENT}{key}:\n"));
    } else {
        out.push_str(&format!("{FIELD_INDENT}{key}: {value}\n"));
    }
}

/// Double quotes unless the text itself contains one.
fn quote_description(description: &str) -> String {
    let description = description.trim();
    if description.contains('"') {
        format!("'{description}'")
    } else {
        format!("\"{description}\"")
    }
}

fn single_line(value: &str) -> String {
    value.replace(['\r', '\n'], " ").trim().to_string()
}
