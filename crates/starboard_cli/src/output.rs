//! Rendering of query results.

use clap::ValueEnum;
use starboard::RemoteRepositoryEntity;

/// Output format for query results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Display as a formatted table (default)
    #[default]
    Table,
    /// Display as JSON
    Json,
}

/// One starred repository, flattened for the table view.
#[derive(Debug, Clone, tabled::Tabled)]
pub(crate) struct RepositoryDisplay {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Repository")]
    pub full_name: String,
    #[tabled(rename = "License")]
    pub license: String,
    #[tabled(rename = "Stars")]
    pub stargazers: String,
    #[tabled(rename = "Topics")]
    pub topics: String,
    #[tabled(rename = "Readme")]
    pub readme: String,
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl From<&RemoteRepositoryEntity> for RepositoryDisplay {
    fn from(entity: &RemoteRepositoryEntity) -> Self {
        Self {
            id: or_dash(entity.repository_id),
            full_name: or_dash(entity.repository_fullname.as_deref()),
            license: or_dash(entity.repository_license.as_deref()),
            stargazers: or_dash(entity.repository_stargazers),
            topics: entity.topic_names().join(", "),
            readme: match entity.repository_readme.as_deref() {
                Some(readme) => format!("{} bytes", readme.len()),
                None => "-".to_string(),
            },
        }
    }
}

/// Print entities in the requested format.
pub(crate) fn print_entities(
    entities: &[RemoteRepositoryEntity],
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<RepositoryDisplay> = entities.iter().map(Into::into).collect();
            let mut table = tabled::Table::new(rows);
            table.with(tabled::settings::Style::rounded());
            println!("{}", table);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entities)?);
        }
    }
    Ok(())
}
