//! Output formatting

use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render<T: Serialize + Tabled>(&self, rows: &[T]) -> anyhow::Result<String> {
        let rendered = match self {
            OutputFormat::Json => match rows {
                [single] => serde_json::to_string_pretty(single)?,
                _ => serde_json::to_string_pretty(rows)?,
            },
            OutputFormat::Yaml => match rows {
                [single] => serde_yaml::to_string(single)?,
                _ => serde_yaml::to_string(rows)?,
            },
            OutputFormat::Table => Table::new(rows).to_string(),
        };
        Ok(rendered)
    }

    pub fn print<T: Serialize + Tabled>(&self, rows: &[T]) -> anyhow::Result<()> {
        println!("{}", self.render(rows)?);
        Ok(())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Tabled)]
    struct Row {
        key: &'static str,
        value: u32,
    }

    #[test]
    fn test_single_row_json_is_object() {
        let out = OutputFormat::Json.render(&[Row { key: "a", value: 1 }]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["key"], "a");
    }

    #[test]
    fn test_table_has_headers() {
        let out = OutputFormat::Table
            .render(&[Row { key: "a", value: 1 }, Row { key: "b", value: 2 }])
            .unwrap();
        assert!(out.contains("key"));
        assert!(out.contains("value"));
        assert!(out.contains('b'));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("YAML".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
