use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use entail::{Entailment, Statement, ValidatedKnowledgeBase};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One verdict line
    Text,
    /// The verdict with model counts as a JSON document
    Json,
}

/// JSON document written for `--format json`
#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    entailment: &'a Entailment,
    #[serde(skip_serializing_if = "Option::is_none")]
    knowledge_base: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statement: Option<String>,
}

pub struct Formatter {
    format: OutputFormat,
    verbose: bool,
}

impl Formatter {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    pub fn format_entailment(
        &self,
        kb: &ValidatedKnowledgeBase,
        statement: &Statement,
        entailment: &Entailment,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(format!("{}\n", entailment.verdict)),
            OutputFormat::Json => {
                let report = if self.verbose {
                    Report {
                        entailment,
                        knowledge_base: Some(
                            kb.clauses()
                                .iter()
                                .map(|clause| clause.expression.canonical().to_string())
                                .collect(),
                        ),
                        statement: Some(statement.expression().canonical().to_string()),
                    }
                } else {
                    Report {
                        entailment,
                        knowledge_base: None,
                        statement: None,
                    }
                };
                let mut output = serde_json::to_string_pretty(&report)?;
                output.push('\n');
                Ok(output)
            }
        }
    }

    /// The knowledge base and statement in canonical form
    pub fn format_inputs(&self, kb: &ValidatedKnowledgeBase, statement: &Statement) -> String {
        let mut output = format!("Knowledge base ({} clauses):\n", kb.len());
        for clause in kb.clauses() {
            output.push_str(&format!("  {}\n", clause.expression.canonical()));
        }
        output.push_str("Statement:\n");
        output.push_str(&format!("  {}\n", statement.expression().canonical()));
        output
    }

    pub fn format_counts(&self, entailment: &Entailment) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Measure").set_alignment(CellAlignment::Left),
            Cell::new("Value").set_alignment(CellAlignment::Left),
        ]));

        let seeded = entailment
            .seeded
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join(", ");
        let counts = &entailment.counts;

        let rows = [
            ("Seeded symbols", or_none(seeded)),
            ("Free symbols", or_none(entailment.free_symbols.join(", "))),
            ("Assignments", counts.assignments.to_string()),
            ("Models", counts.models.to_string()),
            ("Statement true", counts.query_true.to_string()),
            ("Statement false", counts.query_false.to_string()),
        ];
        for (measure, value) in rows {
            table.add_row(Row::from(vec![
                Cell::new(measure),
                Cell::new(value).set_alignment(CellAlignment::Right),
            ]));
        }

        format!("{}\n", table)
    }
}

fn or_none(list: String) -> String {
    if list.is_empty() {
        "-".to_string()
    } else {
        list
    }
}
