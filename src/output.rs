//! Rendering of rewrite results for the command line.

use colored::Colorize;
use serde::Serialize;

use crate::language::Term;
use crate::rewriting::ResultSet;

pub trait ResultsFormatter {
    /// Formats the result set of each round, the first round first.
    fn format_rounds(&self, rounds: &[ResultSet]) -> anyhow::Result<String>;
}

/// One term per line, with a header per round when there are several.
pub struct PlainFormatter {
    pub color: bool,
}

impl PlainFormatter {
    fn header(&self, round: usize, results: &ResultSet) -> String {
        let header = format!("round {round} ({} terms)", results.len());
        if self.color {
            header.bold().to_string()
        } else {
            header
        }
    }

    fn term(&self, term: &Term) -> String {
        if self.color {
            term.to_string().green().to_string()
        } else {
            term.to_string()
        }
    }
}

impl ResultsFormatter for PlainFormatter {
    fn format_rounds(&self, rounds: &[ResultSet]) -> anyhow::Result<String> {
        let mut buffer = String::new();
        let with_headers = rounds.len() > 1;

        for (i, results) in rounds.iter().enumerate() {
            if with_headers {
                buffer.push_str(&self.header(i + 1, results));
                buffer.push('\n');
            }
            for term in results {
                buffer.push_str(&self.term(term));
                buffer.push('\n');
            }
        }
        Ok(buffer)
    }
}

/// The `(results ...)` term of each round, one per line.
pub struct FormFormatter;

impl ResultsFormatter for FormFormatter {
    fn format_rounds(&self, rounds: &[ResultSet]) -> anyhow::Result<String> {
        Ok(rounds
            .iter()
            .map(|results| format!("{}\n", Term::from(results.clone())))
            .collect())
    }
}

#[derive(Serialize)]
struct JsonRound<'r> {
    round: usize,
    terms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trees: Option<&'r [Term]>,
}

/// A JSON array with one object per round.
pub struct JsonFormatter {
    /// Also emit each term as a serialized tree, not only as text
    pub trees: bool,
}

impl ResultsFormatter for JsonFormatter {
    fn format_rounds(&self, rounds: &[ResultSet]) -> anyhow::Result<String> {
        let rounds: Vec<_> = rounds
            .iter()
            .enumerate()
            .map(|(i, results)| JsonRound {
                round: i + 1,
                terms: results.iter().map(Term::to_string).collect(),
                trees: self.trees.then(|| results.terms()),
            })
            .collect();

        let mut json = serde_json::to_string_pretty(&rounds)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::{FormFormatter, JsonFormatter, PlainFormatter, ResultsFormatter};
    use crate::language::Term;
    use crate::rewriting::ResultSet;

    fn results(terms: &[&str]) -> ResultSet {
        let mut results = ResultSet::default();
        results.extend(terms.iter().map(|s| s.parse::<Term>().unwrap()));
        results
    }

    #[test]
    fn plain_single_round() {
        let output = PlainFormatter { color: false }.format_rounds(&[results(&["(g a)", "b"])]).unwrap();
        assert_eq!(output, "b\n(g a)\n");
    }

    #[test]
    fn plain_several_rounds() {
        let rounds = [results(&["(g a)"]), results(&[])];
        let output = PlainFormatter { color: false }.format_rounds(&rounds).unwrap();
        assert_eq!(output, "round 1 (1 terms)\n(g a)\nround 2 (0 terms)\n");
    }

    #[test]
    fn forms() {
        let output = FormFormatter.format_rounds(&[results(&["(h a b)", "(h b a)"])]).unwrap();
        assert_eq!(output, "(results (h a b) (h b a))\n");
    }

    #[test]
    fn json() {
        let output = JsonFormatter { trees: false }.format_rounds(&[results(&["(g a)"])]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(output.ends_with("]\n"));
        assert_eq!(value[0]["round"], 1);
        assert_eq!(value[0]["terms"][0], "(g a)");
        assert!(value[0].get("trees").is_none());

        let output = JsonFormatter { trees: true }.format_rounds(&[results(&["(g a)"])]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["trees"][0]["symbol"], "g");
    }
}
