//! Weighted PPIN edge lists
//!
//! One interaction per line: `protein_a  protein_b  [weight]`, separated by
//! tabs or spaces. Missing weights default to 1.0. Nodes are indexed in
//! first-seen order. A pair listed more than once (in either orientation)
//! keeps the last weight.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use enm_core::{EnmError, Result};

use crate::kirchhoff::Kirchhoff;

/// Parsed interaction network
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    /// Node names in index order
    pub names: Vec<String>,
    /// Undirected weighted edges (i < j)
    pub edges: Vec<(usize, usize, f64)>,
}

impl EdgeList {
    /// Parse an edge list.
    ///
    /// Blank lines and `#` comments are skipped.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut names: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut edges: Vec<(usize, usize, f64)> = Vec::new();
        let mut edge_slot: HashMap<(usize, usize), usize> = HashMap::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            let weight = match fields.len() {
                2 => 1.0,
                3 => fields[2]
                    .parse::<f64>()
                    .map_err(|_| EnmError::parse(line_no, format!("invalid weight '{}'", fields[2])))?,
                n => {
                    return Err(EnmError::parse(
                        line_no,
                        format!("expected 2 or 3 fields, found {}", n),
                    ))
                }
            };
            if !(weight.is_finite() && weight > 0.0) {
                return Err(EnmError::parse(
                    line_no,
                    format!("weight must be positive and finite, got {}", weight),
                ));
            }
            if fields[0] == fields[1] {
                return Err(EnmError::parse(line_no, format!("self interaction on '{}'", fields[0])));
            }

            let mut node_id = |name: &str| -> usize {
                if let Some(&id) = index.get(name) {
                    return id;
                }
                let id = names.len();
                names.push(name.to_string());
                index.insert(name.to_string(), id);
                id
            };
            let a = node_id(fields[0]);
            let b = node_id(fields[1]);
            let key = (a.min(b), a.max(b));

            match edge_slot.get(&key) {
                Some(&slot) => {
                    log::debug!(
                        "line {}: duplicate interaction {} - {}, keeping weight {}",
                        line_no,
                        fields[0],
                        fields[1],
                        weight
                    );
                    edges[slot].2 = weight;
                }
                None => {
                    edge_slot.insert(key, edges.len());
                    edges.push((key.0, key.1, weight));
                }
            }
        }

        Ok(Self { names, edges })
    }

    /// Parse an edge list file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::parse(BufReader::new(file))
    }

    pub fn n_nodes(&self) -> usize {
        self.names.len()
    }

    /// Kirchhoff matrix of this network
    pub fn to_kirchhoff(&self) -> Result<Kirchhoff> {
        Kirchhoff::from_weighted_edges(self.n_nodes(), &self.edges)
    }
}
