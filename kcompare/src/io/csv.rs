use std::io::BufRead;

use anyhow::{Context, Result, anyhow, bail};
use knapsack_rs::io::ext_repr::{ExtCatalog, ExtProduct};

/// Positions of the relevant columns in the header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    id: usize,
    category: Option<usize>,
    price: usize,
    utility: usize,
}

impl Columns {
    fn from_header(header: &[String]) -> Result<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let required = |name: &str| find(name).ok_or_else(|| anyhow!("missing column: {name}"));

        Ok(Columns {
            id: required("id")?,
            category: find("category"),
            price: required("price")?,
            utility: required("utility")?,
        })
    }
}

/// Reads a catalog from CSV with a header row containing `id`, `price` and `utility` (and optionally `category`).
/// Blank lines are skipped.
pub fn read_catalog_csv(name: &str, reader: impl BufRead) -> Result<ExtCatalog> {
    let mut lines = reader.lines().enumerate();

    let columns = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break Columns::from_header(&split_fields(&line)?)?;
                }
            }
            None => bail!("no header row"),
        }
    };

    let mut products = vec![];
    for (i, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let product = parse_record(&line, &columns).with_context(|| format!("line {}", i + 1))?;
        products.push(product);
    }

    Ok(ExtCatalog {
        name: name.to_string(),
        products,
    })
}

fn parse_record(line: &str, columns: &Columns) -> Result<ExtProduct> {
    let fields = split_fields(line)?;
    let field = |idx: usize| {
        fields
            .get(idx)
            .map(|f| f.trim())
            .ok_or_else(|| anyhow!("expected at least {} fields, found {}", idx + 1, fields.len()))
    };

    Ok(ExtProduct {
        id: field(columns.id)?.parse().context("invalid id")?,
        category: match columns.category {
            Some(idx) => field(idx)?.to_string(),
            None => String::new(),
        },
        price: field(columns.price)?.parse().context("invalid price")?,
        utility: field(columns.utility)?.parse().context("invalid utility")?,
    })
}

/// Splits a line on commas. Fields may be enclosed in double quotes, in which case
/// commas are kept and `""` stands for a single quote.
pub fn split_fields(line: &str) -> Result<Vec<String>> {
    let mut fields = vec![];
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            (',', false) => fields.push(std::mem::take(&mut field)),
            (c, _) => field.push(c),
        }
    }
    if in_quotes {
        bail!("unterminated quoted field");
    }
    fields.push(field);
    Ok(fields)
}
