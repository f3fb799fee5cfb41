//! `wmlctl outline`: dump the block structure with decoded properties.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;
use wml::{BlockContent, Document, Paragraph, RunContentHost, Table};

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
enum OutlineBlock {
    Paragraph {
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        alignment: Option<String>,
        runs: Vec<OutlineRun>,
    },
    Table {
        rows: usize,
        columns: usize,
    },
}

#[derive(Debug, Serialize)]
struct OutlineRun {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_pt: Option<f64>,
}

pub fn run(file: &Path, json: bool) -> Result<()> {
    let xml = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let doc = Document::from_xml(&xml)
        .with_context(|| format!("parsing {}", file.display()))?;
    let blocks = outline(&doc)?;
    debug!(blocks = blocks.len(), "built outline");
    if json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    } else {
        for block in &blocks {
            print_block(block);
        }
    }
    Ok(())
}

fn outline(doc: &Document) -> Result<Vec<OutlineBlock>> {
    doc.body()
        .context("locating body")?
        .content()
        .into_iter()
        .map(|block| match block {
            BlockContent::Paragraph(p) => outline_paragraph(&p),
            BlockContent::Table(t) => outline_table(&t),
        })
        .collect()
}

fn outline_paragraph(p: &Paragraph<'_>) -> Result<OutlineBlock> {
    let (style, alignment) = match p.properties() {
        None => (None, None),
        Some(props) => (
            props.style()?.map(str::to_string),
            props.alignment()?.map(|jc| jc.token().to_string()),
        ),
    };
    let runs = p
        .runs()
        .into_iter()
        .map(|run| {
            let (bold, italic, size_pt) = match run.properties() {
                None => (None, None, None),
                Some(props) => (
                    props.bold()?,
                    props.italic()?,
                    props.size()?.map(|size| size.points()),
                ),
            };
            Ok(OutlineRun {
                text: run.text(),
                bold,
                italic,
                size_pt,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(OutlineBlock::Paragraph {
        style,
        alignment,
        runs,
    })
}

fn outline_table(t: &Table<'_>) -> Result<OutlineBlock> {
    let rows = t.rows();
    let columns = t
        .grid()
        .map(|grid| grid.columns().len())
        .unwrap_or_else(|| rows.first().map_or(0, |row| row.cells().len()));
    Ok(OutlineBlock::Table {
        rows: rows.len(),
        columns,
    })
}

fn print_block(block: &OutlineBlock) {
    match block {
        OutlineBlock::Paragraph {
            style,
            alignment,
            runs,
        } => {
            let style = style.as_deref().unwrap_or("-");
            let alignment = alignment.as_deref().unwrap_or("-");
            println!("p style={style} jc={alignment}");
            for run in runs {
                let mut flags = String::new();
                if run.bold == Some(true) {
                    flags.push('b');
                }
                if run.italic == Some(true) {
                    flags.push('i');
                }
                let size = run
                    .size_pt
                    .map(|pt| format!("{pt}pt"))
                    .unwrap_or_else(|| "-".to_string());
                println!("  r [{flags}] {size} {:?}", run.text);
            }
        }
        OutlineBlock::Table { rows, columns } => {
            println!("tbl {rows}x{columns}");
        }
    }
}
