use std::path::PathBuf;

use traceql_lib::ParserConfig;
use traceql_lib::parser::{CstPrinter, parse_with_config};
use tracing::debug;

use super::query_loader::load_query_source;

pub struct TreeArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub spans: bool,
    pub trivia: bool,
    pub config: ParserConfig,
}

pub fn run(args: TreeArgs) {
    let query = match load_query_source(args.query_path.as_deref(), args.query_text.as_deref()) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match dump_tree(&query.text, &args) {
        Ok(tree) => print!("{}", tree),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Renders the concrete syntax tree of `text`, `Error` nodes included.
pub fn dump_tree(text: &str, args: &TreeArgs) -> Result<String, traceql_lib::Error> {
    let parse = parse_with_config(text, args.config)?;
    debug!(fuel = parse.exec_fuel_consumed(), "parsed query");

    let root = parse.syntax();
    let tree = CstPrinter::new(&root)
        .with_trivia(args.trivia)
        .with_spans(args.spans)
        .dump();
    Ok(tree)
}
