use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span};
use uilayout_core::WriteOptions;
use uilayout_cli::layout::{
    CompactOptions, LayoutReport, compact, inspect, read_layout, type_rows, write_output,
};
use uilayout_widgets::{default_stylesheet, registry};

use crate::cli::{CheckArgs, CompactArgs, TypesArgs};
use crate::summary::{print_report, types_table};

pub fn run_compact(args: &CompactArgs) -> Result<()> {
    let span = info_span!("compact", input = %args.input.display());
    let _guard = span.enter();

    let xml = read_layout(&args.input)?;
    let options = CompactOptions {
        use_stylesheet: !args.no_stylesheet,
        write: if args.single_line {
            WriteOptions::compact()
        } else {
            WriteOptions::default()
        },
    };
    let sheet = Arc::new(default_stylesheet());
    let compacted = compact(&xml, sheet, &options)?;
    info!(
        before = xml.len(),
        after = compacted.len(),
        "compacted layout"
    );
    write_output(args.output.as_deref(), &compacted)
}

pub fn run_check(args: &CheckArgs) -> Result<LayoutReport> {
    let span = info_span!("check", input = %args.input.display());
    let _guard = span.enter();

    let xml = read_layout(&args.input)?;
    let report = inspect(&xml, Arc::new(default_stylesheet()))?;
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("encode report")?;
        println!("{json}");
    } else {
        print_report(&report);
    }
    Ok(report)
}

pub fn run_types(args: &TypesArgs) -> Result<()> {
    let rows = type_rows(registry().context("build type registry")?);
    if args.json {
        let json = serde_json::to_string_pretty(&rows).context("encode type list")?;
        println!("{json}");
    } else {
        println!("{}", types_table(&rows));
    }
    Ok(())
}
