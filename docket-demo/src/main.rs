use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use docket::{Descriptor, DescriptorList, UnlabeledValueArg, ValueArg};

/// Print the first few lines (or bytes) of a file, like a tiny `head`.
///
/// ```text
/// docket-demo [-n <int>] [--unit <lines|bytes>] [--from <int>] <path>
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut count = ValueArg::new("count", "how much to print", 10usize, "int").flag('n');
    let mut unit = ValueArg::new("unit", "what to count", String::from("lines"), "unit")
        .allowed(["lines".to_owned(), "bytes".to_owned()]);
    let mut from = ValueArg::new("from", "lines or bytes to skip first", 0usize, "int")
        .ignoreable()
        .visitor(|| log::info!("skipping ahead before printing"));
    let mut path = UnlabeledValueArg::new("path", "the file to read", PathBuf::new(), "path");

    let mut list = DescriptorList::new();
    list.register(&mut count)?;
    list.register(&mut unit)?;
    list.register(&mut from)?;
    list.register(&mut path)?;

    if let Err(error) = list.parse(&args) {
        let usage: Vec<String> = list.iter().map(|arg| arg.short_id()).collect();
        eprintln!("usage: docket-demo {}", usage.join(" "));
        return Err(error.into());
    }

    log::debug!(
        "count={} unit={} from={} path={:?}",
        count.value(),
        unit.value(),
        from.value(),
        path.value()
    );

    let path = path.into_value();
    let content =
        fs::read_to_string(&path).with_context(|| format!("couldn't read {}", path.display()))?;

    let (count, from) = (count.into_value(), from.into_value());

    match unit.value().as_str() {
        "bytes" => {
            let bytes = content.as_bytes();
            let start = from.min(bytes.len());
            let end = start.saturating_add(count).min(bytes.len());
            print!("{}", String::from_utf8_lossy(&bytes[start..end]));
        }
        _ => content
            .lines()
            .skip(from)
            .take(count)
            .for_each(|line| println!("{line}")),
    }

    Ok(())
}
