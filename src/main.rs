use std::fmt::Debug;

use anyhow::{Context, bail};
use rangekit::{Interval, Item, Sequence, join, log::logger};

const USAGE: &str = "usage: rangekit <from..=to[:step]> [<from..=to[:step]> [<from..=to[:step]>]]";

/// print every value of `seq`, one per line, returning how many were printed
fn print_all<S: Sequence>(seq: S) -> usize
where
    Item<S>: Debug,
{
    let mut count = 0;
    for value in seq.begin() {
        println!("{value:?}");
        count += 1;
    }
    count
}

fn main() -> anyhow::Result<()> {
    let intervals = std::env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<Interval<i64>>()
                .with_context(|| format!("Invalid interval argument {arg:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    logger().verbose(&format!("Enumerating {} dimension(s)", intervals.len()));

    let count = match intervals.as_slice() {
        [a] => print_all(*a),
        [a, b] => print_all(join((*a, *b))),
        [a, b, c] => print_all(join((*a, *b, *c))),
        _ => {
            logger().error(USAGE);
            bail!("expected 1 to 3 intervals, found {}", intervals.len());
        }
    };

    logger().info(&format!("Printed {count} value(s)"));

    Ok(())
}
