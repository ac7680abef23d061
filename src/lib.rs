/*!
A typed, descriptor-driven command line arguments parsing library.

Each argument a program accepts is declared as a *descriptor*: a
[`ValueArg`] for labeled arguments like `--count 2` or `-c=2`, or an
[`UnlabeledValueArg`] for positional ones. Descriptors are registered into a
[`DescriptorList`], which decides the order they're offered tokens in and runs
the parse pass; afterwards each descriptor holds its typed value.

```
use std::path::PathBuf;

use docket::{DescriptorList, ParseError, UnlabeledValueArg, ValueArg};

let mut jobs = ValueArg::new("jobs", "parallel jobs", 1u16, "int").flag('j');
let mut input = UnlabeledValueArg::new("input", "file to read", PathBuf::new(), "path");

let mut list = DescriptorList::new();
list.register(&mut jobs).unwrap();
list.register(&mut input).unwrap();

let result: Result<(), ParseError> = list.parse(&["-j", "4", "data.csv"]);
assert!(result.is_ok());

assert_eq!(*jobs.value(), 4);
assert_eq!(input.value(), &PathBuf::from("data.csv"));
```

Values are extracted through the [`Value`] trait, which every [`FromStr`]
type gets by implementing the [`ParsedValue`] marker; a single argument can
also be given its own [`Extractor`]. Arguments can be restricted to an
allowed set of values, and can run a [`Visitor`] when they're given.

The crate logs what it does through the [`log`] facade, at `debug` and
`trace` levels; it never installs a logger itself.

[`FromStr`]: core::str::FromStr
*/

mod binding;
pub mod constraint;
pub mod descriptor;
pub mod errors;
mod impls;
mod labeled;
mod list;
pub mod state;
mod unlabeled;
pub mod value;

pub use constraint::Allowed;
pub use descriptor::{Descriptor, Identity, Insertion, Placement, Visitor};
pub use docket_parser::{Cursor, Token};
pub use errors::{ArgError, ParseError, SpecError};
pub use labeled::ValueArg;
pub use list::DescriptorList;
pub use unlabeled::UnlabeledValueArg;
pub use value::{ExtractError, Extractor, ParsedValue, Value};
