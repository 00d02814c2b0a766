#![doc = r#"
webpify — batch PNG/JPEG to WebP conversion for asset folders.

Every `.png`, `.jpg` and `.jpeg` file (any letter case) directly inside an input
folder is decoded, flattened to three-channel RGB and written as a lossy WebP
file with the same stem into an output folder. A bad file never stops the
batch; its failure is recorded and the run moves on.

Quick start: convert a folder
-----------------------------
```rust,no_run
use webpify::{convert_all, ConversionParams};

fn main() -> webpify::Result<()> {
    let params = ConversionParams::new("assets/story_images", "assets/story_images")
        .with_quality(85);

    let summary = convert_all(&params)?;
    println!("{}", summary.message());
    for failure in summary.failures() {
        eprintln!("failed: {}", failure.file());
    }
    Ok(())
}
```

Single file
-----------
```rust,no_run
use std::path::Path;
use webpify::{convert_file, ConversionResult};

match convert_file(Path::new("cover.png"), Path::new("out"), 85) {
    ConversionResult::Converted { output, .. } => println!("wrote {}", output.display()),
    ConversionResult::Failed { reason, .. } => eprintln!("{reason}"),
}
```

Error handling
--------------
`convert_all` only returns `Err` before any file is touched: a missing input
folder (`Error::DirectoryNotFound`), invalid parameters, or an output folder
that cannot be created.

```rust,no_run
use webpify::{convert_all, ConversionParams, Error};

match convert_all(&ConversionParams::new("missing", "out")) {
    Ok(summary) => println!("{}", summary.message()),
    Err(Error::DirectoryNotFound { path }) => eprintln!("no such folder: {}", path.display()),
    Err(other) => eprintln!("{other}"),
}
```

Useful modules
--------------
- [`api`] — `convert_all`, `convert_file`, `RunSummary`.
- [`core`] — parameters, color normalization, the per-file conversion step.
- [`io`] — candidate discovery and the WebP writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::{ConversionParams, DEFAULT_QUALITY, ParamsOverrides};
pub use crate::error::{Error, Result};
pub use crate::types::{ConversionResult, ImageExtension};

// Building blocks
pub use crate::core::processing::normalize::to_three_channel;
pub use crate::io::scan::{iterate_candidates, output_file_name};

// High-level API re-exports
pub use crate::api::{RunSummary, convert_all, convert_file};
